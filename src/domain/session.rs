use uuid::Uuid;

/// Generates a random session identifier in the hyphenated 8-4-4-4-12 layout
/// with the version nibble fixed to `4`.
pub fn generate_session_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

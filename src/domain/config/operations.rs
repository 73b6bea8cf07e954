use super::types::LogglyConfig;
use crate::domain::error::TrackError;
use crate::domain::session::generate_session_id;
use crate::platform::Platform;

pub const CONFIG_COOKIE_NAME: &str = "loggly-track-config";

/// Reads the persisted configuration record.
///
/// An absent slot yields an empty record. A slot that does not hold a JSON
/// object is reported as a serialization fault.
pub fn read_config(platform: &Platform) -> Result<LogglyConfig, TrackError> {
    let Some(saved) = platform.storage().get(CONFIG_COOKIE_NAME)? else {
        return Ok(LogglyConfig::default());
    };

    if saved.is_empty() {
        return Ok(LogglyConfig::default());
    }

    serde_json::from_str(&saved).map_err(|e| {
        TrackError::serialization(format!("Failed to deserialize persisted config: {e}"))
    })
}

pub fn save_config(platform: &Platform, config: &LogglyConfig) -> Result<(), TrackError> {
    let text = serde_json::to_string(config)
        .map_err(|e| TrackError::serialization(format!("Failed to serialize config: {e}")))?;
    platform.storage().set(CONFIG_COOKIE_NAME, &text)
}

/// Merges defaults, the persisted record and `overrides` (in that order),
/// assigns a session identifier when none survived the merge, persists the
/// result and returns it.
pub fn configure(platform: &Platform, overrides: LogglyConfig) -> Result<LogglyConfig, TrackError> {
    let persisted = read_config(platform)?;

    let mut configuration = LogglyConfig::defaults().merge(persisted).merge(overrides);

    if configuration.session_id().is_none() {
        let session_id = generate_session_id();
        platform
            .logger()
            .debug(&format!("Assigned new Loggly session {session_id}"));
        configuration.session_id = Some(session_id);
    }

    save_config(platform, &configuration)?;

    Ok(configuration)
}

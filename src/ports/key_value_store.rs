use crate::domain::error::TrackError;

/// Port for the small durable slot the configuration record lives in.
pub trait KeyValueStorePort: Send + Sync {
    fn get(&self, name: &str) -> Result<Option<String>, TrackError>;

    fn set(&self, name: &str, value: &str) -> Result<(), TrackError>;
}

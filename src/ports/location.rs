use crate::domain::endpoint::PageLocation;
use crate::domain::error::TrackError;

/// Port for the scheme and host of the embedding page.
pub trait LocationPort: Send + Sync {
    fn current(&self) -> Result<PageLocation, TrackError>;
}

use crate::domain::endpoint::{PageLocation, Scheme};
use crate::domain::error::TrackError;
use crate::ports::LocationPort;

/// Fixed page location for native hosts, which have no embedding page.
#[derive(Debug, Clone)]
pub struct StaticLocation {
    page: PageLocation,
}

impl StaticLocation {
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            page: PageLocation::new(scheme, host),
        }
    }
}

impl Default for StaticLocation {
    fn default() -> Self {
        Self::new(Scheme::Https, "localhost")
    }
}

impl LocationPort for StaticLocation {
    fn current(&self) -> Result<PageLocation, TrackError> {
        Ok(self.page.clone())
    }
}

use crate::domain::cookie::{format_cookie, read_cookie, CookieAttributes};
use crate::domain::error::TrackError;
use crate::global::html_document;
use crate::ports::KeyValueStorePort;

/// Key-value store backed by `document.cookie`.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    attributes: CookieAttributes,
}

impl CookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes(attributes: CookieAttributes) -> Self {
        Self { attributes }
    }
}

impl KeyValueStorePort for CookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, TrackError> {
        let jar = html_document()?
            .cookie()
            .map_err(|e| TrackError::storage(format!("Failed to read cookies: {:?}", e)))?;
        read_cookie(&jar, name)
    }

    fn set(&self, name: &str, value: &str) -> Result<(), TrackError> {
        html_document()?
            .set_cookie(&format_cookie(name, value, &self.attributes))
            .map_err(|e| TrackError::storage(format!("Failed to write cookie: {:?}", e)))
    }
}

use crate::domain::endpoint::PageLocation;
use crate::domain::error::TrackError;
use crate::global::page_location;
use crate::ports::LocationPort;

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLocation;

impl WindowLocation {
    pub fn new() -> Self {
        Self
    }
}

impl LocationPort for WindowLocation {
    fn current(&self) -> Result<PageLocation, TrackError> {
        page_location()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_location_matches_window() {
        let page = WindowLocation::new().current().unwrap();
        let host = web_sys::window().unwrap().location().host().unwrap();
        assert_eq!(page.host, host);
    }
}

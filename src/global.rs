use crate::domain::endpoint::PageLocation;
use crate::domain::endpoint::Scheme;
use crate::domain::error::TrackError;
use wasm_bindgen::prelude::*;
use web_sys::{self, DedicatedWorkerGlobalScope, HtmlDocument, Window};

pub fn get_global_scope() -> Result<JsValue, TrackError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    // Fallback to window
    let window = web_sys::window().ok_or_else(|| {
        TrackError::environment("Neither DedicatedWorkerGlobalScope nor Window found")
    })?;
    Ok(JsValue::from(window))
}

pub fn window() -> Result<Window, TrackError> {
    web_sys::window().ok_or_else(|| TrackError::environment("No window available"))
}

pub fn html_document() -> Result<HtmlDocument, TrackError> {
    window()?
        .document()
        .ok_or_else(|| TrackError::environment("No document available"))?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| TrackError::environment("Document is not an HTML document"))
}

/// Scheme and host of the current window, or of the worker's script URL.
pub fn page_location() -> Result<PageLocation, TrackError> {
    let scope = get_global_scope()?;

    let (protocol, host) = if let Ok(worker) = scope.clone().dyn_into::<DedicatedWorkerGlobalScope>() {
        let location = worker.location();
        (location.protocol(), location.host())
    } else if let Ok(window) = scope.dyn_into::<Window>() {
        let location = window.location();
        (location.protocol()?, location.host()?)
    } else {
        return Err(TrackError::environment("Could not access location"));
    };

    Ok(PageLocation::new(Scheme::from_protocol(&protocol), host))
}

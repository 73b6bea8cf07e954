use crate::domain::error::TrackError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to TrackError for WASM infrastructure
impl From<JsValue> for TrackError {
    fn from(err: JsValue) -> Self {
        TrackError::environment(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

/// Conversion from TrackError to JsValue for WASM boundary
impl From<TrackError> for JsValue {
    fn from(error: TrackError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

use crate::domain::config::LogglyConfig;
use crate::domain::error::TrackError;
use crate::domain::event::Payload;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn js_kind(value: &JsValue) -> &'static str {
    if value.is_undefined() {
        "undefined"
    } else if value.is_null() {
        "null"
    } else if value.as_bool().is_some() {
        "boolean"
    } else if value.as_f64().is_some() {
        "number"
    } else if js_sys::Array::is_array(value) {
        "array"
    } else if value.is_function() {
        "function"
    } else {
        "unsupported value"
    }
}

/// Accepts a JS string or a plain object; everything else is rejected.
pub fn js_value_to_payload(value: JsValue) -> Result<Payload, TrackError> {
    if let Some(text) = value.as_string() {
        return Ok(Payload::Text(text));
    }

    if !value.is_object() || js_sys::Array::is_array(&value) || value.is_function() {
        return Err(TrackError::unsupported_payload(js_kind(&value)));
    }

    let json: serde_json::Value = from_value(value)
        .map_err(|e| TrackError::serialization(format!("Failed to read payload: {}", e)))?;
    Payload::try_from(json)
}

/// `undefined` and `null` mean "no overrides".
pub fn js_value_to_config(value: JsValue) -> Result<LogglyConfig, TrackError> {
    if value.is_undefined() || value.is_null() {
        return Ok(LogglyConfig::default());
    }

    from_value(value)
        .map_err(|e| TrackError::serialization(format!("Failed to read configuration: {}", e)))
}

/// Converts through JSON text so records come back as plain JS objects.
pub fn config_to_js_value(config: &LogglyConfig) -> Result<JsValue, TrackError> {
    let text = serde_json::to_string(config)
        .map_err(|e| TrackError::serialization(format!("Failed to serialize config: {}", e)))?;
    Ok(js_sys::JSON::parse(&text)?)
}

use super::types::{OutgoingRequest, Payload, CONTENT_TYPE, SESSION_ID_FIELD, TEXT_FIELD};
use crate::domain::config::LogglyConfig;
use crate::domain::endpoint::{input_url, PageLocation};
use crate::domain::error::TrackError;
use serde_json::{Map, Value};

/// Turns a payload into the JSON record sent to the collector, stamping the
/// session identifier over any `sessionId` the payload carried.
pub fn event_body(payload: Payload, session_id: Option<&str>) -> Map<String, Value> {
    let mut record = match payload {
        Payload::Text(text) => {
            let mut record = Map::new();
            record.insert(TEXT_FIELD.to_string(), Value::String(text));
            record
        }
        Payload::Structured(record) => record,
    };

    match session_id {
        Some(id) => {
            record.insert(SESSION_ID_FIELD.to_string(), Value::String(id.to_string()));
        }
        None => {
            record.remove(SESSION_ID_FIELD);
        }
    }

    record
}

pub fn build_request(
    config: &LogglyConfig,
    page: &PageLocation,
    payload: Payload,
) -> Result<OutgoingRequest, TrackError> {
    let url = input_url(config, page)?;
    let body = serde_json::to_string(&event_body(payload, config.session_id()))
        .map_err(|e| TrackError::serialization(format!("Failed to serialize event: {e}")))?;

    Ok(OutgoingRequest {
        url,
        content_type: CONTENT_TYPE,
        body,
    })
}

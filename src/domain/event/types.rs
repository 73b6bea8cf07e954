use crate::domain::error::TrackError;
use serde_json::{json, Map, Value};

pub const TEXT_FIELD: &str = "text";
pub const SESSION_ID_FIELD: &str = "sessionId";
pub const CONTENT_TYPE: &str = "text/plain";
pub const BROWSER_EXCEPTION_CATEGORY: &str = "BrowserJsException";

/// An event accepted by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Structured(Map<String, Value>),
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(record: Map<String, Value>) -> Self {
        Payload::Structured(record)
    }
}

impl TryFrom<Value> for Payload {
    type Error = TrackError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Payload::Text(text)),
            Value::Object(record) => Ok(Payload::Structured(record)),
            Value::Null => Err(TrackError::unsupported_payload("null")),
            Value::Bool(_) => Err(TrackError::unsupported_payload("boolean")),
            Value::Number(_) => Err(TrackError::unsupported_payload("number")),
            Value::Array(_) => Err(TrackError::unsupported_payload("array")),
        }
    }
}

/// An uncaught error captured by the global error hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncaughtError {
    pub message: String,
    pub url: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl UncaughtError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            url: None,
            line: None,
            column: None,
        }
    }

    pub fn at(mut self, url: impl Into<String>, line: u32, column: u32) -> Self {
        self.url = Some(url.into());
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn to_payload(&self) -> Payload {
        let mut record = Map::new();
        record.insert("category".to_string(), json!(BROWSER_EXCEPTION_CATEGORY));
        record.insert(
            "exception".to_string(),
            json!({
                "message": self.message,
                "url": self.url,
                "lineno": self.line,
                "colno": self.column,
            }),
        );
        Payload::Structured(record)
    }
}

/// A fully built POST request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status: u16,
}

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackError {
    Storage(String),
    Serialization(String),
    MissingInputKey,
    UnsupportedPayload(String),
    Transport(String),
    Environment(String),
    ErrorHook(String),
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            TrackError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
            TrackError::MissingInputKey => write!(f, "No Loggly input key configured"),
            TrackError::UnsupportedPayload(kind) => {
                write!(f, "Unsupported payload: expected a string or an object, got {kind}")
            }
            TrackError::Transport(msg) => write!(f, "Transport Error: {msg}"),
            TrackError::Environment(msg) => write!(f, "Environment Error: {msg}"),
            TrackError::ErrorHook(msg) => write!(f, "Error Hook Error: {msg}"),
        }
    }
}

impl std::error::Error for TrackError {}

impl TrackError {
    pub fn storage(message: impl Into<String>) -> Self {
        TrackError::Storage(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        TrackError::Serialization(message.into())
    }

    pub fn unsupported_payload(kind: impl Into<String>) -> Self {
        TrackError::UnsupportedPayload(kind.into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        TrackError::Transport(message.into())
    }

    pub fn environment(message: impl Into<String>) -> Self {
        TrackError::Environment(message.into())
    }

    pub fn error_hook(message: impl Into<String>) -> Self {
        TrackError::ErrorHook(message.into())
    }
}

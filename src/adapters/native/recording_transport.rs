use crate::domain::error::TrackError;
use crate::domain::event::{DeliveryReceipt, OutgoingRequest};
use crate::ports::TransportPort;
use async_trait::async_trait;
use parking_lot::Mutex;

/// Transport that keeps every request in memory instead of sending it.
///
/// For tests and hosts that inspect outgoing events themselves; `failing`
/// makes every send fail after recording the request. Never a default.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<OutgoingRequest>>,
    failure: Option<String>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.requests.lock().clone()
    }

    pub fn take_requests(&self) -> Vec<OutgoingRequest> {
        std::mem::take(&mut *self.requests.lock())
    }
}

#[async_trait]
impl TransportPort for RecordingTransport {
    async fn post(&self, request: &OutgoingRequest) -> Result<DeliveryReceipt, TrackError> {
        self.requests.lock().push(request.clone());

        match &self.failure {
            Some(message) => Err(TrackError::transport(message.clone())),
            None => Ok(DeliveryReceipt { status: 200 }),
        }
    }
}

use crate::domain::error::TrackError;
use crate::domain::event::{DeliveryReceipt, OutgoingRequest};
use crate::ports::TransportPort;
use async_trait::async_trait;

/// Default native transport. Native hosts bring their own HTTP client through
/// `Platform::with_transport`; until they do, every send fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredTransport;

impl UnconfiguredTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TransportPort for UnconfiguredTransport {
    async fn post(&self, request: &OutgoingRequest) -> Result<DeliveryReceipt, TrackError> {
        Err(TrackError::transport(format!(
            "No transport configured, event for {} was not sent",
            request.url
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_post_fails_without_sending() {
        let request = OutgoingRequest {
            url: "https://logs-01.loggly.com/loggly/inputs/k".to_string(),
            content_type: "text/plain",
            body: "{}".to_string(),
        };

        let result = block_on(UnconfiguredTransport::new().post(&request));
        assert!(matches!(result, Err(TrackError::Transport(_))));
    }
}

use crate::domain::error::TrackError;
use crate::domain::event::{DeliveryReceipt, OutgoingRequest};
use async_trait::async_trait;

/// Port for the one-shot HTTP POST to the collector.
///
/// Browser futures are tied to the page's single thread; native ones must be
/// `Send` so a detached send can run away from the reporting thread.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TransportPort: Send + Sync {
    async fn post(&self, request: &OutgoingRequest) -> Result<DeliveryReceipt, TrackError>;
}

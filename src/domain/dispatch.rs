use super::config::LogglyConfig;
use super::error::TrackError;
use super::event::{build_request, DeliveryReceipt, OutgoingRequest, Payload};
use crate::platform::Platform;
use parking_lot::RwLock;

/// A POST that has been built but not yet awaited. Dropping it cancels the
/// send; awaiting it yields the transport's receipt.
#[cfg(target_arch = "wasm32")]
pub type PendingDispatch = futures::future::LocalBoxFuture<'static, Result<DeliveryReceipt, TrackError>>;
#[cfg(not(target_arch = "wasm32"))]
pub type PendingDispatch = futures::future::BoxFuture<'static, Result<DeliveryReceipt, TrackError>>;

/// Sends events using an explicit configuration snapshot.
///
/// The snapshot only changes through [`Dispatcher::update_config`]; the
/// persisted record is never re-read on the send path.
pub struct Dispatcher {
    platform: Platform,
    config: RwLock<LogglyConfig>,
}

impl Dispatcher {
    pub fn new(platform: &Platform, config: LogglyConfig) -> Self {
        Self {
            platform: platform.clone(),
            config: RwLock::new(config),
        }
    }

    pub fn update_config(&self, config: LogglyConfig) {
        *self.config.write() = config;
    }

    pub fn config(&self) -> LogglyConfig {
        self.config.read().clone()
    }

    /// Builds the request for `payload` against the current snapshot.
    pub fn prepare(&self, payload: Payload) -> Result<OutgoingRequest, TrackError> {
        let page = self.platform.location().current()?;
        let config = self.config.read();
        build_request(&config, &page, payload)
    }

    /// Validates and builds the request now, and returns the send as a future
    /// the caller is free to ignore.
    pub fn push(&self, payload: Payload) -> Result<PendingDispatch, TrackError> {
        let request = self.prepare(payload)?;
        let transport = self.platform.transport();
        let logger = self.platform.logger();

        logger.debug(&format!("Dispatching event to {}", request.url));

        Ok(Box::pin(async move { transport.post(&request).await }))
    }
}

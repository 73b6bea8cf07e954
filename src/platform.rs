/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful ports: `Arc<dyn Trait>` (ref-counted, swappable through the
///   `with_*` builders)
use crate::ports::{ErrorHookPort, KeyValueStorePort, LocationPort, LoggerPort, TransportPort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    storage: Arc<dyn KeyValueStorePort>,
    transport: Arc<dyn TransportPort>,
    location: Arc<dyn LocationPort>,
    error_hook: Arc<dyn ErrorHookPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            storage: crate::adapters::default_storage(),
            transport: crate::adapters::default_transport(),
            location: crate::adapters::default_location(),
            error_hook: crate::adapters::default_error_hook(),
        }
    }

    pub fn with_logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_storage(mut self, storage: Arc<dyn KeyValueStorePort>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn TransportPort>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_location(mut self, location: Arc<dyn LocationPort>) -> Self {
        self.location = location;
        self
    }

    pub fn with_error_hook(mut self, error_hook: Arc<dyn ErrorHookPort>) -> Self {
        self.error_hook = error_hook;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn storage(&self) -> &dyn KeyValueStorePort {
        &*self.storage
    }

    #[inline]
    pub fn transport(&self) -> Arc<dyn TransportPort> {
        self.transport.clone()
    }

    #[inline]
    pub fn location(&self) -> &dyn LocationPort {
        &*self.location
    }

    #[inline]
    pub fn error_hook(&self) -> &dyn ErrorHookPort {
        &*self.error_hook
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

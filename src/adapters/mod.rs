/// Adapters module - platform-specific implementations of ports.

pub mod global_logger;
pub mod spawn;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;

pub use global_logger::logger;
pub use spawn::spawn_detached;

use crate::ports::{ErrorHookPort, KeyValueStorePort, LocationPort, TransportPort};
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Arc<dyn KeyValueStorePort> {
    Arc::new(wasm::CookieStore::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Arc<dyn KeyValueStorePort> {
    native::MemoryStore::shared()
}

#[cfg(target_arch = "wasm32")]
pub fn default_transport() -> Arc<dyn TransportPort> {
    Arc::new(wasm::FetchTransport::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_transport() -> Arc<dyn TransportPort> {
    Arc::new(native::UnconfiguredTransport::new())
}

#[cfg(target_arch = "wasm32")]
pub fn default_location() -> Arc<dyn LocationPort> {
    Arc::new(wasm::WindowLocation::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_location() -> Arc<dyn LocationPort> {
    Arc::new(native::StaticLocation::default())
}

#[cfg(target_arch = "wasm32")]
pub fn default_error_hook() -> Arc<dyn ErrorHookPort> {
    Arc::new(wasm::WindowErrorHook::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_error_hook() -> Arc<dyn ErrorHookPort> {
    Arc::new(native::PanicHook::new())
}

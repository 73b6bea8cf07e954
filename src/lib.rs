#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

#[cfg(target_arch = "wasm32")]
pub mod global;
pub mod tracker;

pub use domain::config::{configure, read_config, LogglyConfig};
pub use domain::cookie::CookieAttributes;
pub use domain::dispatch::{Dispatcher, PendingDispatch};
pub use domain::endpoint::{input_url, PageLocation, Scheme};
pub use domain::error::TrackError;
pub use domain::event::{DeliveryReceipt, OutgoingRequest, Payload, UncaughtError};
pub use platform::Platform;
pub use tracker::LogglyTracker;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}

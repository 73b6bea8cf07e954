/// Ports module - the traits that abstract the embedding environment.
///
/// The domain layer only talks to these traits; `adapters` provides browser
/// and native implementations and `Platform` wires one of each together.

pub mod error_hook;
pub mod key_value_store;
pub mod location;
pub mod logger;
pub mod transport;

pub use error_hook::ErrorHookPort;
pub use key_value_store::KeyValueStorePort;
pub use location::LocationPort;
pub use logger::LoggerPort;
pub use transport::TransportPort;

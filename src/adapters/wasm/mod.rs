/// WASM adapters - implementations using browser APIs.

pub mod console_logger;
pub mod cookie_store;
pub mod error_conversions;
pub mod fetch_transport;
pub mod location;
pub mod window_error_hook;

pub use console_logger::ConsoleLogger;
pub use cookie_store::CookieStore;
pub use fetch_transport::FetchTransport;
pub use location::WindowLocation;
pub use window_error_hook::WindowErrorHook;

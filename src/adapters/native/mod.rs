/// Native adapters - implementations for native Rust (non-WASM).

pub mod console_logger;
pub mod location;
pub mod memory_store;
pub mod panic_hook;
pub mod recording_transport;
pub mod unconfigured_transport;

pub use console_logger::ConsoleLogger;
pub use location::StaticLocation;
pub use memory_store::MemoryStore;
pub use panic_hook::PanicHook;
pub use recording_transport::RecordingTransport;
pub use unconfigured_transport::UnconfiguredTransport;

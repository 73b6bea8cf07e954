pub mod converters;
pub mod tracker;

pub use tracker::WasmTracker;

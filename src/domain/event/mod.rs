pub mod operations;
pub mod types;

pub use operations::{build_request, event_body};
pub use types::{DeliveryReceipt, OutgoingRequest, Payload, UncaughtError};

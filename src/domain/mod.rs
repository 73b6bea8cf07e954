pub mod config;
pub mod cookie;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod error_hook;
pub mod event;
pub mod session;

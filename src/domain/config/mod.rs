pub mod operations;
pub mod types;

pub use operations::{configure, read_config, save_config, CONFIG_COOKIE_NAME};
pub use types::{LogglyConfig, DEFAULT_COLLECTOR_DOMAIN};

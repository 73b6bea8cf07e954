use once_cell::sync::Lazy;
use std::env;

pub struct Config {
    pub port: u16,
    pub collector_domain: String,
    pub collector_scheme: String,
    /// Empty means every origin is accepted.
    pub allowed_origins: Vec<String>,
    pub rate_limit_window_secs: u64,
    pub rate_limit_max_requests: usize,
    pub max_connections: usize,
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: env_or("PORT", 8080),
            collector_domain: env::var("COLLECTOR_DOMAIN")
                .unwrap_or_else(|_| "logs-01.loggly.com".to_string()),
            collector_scheme: env::var("COLLECTOR_SCHEME").unwrap_or_else(|_| "https".to_string()),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            rate_limit_window_secs: env_or("RATE_LIMIT_WINDOW_SECS", 60),
            rate_limit_max_requests: env_or("RATE_LIMIT_MAX_REQUESTS", 300),
            max_connections: env_or("MAX_CONNECTIONS", 1000),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

use actix_web::{error::ErrorForbidden, http::header, Error, HttpRequest};
use parking_lot::Mutex;
use std::{
    collections::{HashMap, VecDeque},
    net::SocketAddr,
    time::{Duration, Instant},
};

/// Sliding-window budget per client and Loggly input.
///
/// Each `(client, input key)` pair may forward `max_events` events within any
/// `window`. A page flooding one input does not exhaust the budget its other
/// inputs have.
#[derive(Debug)]
pub struct InputRateLimiter {
    sent: Mutex<HashMap<(String, String), VecDeque<Instant>>>,
    window: Duration,
    max_events: usize,
}

impl InputRateLimiter {
    pub fn new(window_secs: u64, max_events: usize) -> Self {
        Self {
            sent: Mutex::new(HashMap::new()),
            window: Duration::from_secs(window_secs),
            max_events,
        }
    }

    pub fn allow(&self, client: &str, input_key: &str) -> bool {
        self.allow_at(client, input_key, Instant::now())
    }

    fn allow_at(&self, client: &str, input_key: &str, now: Instant) -> bool {
        let mut sent = self.sent.lock();
        let window = self.window;
        let expired = |at: &Instant| now.saturating_duration_since(*at) >= window;

        sent.retain(|_, times| times.back().is_some_and(|last| !expired(last)));

        let times = sent
            .entry((client.to_string(), input_key.to_string()))
            .or_default();
        while times.front().is_some_and(expired) {
            times.pop_front();
        }

        if times.len() < self.max_events {
            times.push_back(now);
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.sent.lock().len()
    }
}

/// Rejects requests whose `Origin` header is not on the allow-list. Requests
/// without an `Origin` header, or an empty allow-list, pass.
pub fn validate_origin(req: &HttpRequest, allowed_origins: &[String]) -> Result<(), Error> {
    if allowed_origins.is_empty() {
        return Ok(());
    }

    if let Some(origin) = req.headers().get(header::ORIGIN) {
        let origin_str = origin
            .to_str()
            .map_err(|_| ErrorForbidden("Invalid origin"))?;
        if !allowed_origins.iter().any(|allowed| allowed == origin_str) {
            return Err(ErrorForbidden("Origin not allowed"));
        }
    }
    Ok(())
}

/// Client address without the port, so every connection from one browser
/// shares a budget.
pub fn client_ip(req: &HttpRequest) -> String {
    let info = req.connection_info();
    match info.realip_remote_addr() {
        Some(addr) => addr
            .parse::<SocketAddr>()
            .map(|socket| socket.ip().to_string())
            .unwrap_or_else(|_| addr.to_string()),
        None => "unknown".to_string(),
    }
}

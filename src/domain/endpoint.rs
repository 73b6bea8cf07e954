use super::config::LogglyConfig;
use super::error::TrackError;
use std::fmt;

/// Path segment the collector (or the site's reverse proxy) serves inputs under.
pub const INPUT_PATH_PREFIX: &str = "loggly";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Maps a `location.protocol` value such as `"https:"`.
    pub fn from_protocol(protocol: &str) -> Self {
        if protocol.trim_end_matches(':').eq_ignore_ascii_case("https") {
            Scheme::Https
        } else {
            Scheme::Http
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheme and host of the page embedding the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    pub scheme: Scheme,
    pub host: String,
}

impl PageLocation {
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            scheme,
            host: host.into(),
        }
    }
}

/// Builds `{scheme}://{host}/loggly/inputs/{key}/tag/{tag}`.
///
/// The page scheme always wins; the host is the page's own host when domain
/// proxying is enabled, the collector domain otherwise.
pub fn input_url(config: &LogglyConfig, page: &PageLocation) -> Result<String, TrackError> {
    let key = config
        .loggly_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or(TrackError::MissingInputKey)?;

    let host = if config.uses_domain_proxy() {
        page.host.as_str()
    } else {
        config.collector_domain()
    };

    let mut url = format!(
        "{}://{}/{}/inputs/{}",
        page.scheme,
        host,
        INPUT_PATH_PREFIX,
        urlencoding::encode(key)
    );

    if let Some(tag) = config.tag.as_deref().filter(|tag| !tag.is_empty()) {
        url.push_str("/tag/");
        url.push_str(&urlencoding::encode(tag));
    }

    Ok(url)
}

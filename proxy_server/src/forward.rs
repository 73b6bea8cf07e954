use log::{debug, error};
use reqwest::header::CONTENT_TYPE;

pub const INPUT_CONTENT_TYPE: &str = "text/plain";

/// Where the proxy sends what it receives under `/loggly/`.
#[derive(Debug, Clone)]
pub struct Upstream {
    pub scheme: String,
    pub collector_domain: String,
}

impl Upstream {
    pub fn new(scheme: impl Into<String>, collector_domain: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            collector_domain: collector_domain.into(),
        }
    }

    /// `{scheme}://{collector}/inputs/{key}[/tag/{tag}]`
    pub fn input_url(&self, key: &str, tag: Option<&str>) -> String {
        let mut url = format!(
            "{}://{}/inputs/{}",
            self.scheme,
            self.collector_domain,
            urlencoding::encode(key)
        );
        if let Some(tag) = tag.filter(|tag| !tag.is_empty()) {
            url.push_str("/tag/");
            url.push_str(&urlencoding::encode(tag));
        }
        url
    }
}

#[derive(Debug)]
pub enum ForwardError {
    Upstream(String),
}

impl std::fmt::Display for ForwardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForwardError::Upstream(msg) => write!(f, "Upstream Error: {msg}"),
        }
    }
}

impl std::error::Error for ForwardError {}

/// Posts `body` to the collector and returns its status code.
pub async fn forward(
    client: &reqwest::Client,
    url: &str,
    body: Vec<u8>,
) -> Result<u16, ForwardError> {
    debug!("Forwarding {} bytes to {}", body.len(), url);

    let response = client
        .post(url)
        .header(CONTENT_TYPE, INPUT_CONTENT_TYPE)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            error!("Failed to reach collector at {}: {:?}", url, e);
            ForwardError::Upstream(e.to_string())
        })?;

    Ok(response.status().as_u16())
}

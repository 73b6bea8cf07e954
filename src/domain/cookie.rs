use super::error::TrackError;

/// Attributes appended when writing the configuration cookie.
///
/// All unset by default, which produces a session cookie scoped to the
/// current path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieAttributes {
    pub path: Option<String>,
    pub domain: Option<String>,
    pub max_age_secs: Option<u64>,
    pub secure: bool,
}

impl CookieAttributes {
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_max_age_secs(mut self, max_age_secs: u64) -> Self {
        self.max_age_secs = Some(max_age_secs);
        self
    }

    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }
}

/// Builds the string assigned to `document.cookie`.
pub fn format_cookie(name: &str, value: &str, attributes: &CookieAttributes) -> String {
    let mut cookie = format!("{}={};", urlencoding::encode(name), urlencoding::encode(value));

    if let Some(max_age) = attributes.max_age_secs {
        cookie.push_str(&format!("max-age={max_age};"));
    }
    if let Some(path) = &attributes.path {
        cookie.push_str(&format!("path={path};"));
    }
    if let Some(domain) = &attributes.domain {
        cookie.push_str(&format!("domain={domain};"));
    }
    if attributes.secure {
        cookie.push_str("secure;");
    }

    cookie
}

/// Looks up `name` in a `document.cookie` jar string (`a=1; b=2`).
///
/// Cookies written by other scripts are never decoded; only the value of the
/// matching cookie is, and a malformed one is a `Storage` fault.
pub fn read_cookie(jar: &str, name: &str) -> Result<Option<String>, TrackError> {
    let encoded_name = urlencoding::encode(name);

    for pair in jar.split(';') {
        let pair = pair.trim_start();
        let (raw_name, raw_value) = pair.split_once('=').unwrap_or((pair, ""));

        if raw_name == encoded_name.as_ref() {
            let value = urlencoding::decode(raw_value)
                .map_err(|e| TrackError::storage(format!("Malformed cookie value: {e}")))?;
            return Ok(Some(value.into_owned()));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_session_cookie() {
        let cookie = format_cookie("loggly-track-config", r#"{"tag":"web app"}"#, &CookieAttributes::default());
        assert_eq!(cookie, "loggly-track-config=%7B%22tag%22%3A%22web%20app%22%7D;");
    }

    #[test]
    fn test_format_with_attributes() {
        let attributes = CookieAttributes::default()
            .with_path("/")
            .with_domain("example.com")
            .with_max_age_secs(3600)
            .secure();
        let cookie = format_cookie("a", "b", &attributes);
        assert_eq!(cookie, "a=b;max-age=3600;path=/;domain=example.com;secure;");
    }

    #[test]
    fn test_read_cookie_finds_and_decodes_value() {
        let jar = "theme=dark; loggly-track-config=%7B%22tag%22%3A%22web%22%7D; other=1";
        let value = read_cookie(jar, "loggly-track-config").unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"tag":"web"}"#));
    }

    #[test]
    fn test_read_cookie_missing_name() {
        assert_eq!(read_cookie("theme=dark", "loggly-track-config").unwrap(), None);
        assert_eq!(read_cookie("", "loggly-track-config").unwrap(), None);
    }

    #[test]
    fn test_read_cookie_does_not_match_prefix() {
        let jar = "loggly-track-config-old=1; loggly-track=2";
        assert_eq!(read_cookie(jar, "loggly-track-config").unwrap(), None);
    }

    #[test]
    fn test_read_cookie_keeps_equals_in_value() {
        assert_eq!(read_cookie("k=a=b", "k").unwrap().as_deref(), Some("a=b"));
    }

    #[test]
    fn test_read_cookie_skips_undecodable_foreign_names() {
        let jar = "legacy%E9=1; loggly-track-config=%7B%22tag%22%3A%22web%22%7D";
        let value = read_cookie(jar, "loggly-track-config").unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"tag":"web"}"#));

        assert_eq!(read_cookie("legacy%E9=1; broken=%FF", "loggly-track-config").unwrap(), None);
    }

    #[test]
    fn test_read_cookie_matches_encoded_name() {
        let written = format_cookie("app config", "v", &CookieAttributes::default());
        let jar = format!("{}; other=1", written.trim_end_matches(';'));
        assert_eq!(read_cookie(&jar, "app config").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_read_cookie_rejects_invalid_utf8_escape() {
        let result = read_cookie("k=%FF%FE", "k");
        assert!(matches!(result, Err(TrackError::Storage(_))));
    }
}

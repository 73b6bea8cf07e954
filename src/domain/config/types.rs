use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_COLLECTOR_DOMAIN: &str = "logs-01.loggly.com";

/// Tracker configuration, persisted as camelCase JSON.
///
/// Every field is optional so the same type describes the defaults layer, the
/// persisted record and caller overrides. An absent field never erases a value
/// from an earlier layer during [`LogglyConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogglyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loggly_collector_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loggly_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_console_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_domain_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Keys this crate does not interpret, carried through merges untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogglyConfig {
    pub fn defaults() -> Self {
        Self {
            send_console_errors: Some(true),
            use_domain_proxy: Some(false),
            ..Self::default()
        }
    }

    /// Shallow merge: fields present in `over` win.
    pub fn merge(mut self, over: LogglyConfig) -> Self {
        if over.loggly_collector_domain.is_some() {
            self.loggly_collector_domain = over.loggly_collector_domain;
        }
        if over.loggly_key.is_some() {
            self.loggly_key = over.loggly_key;
        }
        if over.tag.is_some() {
            self.tag = over.tag;
        }
        if over.send_console_errors.is_some() {
            self.send_console_errors = over.send_console_errors;
        }
        if over.use_domain_proxy.is_some() {
            self.use_domain_proxy = over.use_domain_proxy;
        }
        if over.session_id.is_some() {
            self.session_id = over.session_id;
        }
        self.extra.extend(over.extra);
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.loggly_key = Some(key.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_collector_domain(mut self, domain: impl Into<String>) -> Self {
        self.loggly_collector_domain = Some(domain.into());
        self
    }

    pub fn with_console_errors(mut self, enabled: bool) -> Self {
        self.send_console_errors = Some(enabled);
        self
    }

    pub fn with_domain_proxy(mut self, enabled: bool) -> Self {
        self.use_domain_proxy = Some(enabled);
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn sends_console_errors(&self) -> bool {
        self.send_console_errors.unwrap_or(true)
    }

    pub fn uses_domain_proxy(&self) -> bool {
        self.use_domain_proxy.unwrap_or(false)
    }

    pub fn collector_domain(&self) -> &str {
        match self.loggly_collector_domain.as_deref() {
            Some(domain) if !domain.is_empty() => domain,
            _ => DEFAULT_COLLECTOR_DOMAIN,
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = LogglyConfig::defaults();
        assert!(config.sends_console_errors());
        assert!(!config.uses_domain_proxy());
        assert_eq!(config.collector_domain(), DEFAULT_COLLECTOR_DOMAIN);
        assert!(config.session_id().is_none());
    }

    #[test]
    fn test_merge_later_layer_wins() {
        let base = LogglyConfig::defaults().with_key("old").with_tag("web");
        let merged = base.merge(LogglyConfig::default().with_key("new").with_console_errors(false));

        assert_eq!(merged.loggly_key.as_deref(), Some("new"));
        assert_eq!(merged.tag.as_deref(), Some("web"));
        assert_eq!(merged.send_console_errors, Some(false));
        assert_eq!(merged.use_domain_proxy, Some(false));
    }

    #[test]
    fn test_merge_keeps_unknown_keys() {
        let mut base = LogglyConfig::default();
        base.extra.insert("appVersion".to_string(), json!("1.0"));
        let mut over = LogglyConfig::default();
        over.extra.insert("environment".to_string(), json!("prod"));

        let merged = base.merge(over);
        assert_eq!(merged.extra.get("appVersion"), Some(&json!("1.0")));
        assert_eq!(merged.extra.get("environment"), Some(&json!("prod")));
    }

    #[test]
    fn test_serializes_camel_case_and_skips_absent_fields() {
        let config = LogglyConfig::defaults().with_key("ABC");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({ "logglyKey": "ABC", "sendConsoleErrors": true, "useDomainProxy": false })
        );
    }

    #[test]
    fn test_deserializes_record_written_by_browser_tracker() {
        let text = r#"{"sendConsoleErrors":true,"useDomainProxy":false,"logglyKey":"k","tag":"t","sessionId":"s","custom":1}"#;
        let config: LogglyConfig = serde_json::from_str(text).unwrap();
        assert_eq!(config.loggly_key.as_deref(), Some("k"));
        assert_eq!(config.session_id(), Some("s"));
        assert_eq!(config.extra.get("custom"), Some(&json!(1)));
    }

    #[test]
    fn test_empty_collector_domain_falls_back() {
        let config = LogglyConfig::default().with_collector_domain("");
        assert_eq!(config.collector_domain(), DEFAULT_COLLECTOR_DOMAIN);
    }
}

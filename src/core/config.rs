use serde::Deserialize;

// ---------------------------------------------------------------------------
// Process-wide constants
// ---------------------------------------------------------------------------

/// Results page endpoint.
pub const BASE_URL: &str = "https://www.google.com/search";

/// Desktop browser UA. Google serves a stripped-down page (or nothing) to agents it does not recognize.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko";

/// Encoding every response body is normalized to.
pub const ENCODING: &str = "UTF-8";

/// Value of the `lr` query parameter: English-language pages only.
pub const LANGUAGE_RESTRICTION: &str = "lang_en";

pub const ACCEPT: &str = "text/html,application/xhtml+xml";

/// Snippet text used when a result carries no description element.
pub const NO_DESCRIPTION: &str = "No description available";

// ---------------------------------------------------------------------------
// SearcherConfig
// ---------------------------------------------------------------------------

/// Knobs for a [`Searcher`](crate::search::Searcher).
///
/// The library never reads files or environment variables. Host applications
/// that want file-based config can embed this struct in their own (it
/// deserializes with every field optional).
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SearcherConfig {
    /// Endpoint the `q`/`lr` parameters are appended to.
    pub base_url: String,
    /// Sent as the `User-Agent` header on every request.
    pub user_agent: String,
    /// Value of the `lr` parameter.
    pub language_restriction: String,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            language_restriction: LANGUAGE_RESTRICTION.to_string(),
        }
    }
}

impl SearcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn language_restriction(mut self, lr: impl Into<String>) -> Self {
        self.language_restriction = lr.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = SearcherConfig::default();
        assert_eq!(cfg.base_url, BASE_URL);
        assert_eq!(cfg.user_agent, USER_AGENT);
        assert_eq!(cfg.language_restriction, "lang_en");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: SearcherConfig =
            serde_json::from_str(r#"{ "base_url": "http://127.0.0.1:9000/search" }"#).unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:9000/search");
        assert_eq!(cfg.user_agent, USER_AGENT);
    }

    #[test]
    fn builder_overrides() {
        let cfg = SearcherConfig::new()
            .user_agent("test-agent")
            .language_restriction("lang_de");
        assert_eq!(cfg.user_agent, "test-agent");
        assert_eq!(cfg.language_restriction, "lang_de");
        assert_eq!(cfg.base_url, BASE_URL);
    }
}

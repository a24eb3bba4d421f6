pub mod date;
pub mod decode;
pub mod extract;
pub mod fetch;
pub mod html;
pub mod query;

use crate::core::config::{SearcherConfig, ACCEPT};
use crate::core::error::SearchFailedError;
use crate::types::SearchResultSet;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT as ACCEPT_HEADER, USER_AGENT};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

pub use date::parse_description;
pub use decode::decode_body;
pub use extract::extract_results;
pub use fetch::{FetchedPage, HttpFetcher, ReqwestFetcher};
pub use html::{HtmlParser, MarkupError, TolerantHtmlParser};
pub use query::build_search_url;

/// Google web search over the plain HTML results page.
///
/// Each call to [`search`](Self::search) is independent: one GET, no retries,
/// no shared mutable state, so a single `Searcher` can serve concurrent
/// searches.
#[derive(Clone)]
pub struct Searcher {
    fetcher: Arc<dyn HttpFetcher>,
    parser: Arc<dyn HtmlParser>,
    base_url: Url,
    config: SearcherConfig,
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.config.user_agent)
            .finish()
    }
}

impl Searcher {
    /// Searcher with the default config and a fresh `reqwest::Client`.
    pub fn new() -> Self {
        Self::with_fetcher(ReqwestFetcher::default())
    }

    /// Searcher with the default config on top of a caller-supplied fetcher.
    pub fn with_fetcher(fetcher: impl HttpFetcher + 'static) -> Self {
        let config = SearcherConfig::default();
        let base_url = Url::parse(&config.base_url).expect("default base url is valid");
        Self {
            fetcher: Arc::new(fetcher),
            parser: Arc::new(TolerantHtmlParser),
            base_url,
            config,
        }
    }

    /// Replace the config. Fails if `base_url` is not an absolute URL.
    pub fn with_config(mut self, config: SearcherConfig) -> Result<Self, url::ParseError> {
        self.base_url = Url::parse(&config.base_url)?;
        self.config = config;
        Ok(self)
    }

    pub fn with_parser(mut self, parser: impl HtmlParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    pub fn config(&self) -> &SearcherConfig {
        &self.config
    }

    /// The URL [`search`](Self::search) would request for `term`.
    pub fn search_url(&self, term: &str) -> Url {
        build_search_url(&self.base_url, term, &self.config.language_restriction)
    }

    /// Run one search and return the organic results in page order.
    ///
    /// Zero results is a successful, empty set. Transport failures, non-200
    /// responses and unusable markup fail the whole call.
    pub async fn search(&self, term: &str) -> Result<SearchResultSet, SearchFailedError> {
        let url = self.search_url(term);
        let uri = url.as_str();
        info!("Searching for: {}", term);

        let page = self
            .fetcher
            .fetch(&url, self.request_headers())
            .await
            .map_err(|e| {
                warn!("search request for '{}' failed: {}", term, e);
                SearchFailedError::transport(term, uri, e)
            })?;

        if page.status != StatusCode::OK {
            warn!("search for '{}' got HTTP {}", term, page.status.as_u16());
            return Err(SearchFailedError::http_status(term, uri, page.status.as_u16()));
        }

        let body = decode_body(&page.body, &page.content_type());

        let doc = self
            .parser
            .parse(&body)
            .map_err(|e| SearchFailedError::markup(term, uri, e))?;

        let results = if extract::result_containers(&doc).is_empty() {
            debug!("no result containers on page for '{}'", term);
            Vec::new()
        } else {
            extract_results(&doc)
        };

        info!("search for '{}' returned {} results", term, results.len());
        Ok(SearchResultSet::new(term, uri, results))
    }

    fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&self.config.user_agent) {
            Ok(v) => {
                headers.insert(USER_AGENT, v);
            }
            Err(_) => warn!("configured user agent is not a valid header value; sending none"),
        }
        headers.insert(ACCEPT_HEADER, HeaderValue::from_static(ACCEPT));
        headers
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

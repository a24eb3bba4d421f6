use thiserror::Error;

/// Boxed error carried as the cause of a failed search.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which pipeline step gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailureKind {
    /// DNS, connect, TLS, timeout: anything the HTTP client raised.
    Transport,
    /// Google answered with something other than 200.
    HttpStatus(u16),
    /// The body could not be turned into a document tree.
    Markup,
}

/// A search that could not produce a result set.
///
/// Carries the term and the request URI so callers can log or retry without
/// rebuilding the URL.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SearchFailedError {
    message: String,
    search_term: String,
    search_uri: String,
    kind: SearchFailureKind,
    #[source]
    cause: Option<BoxError>,
}

impl SearchFailedError {
    pub fn new(
        message: impl Into<String>,
        search_term: impl Into<String>,
        search_uri: impl Into<String>,
        kind: SearchFailureKind,
    ) -> Self {
        Self {
            message: message.into(),
            search_term: search_term.into(),
            search_uri: search_uri.into(),
            kind,
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub(crate) fn transport(term: &str, uri: &str, cause: BoxError) -> Self {
        Self::new("request failed", term, uri, SearchFailureKind::Transport).with_cause(cause)
    }

    pub(crate) fn http_status(term: &str, uri: &str, status: u16) -> Self {
        Self::new(
            format!("Google responded with an HTTP status code of {}", status),
            term,
            uri,
            SearchFailureKind::HttpStatus(status),
        )
    }

    pub(crate) fn markup(term: &str, uri: &str, cause: impl Into<BoxError>) -> Self {
        Self::new(
            "Failed parsing response HTML",
            term,
            uri,
            SearchFailureKind::Markup,
        )
        .with_cause(cause)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_uri(&self) -> &str {
        &self.search_uri
    }

    pub fn kind(&self) -> SearchFailureKind {
        self.kind
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

use scraper::Html;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("document is empty")]
    Empty,
    #[error("unrecoverable markup: {0}")]
    Unrecoverable(String),
}

/// Turns decoded response text into a queryable document tree.
pub trait HtmlParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<Html, MarkupError>;
}

/// html5ever-backed parser. Recovers from any malformed markup; only a body
/// with no content at all is rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct TolerantHtmlParser;

impl HtmlParser for TolerantHtmlParser {
    fn parse(&self, text: &str) -> Result<Html, MarkupError> {
        if text.trim().is_empty() {
            return Err(MarkupError::Empty);
        }

        let doc = Html::parse_document(text);
        if !doc.errors.is_empty() {
            tracing::debug!("html parser recovered from {} markup errors", doc.errors.len());
        }
        Ok(doc)
    }
}

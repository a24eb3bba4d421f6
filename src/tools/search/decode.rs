use encoding_rs::Encoding;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::core::config::ENCODING;

static CHARSET_RE: OnceLock<Regex> = OnceLock::new();

fn charset_re() -> &'static Regex {
    CHARSET_RE.get_or_init(|| {
        Regex::new(r"(?i)charset\s*=\s*([^;,]+)").expect("charset regex is valid")
    })
}

/// Pull the `charset=` value out of a (possibly multi-valued, comma-joined)
/// Content-Type header. Surrounding quotes and whitespace are stripped.
pub fn declared_charset(content_type: &str) -> Option<&str> {
    let cap = charset_re().captures(content_type.trim())?;
    let name = cap
        .get(1)?
        .as_str()
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    (!name.is_empty()).then_some(name)
}

/// Normalize a response body to UTF-8 text.
///
/// Best effort: a missing, unknown or already-UTF-8 charset, or bytes that do
/// not decode cleanly in the declared charset, all fall back to reading the
/// body as UTF-8 (invalid sequences become U+FFFD).
pub fn decode_body(body: &[u8], content_type: &str) -> String {
    if let Some(label) = declared_charset(content_type) {
        if let Some(text) = convert(body, label) {
            return text;
        }
    }

    String::from_utf8_lossy(body).into_owned()
}

fn convert(body: &[u8], label: &str) -> Option<String> {
    let Some(encoding) = Encoding::for_label(label.as_bytes()) else {
        warn!("unsupported response charset '{}'; using raw body", label);
        return None;
    };

    if encoding.name().eq_ignore_ascii_case(ENCODING) {
        return None;
    }

    match encoding.decode_without_bom_handling_and_without_replacement(body) {
        Some(text) => {
            debug!("converted {} byte body from {} to {}", body.len(), encoding.name(), ENCODING);
            Some(text.into_owned())
        }
        None => {
            warn!("response body is not valid {}; using raw body", encoding.name());
            None
        }
    }
}

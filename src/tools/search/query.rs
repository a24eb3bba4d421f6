use url::Url;

/// Build the results-page URL for `term`.
///
/// `term` is raw text: it is form-encoded as the `q` parameter (so an
/// already-encoded `%20` goes out as `%2520`), followed by the fixed `lr`
/// language restriction.
pub fn build_search_url(base_url: &Url, term: &str, language_restriction: &str) -> Url {
    let mut url = base_url.clone();
    url.query_pairs_mut()
        .append_pair("q", term)
        .append_pair("lr", language_restriction);
    url
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One organic result, in the shape Google rendered it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchResult {
    url: String,
    title: String,
    description: String,
    /// Publication date lifted from a `"D Mon YYYY - "` snippet prefix.
    #[serde(default)]
    date: Option<NaiveDate>,
}

impl SearchResult {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: description.into(),
            date,
        }
    }

    /// Link target exactly as it appeared in the markup (not resolved against the page URL).
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

/// Everything one successful search produced.
///
/// `results` keeps page order; it is never re-sorted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SearchResultSet {
    search_term: String,
    search_url: String,
    results: Vec<SearchResult>,
}

impl SearchResultSet {
    pub fn new(
        search_term: impl Into<String>,
        search_url: impl Into<String>,
        results: Vec<SearchResult>,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            search_url: search_url.into(),
            results,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.results.iter()
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}

impl IntoIterator for SearchResultSet {
    type Item = SearchResult;
    type IntoIter = std::vec::IntoIter<SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResultSet {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

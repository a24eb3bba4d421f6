use crate::core::config::NO_DESCRIPTION;
use crate::types::SearchResult;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use tracing::debug;

use super::date::parse_description;

struct Selectors {
    container: Selector,
    link: Selector,
    snippet: Selector,
}

static SELECTORS: OnceLock<Selectors> = OnceLock::new();

fn selectors() -> &'static Selectors {
    SELECTORS.get_or_init(|| Selectors {
        // One organic result per class="g" element.
        container: Selector::parse(".g").unwrap(),
        link: Selector::parse("h3 > a").unwrap(),
        snippet: Selector::parse("span.st").unwrap(),
    })
}

/// Every result container in the document, in document order.
pub fn result_containers(doc: &Html) -> Vec<ElementRef<'_>> {
    doc.select(&selectors().container).collect()
}

/// Extract organic results from a parsed results page, in page order.
///
/// Containers without an `h3 > a` headline link contribute nothing.
pub fn extract_results(doc: &Html) -> Vec<SearchResult> {
    let containers = result_containers(doc);
    debug!("found {} result containers", containers.len());

    containers.iter().filter_map(extract_result).collect()
}

/// Build one result from a container, or `None` when it has no usable headline link.
pub fn extract_result(container: &ElementRef<'_>) -> Option<SearchResult> {
    let sel = selectors();

    let Some(link) = container.select(&sel.link).next() else {
        debug!("skipping result container without a headline link");
        return None;
    };

    let url = link.value().attr("href").unwrap_or("");
    let title = link.text().collect::<String>();
    if url.trim().is_empty() || title.trim().is_empty() {
        debug!("skipping result container with empty link href or title");
        return None;
    }

    let (description, date) = match container.select(&sel.snippet).next() {
        Some(snippet) => parse_description(&snippet.text().collect::<String>()),
        None => (NO_DESCRIPTION.to_string(), None),
    };

    Some(SearchResult::new(url, title, description, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn page(body: &str) -> Html {
        Html::parse_document(&format!(
            "<!DOCTYPE html><html><head><title>rust - Google Search</title></head><body><div id=\"search\">{}</div></body></html>",
            body
        ))
    }

    fn result_div(href: &str, title: &str, snippet: Option<&str>) -> String {
        let snippet = snippet
            .map(|s| format!("<div class=\"s\"><span class=\"st\">{}</span></div>", s))
            .unwrap_or_default();
        format!(
            "<div class=\"g\"><div class=\"rc\"><h3 class=\"r\"><a href=\"{}\">{}</a></h3>{}</div></div>",
            href, title, snippet
        )
    }

    #[test]
    fn no_containers_is_empty_not_error() {
        let doc = page("<p>Your search did not match any documents.</p>");
        assert!(result_containers(&doc).is_empty());
        assert!(extract_results(&doc).is_empty());
    }

    #[test]
    fn extracts_in_document_order() {
        let doc = page(&format!(
            "{}{}{}",
            result_div("https://www.rust-lang.org/", "Rust Programming Language", Some("A language empowering everyone.")),
            result_div("https://doc.rust-lang.org/book/", "The Rust Book", Some("15 Jan 2020 - Learn Rust.")),
            result_div("https://crates.io/", "crates.io", None),
        ));

        let results = extract_results(&doc);
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].url(), "https://www.rust-lang.org/");
        assert_eq!(results[0].title(), "Rust Programming Language");
        assert_eq!(results[0].description(), "A language empowering everyone.");
        assert_eq!(results[0].date(), None);

        assert_eq!(results[1].description(), "Learn Rust.");
        assert_eq!(results[1].date(), NaiveDate::from_ymd_opt(2020, 1, 15));

        assert_eq!(results[2].description(), "No description available");
        assert_eq!(results[2].date(), None);
    }

    #[test]
    fn container_without_headline_link_is_skipped() {
        let doc = page(&format!(
            "{}{}{}",
            result_div("https://a.test/", "A", Some("first")),
            "<div class=\"g\"><h3>People also ask</h3><span class=\"st\">orphan</span></div>",
            result_div("https://c.test/", "C", Some("third")),
        ));

        let urls: Vec<String> = extract_results(&doc)
            .iter()
            .map(|r| r.url().to_string())
            .collect();
        assert_eq!(urls, ["https://a.test/", "https://c.test/"]);
    }

    #[test]
    fn link_outside_h3_does_not_count() {
        let doc = page("<div class=\"g\"><a href=\"https://x.test/\">x</a><h3>No link</h3></div>");
        assert!(extract_results(&doc).is_empty());
    }

    #[test]
    fn missing_or_empty_href_is_skipped() {
        let doc = page(
            "<div class=\"g\"><h3><a>no href</a></h3></div>\
             <div class=\"g\"><h3><a href=\"\">empty href</a></h3></div>\
             <div class=\"g\"><h3><a href=\"https://ok.test/\"> </a></h3></div>",
        );
        assert!(extract_results(&doc).is_empty());
    }

    #[test]
    fn href_is_kept_verbatim() {
        let doc = page(&result_div("/url?q=https://a.test/&amp;sa=U", "Relative", None));
        let results = extract_results(&doc);
        assert_eq!(results[0].url(), "/url?q=https://a.test/&sa=U");
    }

    #[test]
    fn class_token_match_not_substring() {
        let doc = page(
            "<div class=\"gx\"><h3><a href=\"https://no.test/\">no</a></h3></div>\
             <div class=\"srg g tF2Cxc\"><h3><a href=\"https://yes.test/\">yes</a></h3></div>",
        );
        let results = extract_results(&doc);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url(), "https://yes.test/");
    }

    #[test]
    fn title_and_snippet_text_include_nested_markup() {
        let doc = page(
            "<div class=\"g\"><h3><a href=\"https://a.test/\"><b>Rust</b> Book</a></h3>\
             <span class=\"st\">Learn <em>Rust</em> today</span></div>",
        );
        let results = extract_results(&doc);
        assert_eq!(results[0].title(), "Rust Book");
        assert_eq!(results[0].description(), "Learn Rust today");
    }

    #[test]
    fn first_link_and_first_snippet_win() {
        let doc = page(
            "<div class=\"g\">\
             <h3><a href=\"https://first.test/\">First</a></h3>\
             <h3><a href=\"https://second.test/\">Second</a></h3>\
             <span class=\"st\">one</span><span class=\"st\">two</span>\
             </div>",
        );
        let results = extract_results(&doc);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url(), "https://first.test/");
        assert_eq!(results[0].description(), "one");
    }
}

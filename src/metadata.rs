//! Page metadata used by the printable document: title and source URL.

use dom_query::{Document, Selection};
use url::Url;

use crate::dom;
use crate::Options;

/// Document title, or `opts.default_title` when the page has none.
#[must_use]
pub fn page_title(doc: &Document, opts: &Options) -> String {
    doc.select("title")
        .nodes()
        .first()
        .map(|node| dom::text_content(&Selection::from(*node)).trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| opts.default_title.clone())
}

/// Source URL of the page.
///
/// Tries `opts.url`, then `<link rel="canonical">`, then
/// `<meta property="og:url">`. Returns an empty string when none is set.
#[must_use]
pub fn source_url(doc: &Document, opts: &Options) -> String {
    let candidate = opts
        .url
        .clone()
        .filter(|url| !url.trim().is_empty())
        .or_else(|| first_attribute(doc, "link[rel='canonical']", "href"))
        .or_else(|| first_attribute(doc, "meta[property='og:url']", "content"));

    candidate.map(|url| normalize_url(&url)).unwrap_or_default()
}

fn first_attribute(doc: &Document, selector: &str, attribute: &str) -> Option<String> {
    doc.select(selector)
        .nodes()
        .first()
        .and_then(|node| dom::get_attribute(&Selection::from(*node), attribute))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Serialize absolute URLs through `Url`; keep anything else as given.
fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(url) => url.to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        let doc = dom::parse("<html><head><title>  My thread </title></head><body></body></html>");
        assert_eq!(page_title(&doc, &Options::default()), "My thread");
    }

    #[test]
    fn test_page_title_default() {
        let doc = dom::parse("<html><head><title>  </title></head><body></body></html>");
        assert_eq!(page_title(&doc, &Options::default()), "X Article");

        let doc = dom::parse("<p>no head</p>");
        let options = Options {
            default_title: "Untitled".to_string(),
            ..Options::default()
        };
        assert_eq!(page_title(&doc, &options), "Untitled");
    }

    #[test]
    fn test_source_url_prefers_option() {
        let doc = dom::parse(
            r#"<html><head><link rel="canonical" href="https://example.com/canonical"></head></html>"#,
        );
        let options = Options {
            url: Some("https://X.com/user/status/1".to_string()),
            ..Options::default()
        };
        assert_eq!(source_url(&doc, &options), "https://x.com/user/status/1");
    }

    #[test]
    fn test_source_url_from_document() {
        let doc = dom::parse(
            r#"<html><head><link rel="canonical" href=" https://example.com/a "></head></html>"#,
        );
        assert_eq!(source_url(&doc, &Options::default()), "https://example.com/a");

        let doc = dom::parse(
            r#"<html><head><meta property="og:url" content="https://example.com/og"></head></html>"#,
        );
        assert_eq!(source_url(&doc, &Options::default()), "https://example.com/og");
    }

    #[test]
    fn test_source_url_unknown() {
        let doc = dom::parse("<p>x</p>");
        assert_eq!(source_url(&doc, &Options::default()), "");
    }

    #[test]
    fn test_relative_url_kept_verbatim() {
        let doc = dom::parse("<p>x</p>");
        let options = Options {
            url: Some("/status/1".to_string()),
            ..Options::default()
        };
        assert_eq!(source_url(&doc, &options), "/status/1");
    }
}

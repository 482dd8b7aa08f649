//! Document shell and error surface tests.

use article_print::{render, render_bytes, render_with_options, Error, Options};

const PAGE: &str = r#"<html><head><title>A &amp; B</title>
<link rel="canonical" href="https://x.com/someone/status/42"></head>
<body><article><div data-testid="tweetText">Body</div></article></body></html>"#;

#[test]
fn document_shell_has_title_source_and_print() {
    match render(PAGE) {
        Ok(doc) => {
            assert_eq!(doc.title, "A & B");
            assert_eq!(doc.source_url, "https://x.com/someone/status/42");
            assert!(doc.html.contains("<title>A &amp; B</title>"));
            assert!(doc.html.contains(r#"<h1 class="doc-title">A &amp; B</h1>"#));
            assert!(doc.html.contains(
                r#"Source: <a href="https://x.com/someone/status/42">https://x.com/someone/status/42</a>"#
            ));
            assert!(doc.html.contains(r#"<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css">"#));
            assert!(doc.html.contains("<style>"));
            assert!(doc.html.contains("window.onload"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn options_override_url_and_print() {
    let options = Options {
        url: Some("https://example.com/saved".to_string()),
        auto_print: false,
        ..Options::default()
    };

    match render_with_options(PAGE, &options) {
        Ok(doc) => {
            assert_eq!(doc.source_url, "https://example.com/saved");
            assert!(!doc.html.contains("window.print"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn no_content_produces_no_document() {
    let result = render("<html><head><title>Empty</title></head><body><div>nothing</div></body></html>");
    match result {
        Err(Error::NoContent) => {}
        other => panic!("expected NoContent, got {other:?}"),
    }
    assert_eq!(
        Error::NoContent.to_string(),
        "No article/tweet content found on this page."
    );
}

#[test]
fn invalid_selector_is_rejected() {
    let options = Options {
        post_selector: "article[".to_string(),
        ..Options::default()
    };
    assert!(matches!(
        render_with_options(PAGE, &options),
        Err(Error::InvalidSelector(_))
    ));
}

#[test]
fn invalid_marker_names_are_rejected() {
    for options in [
        Options {
            block_marker: "data block".to_string(),
            ..Options::default()
        },
        Options {
            math_class: "katex display".to_string(),
            ..Options::default()
        },
    ] {
        assert!(matches!(
            render_with_options(PAGE, &options),
            Err(Error::InvalidSelector(_))
        ));
    }
}

#[test]
fn custom_markers() {
    let html = r#"<section class="post"><p class="body">Custom host</p></section>"#;
    let options = Options {
        post_selector: "section.post".to_string(),
        post_text_selector: "p.body".to_string(),
        default_title: "Saved".to_string(),
        ..Options::default()
    };

    match render_with_options(html, &options) {
        Ok(doc) => {
            assert_eq!(doc.title, "Saved");
            assert!(doc.html.contains(r#"<p class="article-text">Custom host</p>"#));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn bytes_in_legacy_encoding() {
    let html = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xE9</title></head><body><article><div data-testid=\"tweetText\">na\xEFve</div></article></body></html>";

    match render_bytes(html, &Options::default()) {
        Ok(doc) => {
            assert_eq!(doc.title, "Caf\u{e9}");
            assert!(doc.html.contains("na\u{ef}ve"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn document_serializes_without_markup() {
    let doc = match render(PAGE) {
        Ok(doc) => doc,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    let json = serde_json::to_value(&doc).unwrap_or_default();

    assert_eq!(json["title"], "A & B");
    assert_eq!(json["mode"], "thread");
    assert_eq!(json["segments"][0]["type"], "text");
    assert_eq!(json["segments"][0]["text"], "Body");
    assert!(json.get("html").is_none());
}

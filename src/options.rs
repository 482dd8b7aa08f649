//! Configuration options for extraction and rendering.
//!
//! The `Options` struct names every structural marker the extractors look
//! for, so a host that renames its test ids only needs a new `Options` value.

use dom_query::Matcher;

use crate::{Error, Result};

/// KaTeX stylesheet referenced by the printable document.
pub const KATEX_STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.9/dist/katex.min.css";

/// Configuration options for extraction and rendering.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the markers of the X/Twitter web client.
///
/// # Example
///
/// ```rust
/// use article_print::Options;
///
/// let options = Options {
///     url: Some("https://x.com/someone/status/1".to_string()),
///     auto_print: false,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Selector for a top-level post container.
    ///
    /// Default: `article`
    pub post_selector: String,

    /// Selector for the long-form article view inside the first post.
    ///
    /// Default: `[data-testid="twitterArticleReadView"]`
    pub read_view_selector: String,

    /// `data-testid` value of a rich code block container.
    ///
    /// Default: `markdown-code-block`
    pub code_container_test_id: String,

    /// `data-testid` value of an article photo wrapper.
    ///
    /// Default: `tweetPhoto`
    pub image_marker_test_id: String,

    /// Attribute that marks a block-level node when its value is `true`.
    ///
    /// Default: `data-block`
    pub block_marker: String,

    /// Class carried by a pre-rendered math element.
    ///
    /// Default: `katex`
    pub math_class: String,

    /// Selector for the language label inside a code container.
    ///
    /// Default: `span`
    pub code_label_selector: String,

    /// Selector for the code body inside a code container.
    ///
    /// Default: `pre`
    pub code_body_selector: String,

    /// Selector for the text parts of a post in thread mode.
    ///
    /// Default: `div[data-testid="tweetText"]`
    pub post_text_selector: String,

    /// Selector for media images of a post in thread mode.
    ///
    /// Default: `img[src*="pbs.twimg.com/media/"]`
    pub media_selector: String,

    /// Drop text blocks that mirror the code block right after them.
    ///
    /// Only applied to article mode output.
    ///
    /// Default: `true`
    pub deduplicate: bool,

    /// Source URL of the page.
    ///
    /// When `None`, the canonical link or `og:url` of the document is used.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Title used when the document has no `<title>`.
    ///
    /// Default: `X Article`
    pub default_title: String,

    /// External stylesheet linked from the printable document.
    ///
    /// Default: the KaTeX 0.16.9 stylesheet, needed by captured math markup.
    pub stylesheet_href: String,

    /// Emit the script that opens the print dialog once the page has loaded.
    ///
    /// Default: `true`
    pub auto_print: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            post_selector: "article".to_string(),
            read_view_selector: r#"[data-testid="twitterArticleReadView"]"#.to_string(),
            code_container_test_id: "markdown-code-block".to_string(),
            image_marker_test_id: "tweetPhoto".to_string(),
            block_marker: "data-block".to_string(),
            math_class: "katex".to_string(),
            code_label_selector: "span".to_string(),
            code_body_selector: "pre".to_string(),
            post_text_selector: r#"div[data-testid="tweetText"]"#.to_string(),
            media_selector: r#"img[src*="pbs.twimg.com/media/"]"#.to_string(),
            deduplicate: true,
            url: None,
            default_title: "X Article".to_string(),
            stylesheet_href: KATEX_STYLESHEET.to_string(),
            auto_print: true,
        }
    }
}

impl Options {
    /// Check that every selector field compiles.
    ///
    /// `dom_query` treats an unparseable selector as matching nothing, which
    /// would silently turn a typo into `Error::NoContent`.
    ///
    /// The marker-derived selectors are checked too, and `math_class` must be
    /// a single class name.
    pub fn validate(&self) -> Result<()> {
        if self.math_class.chars().any(char::is_whitespace) {
            return Err(Error::InvalidSelector(self.math_selector()));
        }

        for selector in [
            &self.post_selector,
            &self.read_view_selector,
            &self.code_label_selector,
            &self.code_body_selector,
            &self.post_text_selector,
            &self.media_selector,
            &self.block_selector(),
            &self.math_selector(),
        ] {
            if Matcher::new(selector).is_err() {
                return Err(Error::InvalidSelector(selector.clone()));
            }
        }
        Ok(())
    }

    /// Selector matching block-level nodes (`[data-block='true']`).
    #[must_use]
    pub fn block_selector(&self) -> String {
        format!("[{}='true']", self.block_marker)
    }

    /// Selector matching math elements (`.katex`).
    #[must_use]
    pub fn math_selector(&self) -> String {
        format!(".{}", self.math_class)
    }
}

//! # article-print
//!
//! Turns a rendered article or post thread page into a standalone,
//! printable HTML document.
//!
//! The work happens in two stages. Extraction walks the page and produces
//! an ordered list of typed [`Segment`]s (headings, text, code, math,
//! images, separators). Rendering maps that list to a fixed HTML document
//! that opens the print dialog once loaded.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_print::{render_with_options, Options, Segment};
//!
//! let html = r#"<html><head><title>Thread</title></head><body>
//! <article><div data-testid="tweetText">First post</div></article>
//! <article><div data-testid="tweetText">Second post</div></article>
//! </body></html>"#;
//!
//! let options = Options {
//!     url: Some("https://x.com/someone/status/1".to_string()),
//!     ..Options::default()
//! };
//! let doc = render_with_options(html, &options)?;
//! assert_eq!(doc.title, "Thread");
//! assert_eq!(doc.segments[1], Segment::Separator);
//! assert!(doc.html.contains(r#"<p class="article-text">First post</p>"#));
//! # Ok::<(), article_print::Error>(())
//! ```
//!
//! ## Modes
//!
//! - **Article**: the first post holds a long-form read view. Blocks, code
//!   containers, math, and photos are classified node by node, and text
//!   blocks mirroring the next code block are dropped.
//! - **Thread**: every post container becomes a text segment plus its media
//!   images, with separators in between.

mod error;
mod options;
mod result;

/// DOM adapter over `dom_query` (attributes, traversal, rendered text).
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Segment extraction (article mode, thread mode, dedup, pipeline).
pub mod extractor;

/// Title and source URL of a page.
pub mod metadata;

/// HTML escaping and printable document rendering.
pub mod render;

/// Text normalization and blank-line sentinels.
pub mod text;

use tracing::debug;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, KATEX_STYLESHEET};
pub use result::{Extraction, ExtractionMode, MathDisplay, PrintDocument, Segment};

/// Extracts the segment list of a page using default options.
///
/// Returns `Error::NoContent` when neither the article view nor the post
/// containers yield a segment.
///
/// # Example
///
/// ```rust
/// use article_print::{extract_segments, ExtractionMode, Segment};
///
/// let html = r#"<article><div data-testid="twitterArticleReadView">
///   <h1 data-block="true">Title</h1>
///   <div data-block="true">Body</div>
/// </div></article>"#;
///
/// let extraction = extract_segments(html)?;
/// assert_eq!(extraction.mode, ExtractionMode::Article);
/// assert_eq!(extraction.segments, vec![Segment::heading("Title"), Segment::text("Body")]);
/// # Ok::<(), article_print::Error>(())
/// ```
pub fn extract_segments(html: &str) -> Result<Extraction> {
    extract_segments_with_options(html, &Options::default())
}

/// Extracts the segment list of a page with custom options.
pub fn extract_segments_with_options(html: &str, options: &Options) -> Result<Extraction> {
    options.validate()?;
    let doc = dom::parse(html);
    extractor::extract_segments(&doc, options)
}

/// Extracts and renders a page using default options.
///
/// # Example
///
/// ```rust
/// use article_print::{render, Error};
///
/// let result = render("<html><body><p>No posts here</p></body></html>");
/// assert!(matches!(result, Err(Error::NoContent)));
/// ```
pub fn render(html: &str) -> Result<PrintDocument> {
    render_with_options(html, &Options::default())
}

/// Extracts and renders a page with custom options.
///
/// No document is produced when extraction finds nothing.
pub fn render_with_options(html: &str, options: &Options) -> Result<PrintDocument> {
    options.validate()?;
    let doc = dom::parse(html);
    let Extraction { mode, segments } = extractor::extract_segments(&doc, options)?;

    let title = metadata::page_title(&doc, options);
    let source_url = metadata::source_url(&doc, options);
    debug!(?mode, segments = segments.len(), %title, "rendering printable document");

    let html = render::render_document(&title, &source_url, &segments, options);
    Ok(PrintDocument {
        title,
        source_url,
        mode,
        segments,
        html,
    })
}

/// Extracts and renders a page given as raw bytes in any declared encoding.
///
/// # Example
///
/// ```rust
/// use article_print::{render_bytes, Options};
///
/// let html = b"<meta charset=\"windows-1252\"><article><div data-testid=\"tweetText\">Caf\xE9</div></article>";
/// let doc = render_bytes(html, &Options::default())?;
/// assert!(doc.html.contains("Caf\u{e9}"));
/// # Ok::<(), article_print::Error>(())
/// ```
pub fn render_bytes(html: &[u8], options: &Options) -> Result<PrintDocument> {
    let html = encoding::transcode_to_utf8(html);
    render_with_options(&html, options)
}

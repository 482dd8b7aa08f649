//! Result types for extraction and rendering output.
//!
//! This module defines the segment model produced by the extractors and the
//! printable document built from it.

use serde::{Deserialize, Serialize};

/// How a pre-rendered math element sits in the flow of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathDisplay {
    /// Inside a line of text.
    Inline,
    /// On its own line.
    Block,
}

/// One classified unit of extracted content.
///
/// Segments are emitted in document order and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    /// Article heading. `level` is always 1 today.
    Heading { level: u8, text: String },

    /// Plain prose. May still contain literal `\n` escapes, which the
    /// renderer turns into line breaks.
    Text { text: String },

    /// Fenced code block. `language` is a best-effort label and may be empty.
    Code { language: String, text: String },

    /// Pre-rendered math markup, kept verbatim.
    #[serde(rename = "mathHtml")]
    MathMarkup { html: String, display: MathDisplay },

    /// Image with a non-empty source.
    Image { src: String, alt: String },

    /// Divider between two posts of a thread.
    Separator,
}

impl Segment {
    /// Build a `Text` segment.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Build a level 1 `Heading` segment.
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading {
            level: 1,
            text: text.into(),
        }
    }

    /// Build a `Code` segment.
    #[must_use]
    pub fn code(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Code {
            language: language.into(),
            text: text.into(),
        }
    }

    /// Build an `Image` segment.
    #[must_use]
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Which extractor produced a segment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Long-form article view of the first post.
    Article,
    /// Sequence of post containers.
    Thread,
}

/// Output of the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Extractor that produced `segments`.
    pub mode: ExtractionMode,

    /// Final, non-empty segment list.
    pub segments: Vec<Segment>,
}

/// A standalone printable document.
#[derive(Debug, Clone, Serialize)]
pub struct PrintDocument {
    /// Document title shown in `<title>` and the top heading.
    pub title: String,

    /// Page the content was taken from. Empty when unknown.
    pub source_url: String,

    /// Extractor that produced `segments`.
    pub mode: ExtractionMode,

    /// Segments the document body was built from.
    pub segments: Vec<Segment>,

    /// Complete HTML document.
    #[serde(skip)]
    pub html: String,
}

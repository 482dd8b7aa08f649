//! Segment extraction.
//!
//! # Module Structure
//!
//! - `state`: visited-node sets of one article extraction run
//! - `article`: article mode, an ordered rule chain over the read view
//! - `thread`: thread mode, one text segment and media images per post
//! - `dedup`: removal of text blocks mirroring the next code block
//! - `pipeline`: mode selection and dedup
//!
//! # Usage
//!
//! ```rust
//! use article_print::{dom, extractor, Options};
//!
//! let doc = dom::parse(r#"<article><div data-testid="tweetText">hi</div></article>"#);
//! let options = Options::default();
//!
//! // Whole pipeline
//! let extraction = extractor::extract_segments(&doc, &options)?;
//!
//! // Or individual stages
//! let post = doc.select("article");
//! assert!(extractor::extract_article_segments(&post, &options).is_none());
//! let thread = extractor::extract_thread_segments(&doc, &options);
//! assert_eq!(extraction.segments, extractor::dedup_segments(&thread));
//! # Ok::<(), article_print::Error>(())
//! ```

pub mod article;
pub mod dedup;
pub mod pipeline;
pub mod state;
pub mod thread;

pub use article::extract_article_segments;
pub use dedup::dedup_segments;
pub use pipeline::extract_segments;
pub use state::ExtractionState;
pub use thread::extract_thread_segments;

//! Extraction pipeline.
//!
//! Picks article or thread mode for a parsed page and applies the dedup
//! pass to article output.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::result::{Extraction, ExtractionMode};
use crate::{Error, Options, Result};

use super::article::extract_article_segments;
use super::dedup::dedup_segments;
use super::thread::extract_thread_segments;

/// Extract the segment list of a page.
///
/// 1. Find the first post container; without one there is no content.
/// 2. Run article mode on it. A non-empty result is deduplicated and returned.
/// 3. Otherwise run thread mode over all post containers, without dedup.
///
/// # Errors
///
/// Returns `Error::NoContent` when both modes come up empty.
pub fn extract_segments(doc: &Document, opts: &Options) -> Result<Extraction> {
    let posts = doc.select(&opts.post_selector);
    let Some(first_post) = posts.nodes().first().map(|node| Selection::from(*node)) else {
        debug!(selector = %opts.post_selector, "no post container found");
        return Err(Error::NoContent);
    };

    if let Some(segments) = extract_article_segments(&first_post, opts) {
        debug!(count = segments.len(), "article mode extracted segments");
        if !segments.is_empty() {
            let segments = if opts.deduplicate {
                dedup_segments(&segments)
            } else {
                segments
            };
            return Ok(Extraction {
                mode: ExtractionMode::Article,
                segments,
            });
        }
    }

    let segments = extract_thread_segments(doc, opts);
    debug!(count = segments.len(), "thread mode extracted segments");
    if segments.is_empty() {
        return Err(Error::NoContent);
    }

    Ok(Extraction {
        mode: ExtractionMode::Thread,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;
    use crate::result::Segment;

    fn run(html: &str) -> Result<Extraction> {
        let doc = dom::parse(html);
        extract_segments(&doc, &Options::default())
    }

    #[test]
    fn test_no_post_container() {
        assert!(matches!(
            run("<html><body><p>just a page</p></body></html>"),
            Err(Error::NoContent)
        ));
    }

    #[test]
    fn test_article_mode_with_dedup() {
        let html = r#"<article><div data-testid="twitterArticleReadView">
            <div data-block="true">Hello</div>
            <div data-block="true"><div>python</div><div>print(1)</div></div>
            <div data-testid="markdown-code-block"><span>python</span><pre>print(1)</pre></div>
        </div></article>"#;

        match run(html) {
            Ok(extraction) => {
                assert_eq!(extraction.mode, ExtractionMode::Article);
                assert_eq!(
                    extraction.segments,
                    vec![Segment::text("Hello"), Segment::code("python", "print(1)")]
                );
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn test_dedup_can_be_disabled() {
        let html = r#"<article><div data-testid="twitterArticleReadView">
            <div data-block="true">print(1)</div>
            <div data-testid="markdown-code-block"><pre>print(1)</pre></div>
        </div></article>"#;
        let doc = dom::parse(html);
        let options = Options {
            deduplicate: false,
            ..Options::default()
        };

        match extract_segments(&doc, &options) {
            Ok(extraction) => assert_eq!(extraction.segments.len(), 2),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn test_empty_article_view_falls_back_to_thread() {
        let html = r#"<article><div data-testid="twitterArticleReadView"></div>
            <div data-testid="tweetText">print(1)</div></article>
            <article><div data-testid="tweetText">reply</div></article>"#;

        match run(html) {
            Ok(extraction) => {
                assert_eq!(extraction.mode, ExtractionMode::Thread);
                assert_eq!(
                    extraction.segments,
                    vec![
                        Segment::text("print(1)"),
                        Segment::Separator,
                        Segment::text("reply"),
                    ]
                );
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn test_post_without_article_view_uses_thread_mode() {
        let html = r#"<article><div data-testid="tweetText">print(1)</div></article>"#;
        match run(html) {
            Ok(extraction) => {
                assert_eq!(extraction.mode, ExtractionMode::Thread);
                assert_eq!(extraction.segments, vec![Segment::text("print(1)")]);
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn test_empty_posts_are_no_content() {
        assert!(matches!(
            run("<article>   \\n   </article>"),
            Err(Error::NoContent)
        ));
    }
}

//! Thread mode extraction.
//!
//! Used when the first post has no article view, or the view produced
//! nothing. Every post container becomes one text segment followed by its
//! media images, with separators between posts.

use dom_query::{Document, Selection};

use crate::dom;
use crate::result::Segment;
use crate::text::meaningful;
use crate::Options;

/// Extract segments from every post container in `doc`, in document order.
#[must_use]
pub fn extract_thread_segments(doc: &Document, opts: &Options) -> Vec<Segment> {
    let posts: Vec<Selection> = doc
        .select(&opts.post_selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect();

    let mut segments = Vec::new();
    for (idx, post) in posts.iter().enumerate() {
        let text = post_text(post, opts);
        if let Some(text) = meaningful(&text) {
            segments.push(Segment::text(text));
        }

        for img in dom::query_selector_all(post, &opts.media_selector) {
            let src = dom::get_attribute(&img, "src").unwrap_or_default();
            if src.is_empty() {
                continue;
            }
            let alt = dom::get_attribute(&img, "alt").unwrap_or_default();
            segments.push(Segment::image(src, alt));
        }

        if idx + 1 < posts.len() {
            segments.push(Segment::Separator);
        }
    }
    segments
}

/// Text of a post: its text parts separated by blank lines, or the whole
/// post when it has no text parts.
fn post_text(post: &Selection, opts: &Options) -> String {
    let parts: Vec<String> = dom::query_selector_all(post, &opts.post_text_selector)
        .iter()
        .map(|part| dom::rendered_text(part).trim().to_string())
        .collect();

    if parts.is_empty() {
        return dom::rendered_text(post).trim().to_string();
    }

    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

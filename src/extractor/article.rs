//! Article mode extraction.
//!
//! Walks the read view of a long-form article once, in document order, and
//! turns code containers, block-level nodes, and photo wrappers into
//! segments. Classification is an ordered rule chain; the first rule whose
//! predicate matches a node handles it.

use dom_query::Selection;
use tracing::trace;

use super::state::ExtractionState;
use crate::dom;
use crate::result::{MathDisplay, Segment};
use crate::text::meaningful;
use crate::Options;

/// Predicate deciding whether a rule applies to a node.
type Matches = fn(&Selection, &Options) -> bool;

/// Handler turning a matched node into zero or more segments.
type Handle = fn(&Selection, &mut ExtractionState, &Options, &mut Vec<Segment>);

/// One entry of the classification chain.
struct Rule {
    name: &'static str,
    matches: Matches,
    handle: Handle,
}

/// Classification rules, highest priority first.
const RULES: [Rule; 3] = [
    Rule {
        name: "code-container",
        matches: is_code_container,
        handle: handle_code_container,
    },
    Rule {
        name: "block",
        matches: is_block,
        handle: handle_block,
    },
    Rule {
        name: "image-marker",
        matches: is_image_marker,
        handle: handle_image_marker,
    },
];

/// Extract segments from the article read view inside `post`.
///
/// Returns `None` when `post` has no read view, which tells the caller to
/// fall back to thread mode. A read view that yields nothing returns an
/// empty list.
#[must_use]
pub fn extract_article_segments(post: &Selection, opts: &Options) -> Option<Vec<Segment>> {
    let read_view = dom::query_selector(post, &opts.read_view_selector)?;

    let mut state = ExtractionState::new();
    let mut segments = Vec::new();

    for node in dom::element_descendants(&read_view) {
        let element = Selection::from(node);
        if let Some(rule) = RULES.iter().find(|rule| (rule.matches)(&element, opts)) {
            trace!(rule = rule.name, "classified node");
            (rule.handle)(&element, &mut state, opts, &mut segments);
        }
    }

    Some(segments)
}

fn test_id_is(element: &Selection, test_id: &str) -> bool {
    element.attr("data-testid").is_some_and(|id| &*id == test_id)
}

fn is_code_container(element: &Selection, opts: &Options) -> bool {
    test_id_is(element, &opts.code_container_test_id)
}

fn is_block(element: &Selection, opts: &Options) -> bool {
    element
        .attr(&opts.block_marker)
        .is_some_and(|value| &*value == "true")
}

fn is_image_marker(element: &Selection, opts: &Options) -> bool {
    test_id_is(element, &opts.image_marker_test_id)
}

/// Emit one `Code` segment for a code container and silence every block
/// node that renders part of it.
fn handle_code_container(
    element: &Selection,
    state: &mut ExtractionState,
    opts: &Options,
    segments: &mut Vec<Segment>,
) {
    let Some(id) = dom::node_id(element) else {
        return;
    };
    if !state.claim_code_container(id) {
        return;
    }

    let block_selector = opts.block_selector();
    if let Some(owner) = dom::closest(element, &block_selector).as_ref().and_then(dom::node_id) {
        state.claim_block(owner);
    }
    for inner in dom::query_selector_all(element, &block_selector) {
        if let Some(inner_id) = dom::node_id(&inner) {
            state.claim_block(inner_id);
        }
    }

    let language = dom::query_selector(element, &opts.code_label_selector)
        .map(|label| dom::rendered_text(&label).trim().to_string())
        .unwrap_or_default();
    let body = dom::query_selector(element, &opts.code_body_selector)
        .map(|pre| dom::rendered_text(&pre).trim().to_string())
        .unwrap_or_default();

    if !body.is_empty() {
        segments.push(Segment::Code {
            language,
            text: body,
        });
    }
}

/// Emit the segments of a block-level node: a heading, a text block with
/// math, or a plain text block.
fn handle_block(
    element: &Selection,
    state: &mut ExtractionState,
    opts: &Options,
    segments: &mut Vec<Segment>,
) {
    let Some(id) = dom::node_id(element) else {
        return;
    };
    if !state.claim_block(id) {
        return;
    }

    let math_selector = opts.math_selector();

    if dom::tag_name(element).as_deref() == Some("h1") {
        let text = text_without_math(element, opts);
        if let Some(text) = meaningful(&text) {
            segments.push(Segment::heading(text));
        }
        for math in dom::query_selector_all(element, &math_selector) {
            segments.push(Segment::MathMarkup {
                html: dom::outer_html(&math).to_string(),
                display: MathDisplay::Inline,
            });
        }
        return;
    }

    if dom::query_selector(element, &math_selector).is_some() {
        let text = text_without_math(element, opts);
        if let Some(text) = meaningful(&text) {
            segments.push(Segment::text(text));
        }
        for math in dom::query_selector_all(element, &math_selector) {
            segments.push(Segment::MathMarkup {
                html: dom::outer_html(&math).to_string(),
                display: math_display(&math),
            });
        }
        return;
    }

    let text = dom::rendered_text(element);
    if let Some(text) = meaningful(&text) {
        segments.push(Segment::text(text));
    }
}

/// Emit an `Image` segment for the first image inside a photo wrapper.
fn handle_image_marker(
    element: &Selection,
    _state: &mut ExtractionState,
    _opts: &Options,
    segments: &mut Vec<Segment>,
) {
    let Some(img) = dom::query_selector(element, "img") else {
        return;
    };
    let src = dom::get_attribute(&img, "src").unwrap_or_default();
    if src.trim().is_empty() {
        return;
    }
    let alt = dom::get_attribute(&img, "alt").unwrap_or_default();
    segments.push(Segment::image(src.trim(), alt));
}

fn text_without_math(element: &Selection, opts: &Options) -> String {
    dom::rendered_text_excluding(element, |sel| dom::has_class(sel, &opts.math_class))
}

fn math_display(math: &Selection) -> MathDisplay {
    let block = dom::query_selector(math, "math")
        .and_then(|node| dom::get_attribute(&node, "display"))
        .is_some_and(|display| display == "block");
    if block {
        MathDisplay::Block
    } else {
        MathDisplay::Inline
    }
}

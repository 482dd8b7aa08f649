//! DOM Operations Adapter
//!
//! Wraps the `dom_query` crate behind the small capability surface the
//! extractors need: attribute and class lookup, ordered element traversal,
//! ancestor search, outer markup, and a rendered-text accessor that follows
//! the line-breaking rules of a browser's `innerText`.

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Elements that start and end a line in rendered text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary",
    "table", "tr", "ul",
];

/// Elements whose contents are never rendered.
const HIDDEN_TAGS: &[&str] = &["head", "noscript", "script", "style", "template", "title"];

// === Attribute Operations ===

/// Get any attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check whether the first node carries `class` in its class list.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Node id of the first node in the selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

// === Text Content ===

/// Get all text content of node and descendants, without layout.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Text of the selection as a browser would lay it out.
///
/// Whitespace runs collapse to one space except inside `<pre>`, `<br>`
/// becomes a line break, and block elements sit on their own lines.
#[must_use]
pub fn rendered_text(sel: &Selection) -> String {
    rendered_text_excluding(sel, |_| false)
}

/// Rendered text that skips every element for which `exclude` returns true,
/// together with its subtree.
///
/// The walk keeps its own stack, so nesting depth is bounded by memory
/// rather than by the call stack.
#[must_use]
pub fn rendered_text_excluding<F>(sel: &Selection, exclude: F) -> String
where
    F: Fn(&Selection) -> bool,
{
    let mut renderer = TextRenderer::default();
    let Some(root) = sel.nodes().first().copied() else {
        return renderer.out;
    };

    let preformatted = closest(sel, "pre").is_some();
    let mut stack = Vec::new();
    push_children(&mut stack, root, preformatted);

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter { node, preformatted } => {
                if node.is_text() {
                    renderer.push_text(&node.text(), preformatted);
                } else if node.is_element() {
                    let element = Selection::from(node);
                    if exclude(&element) {
                        continue;
                    }
                    let tag = tag_name(&element).unwrap_or_default();
                    if HIDDEN_TAGS.contains(&tag.as_str()) {
                        continue;
                    }
                    if tag == "br" {
                        renderer.line_break();
                        continue;
                    }

                    let is_block = BLOCK_TAGS.contains(&tag.as_str());
                    if is_block {
                        renderer.block_boundary();
                    }
                    stack.push(Frame::Exit { is_block });
                    push_children(&mut stack, node, preformatted || tag == "pre");
                }
            }
            Frame::Exit { is_block } => {
                if is_block {
                    renderer.block_boundary();
                }
            }
        }
    }
    renderer.out
}

/// Step of the rendered-text walk.
enum Frame<'a> {
    /// Render a node and schedule its children.
    Enter { node: NodeRef<'a>, preformatted: bool },
    /// Close an element once all its children were rendered.
    Exit { is_block: bool },
}

/// Push the children of `node` so that the first child is popped first.
fn push_children<'a>(stack: &mut Vec<Frame<'a>>, node: NodeRef<'a>, preformatted: bool) {
    let start = stack.len();
    let mut child = node.first_child();
    while let Some(current) = child {
        stack.push(Frame::Enter {
            node: current,
            preformatted,
        });
        child = current.next_sibling();
    }
    stack[start..].reverse();
}

#[derive(Default)]
struct TextRenderer {
    out: String,
    pending_space: bool,
    pending_break: bool,
}

impl TextRenderer {
    fn push_text(&mut self, text: &str, preformatted: bool) {
        if preformatted {
            if !text.is_empty() {
                self.flush_pending();
                self.out.push_str(text);
            }
            return;
        }

        for c in text.chars() {
            if c.is_ascii_whitespace() {
                self.pending_space = true;
                continue;
            }
            self.flush_pending();
            self.out.push(c);
        }
    }

    fn flush_pending(&mut self) {
        if self.pending_break {
            if !self.out.is_empty() && !self.out.ends_with('\n') {
                self.out.push('\n');
            }
            self.pending_break = false;
            self.pending_space = false;
        }
        if self.pending_space {
            if !self.out.is_empty() && !self.out.ends_with('\n') {
                self.out.push(' ');
            }
            self.pending_space = false;
        }
    }

    fn block_boundary(&mut self) {
        self.pending_break = true;
        self.pending_space = false;
    }

    fn line_break(&mut self) {
        if self.pending_break && !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
        self.out.push('\n');
        self.pending_break = false;
        self.pending_space = false;
    }
}

// === Tree Navigation ===

/// All element descendants of the first node, in depth-first document order.
///
/// The node itself is not included.
#[must_use]
pub fn element_descendants<'a>(sel: &Selection<'a>) -> Vec<NodeRef<'a>> {
    let mut elements = Vec::new();
    let Some(root) = sel.nodes().first().copied() else {
        return elements;
    };

    let mut stack = child_elements(root);
    stack.reverse();
    while let Some(node) = stack.pop() {
        elements.push(node);
        let mut children = child_elements(node);
        children.reverse();
        stack.extend(children);
    }
    elements
}

fn child_elements(node: NodeRef) -> Vec<NodeRef> {
    let mut children = Vec::new();
    let mut child = node.first_child();
    while let Some(current) = child {
        if current.is_element() {
            children.push(current);
        }
        child = current.next_sibling();
    }
    children
}

/// Nearest ancestor-or-self matching `selector`.
#[must_use]
pub fn closest<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let mut current = sel.nodes().first().copied();
    while let Some(node) = current {
        if node.is_element() {
            let candidate = Selection::from(node);
            if candidate.is(selector) {
                return Some(candidate);
            }
        }
        current = node.parent();
    }
    None
}

// === Querying ===

/// Query the first descendant matching a CSS selector.
///
/// Returns `None` instead of an empty selection.
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = sel.select_single(selector);
    if found.exists() {
        Some(found)
    } else {
        None
    }
}

/// Query all descendants matching a CSS selector, one selection per node,
/// in document order.
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

//! Extraction state tracking.
//!
//! `ExtractionState` holds the visited-node sets of one article extraction
//! run. It is created by the extractor, passed by reference through the
//! traversal, and dropped when the run ends.

use std::collections::HashSet;
use dom_query::NodeId;

/// Tracks which nodes already produced a segment.
///
/// # Purpose
///
/// - **Seen blocks**: block-level nodes that were turned into a segment, or
///   that belong to a code container and must stay silent
/// - **Seen code containers**: code containers that were turned into a
///   `Code` segment
#[derive(Debug, Default)]
pub struct ExtractionState {
    seen_blocks: HashSet<NodeId>,
    seen_code_containers: HashSet<NodeId>,
}

impl ExtractionState {
    /// Create an empty state for a new extraction run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a block-level node as consumed.
    ///
    /// Returns `false` if it was already consumed.
    pub fn claim_block(&mut self, node_id: NodeId) -> bool {
        self.seen_blocks.insert(node_id)
    }

    /// Mark a code container as consumed.
    ///
    /// Returns `false` if it was already consumed.
    pub fn claim_code_container(&mut self, node_id: NodeId) -> bool {
        self.seen_code_containers.insert(node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_query::Document;

    #[test]
    fn test_block_tracking() {
        let mut state = ExtractionState::new();

        let doc = Document::from("<div><p>one</p><p>two</p><p>three</p></div>");
        let nodes: Vec<_> = doc.select("p").nodes().iter().map(|n| n.id).collect();

        assert!(state.claim_block(nodes[0]));
        assert!(state.claim_block(nodes[2]));
        assert!(!state.claim_block(nodes[0]));
        assert!(!state.claim_block(nodes[2]));
        assert!(state.claim_block(nodes[1]));
    }

    #[test]
    fn test_code_containers_tracked_separately() {
        let mut state = ExtractionState::new();

        let doc = Document::from("<div><pre>x</pre></div>");
        let ids: Vec<_> = doc.select("div").nodes().iter().map(|n| n.id).collect();
        let id = ids[0];

        assert!(state.claim_code_container(id));
        assert!(!state.claim_code_container(id));
        assert!(state.claim_block(id));
    }
}

//! Internal storage entries for [`BlockGraph`](super::BlockGraph).

use crate::block::Block;
use crate::ids::EdgeId;

#[derive(Debug, Clone)]
pub(in crate::graph) struct VertexEntry {
    pub(in crate::graph) block: Block,
    pub(in crate::graph) edges: Vec<EdgeId>,
}

impl VertexEntry {
    pub(in crate::graph) fn new(block: Block) -> Self {
        Self {
            block,
            edges: Vec::new(),
        }
    }
}

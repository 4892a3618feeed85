//! Dropping a block onto a placeholder.

use super::{BlockGraph, GraphEvent};
use crate::compat::{DimensionMatch, matching};
use crate::edge::{Edge, EdgeKind};
use crate::ids::{BlockId, EdgeId};

impl BlockGraph {
    /// Moves `node` into the slot held by the placeholder vertex `target`.
    ///
    /// `node` is detached from its current neighbours (which are reconnected), transposed when
    /// the dimensions only line up crosswise, and then takes over every edge of `target` in the
    /// same orientation. Rigid edges and bands carry over; split links do not. `target` is
    /// removed without reconnecting anything around it.
    ///
    /// Returns `false` without touching the graph when either vertex is missing, when
    /// `node == target`, when `target` is not a placeholder, or when the two blocks are not
    /// dimension-compatible.
    pub fn move_block(&mut self, node: BlockId, target: BlockId) -> bool {
        if node == target {
            return false;
        }
        let (Some(a), Some(b)) = (self.block(node), self.block(target)) else {
            return false;
        };
        if !b.is_placeholder() {
            tracing::warn!(%node, %target, "move rejected: target is not a placeholder");
            return false;
        }
        let transpose = match matching(a, b) {
            DimensionMatch::Direct => false,
            DimensionMatch::Transposed => true,
            DimensionMatch::Incompatible => {
                tracing::warn!(%node, %target, "move rejected: incompatible dimensions");
                return false;
            }
        };
        let location = b.bounds();

        // Detach `node` first so a target spliced next to it sees the reconnected chain.
        let Some(reconnect) = self.detach(node) else {
            return false;
        };
        for (from, to, kind, direction) in reconnect {
            self.reconnect(from, to, kind, direction);
        }
        if transpose {
            self.transpose(node);
        }

        let inherited: Vec<Edge> = self.edges_of(target).cloned().collect();
        if self.detach(target).is_none() {
            return false;
        }
        self.vertices.shift_remove(&target);
        self.invalidate();

        let mut edges: Vec<EdgeId> = Vec::with_capacity(inherited.len());
        for e in inherited {
            let Some(other) = e.opposite(target) else {
                continue;
            };
            if other == node || !self.contains(other) {
                continue;
            }
            let kind = match &e.kind {
                EdgeKind::Magnetic => EdgeKind::Magnetic,
                EdgeKind::Beam => EdgeKind::Beam,
                EdgeKind::Band(link) => EdgeKind::band(link.dimension),
                EdgeKind::ParentChild(_) | EdgeKind::Sibling(_) => continue,
            };
            let id = if e.source == target {
                self.insert_edge(node, other, kind, e.direction)
            } else {
                self.insert_edge(other, node, kind, e.direction)
            };
            edges.push(id);
        }

        if let Some(block) = self.block_mut(node) {
            block.set_bounds(location);
        }
        tracing::debug!(%node, %target, transpose, edges = edges.len(), "move block");
        self.events.push(GraphEvent::VertexAdded {
            vertex: node,
            edges,
        });
        true
    }
}

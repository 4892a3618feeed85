//! Structural change notifications.
//!
//! The graph queues one event per structural step; the owner drains them after each user
//! action and sees them in the exact order the mutations happened.

use crate::edge::Edge;
use crate::ids::{BlockId, EdgeId};

#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    VertexAdded { vertex: BlockId, edges: Vec<EdgeId> },
    /// Carries the edges that were incident when the vertex was detached.
    VertexRemoved { vertex: BlockId, edges: Vec<Edge> },
    EdgeAdded { edge: EdgeId },
    EdgeRemoved { edge: Edge },
}

impl GraphEvent {
    pub fn vertex(&self) -> Option<BlockId> {
        match self {
            GraphEvent::VertexAdded { vertex, .. } | GraphEvent::VertexRemoved { vertex, .. } => {
                Some(*vertex)
            }
            GraphEvent::EdgeAdded { .. } | GraphEvent::EdgeRemoved { .. } => None,
        }
    }
}

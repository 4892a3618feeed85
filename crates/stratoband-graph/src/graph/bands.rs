//! Automatic band creation for newly added blocks.

use super::BlockGraph;
use crate::block::Dimension;
use crate::compat::can_merge;
use crate::direction::EdgeDirection;
use crate::edge::EdgeKind;
use crate::ids::{BlockId, EdgeId};

impl BlockGraph {
    /// Bands `block` with every other block it can share data with.
    ///
    /// A partner must not be a placeholder, must lie outside `block`'s rigid connected set, must
    /// not already have a direct edge to it, and must have a compatible dimension whose ids
    /// overlap. D1 is tried before D2. The band points the way the partner lies when both
    /// blocks are placed, otherwise towards the dimension's after side.
    pub fn create_band_edges(&mut self, block: BlockId) -> Vec<EdgeId> {
        let Some(this) = self.block(block) else {
            return Vec::new();
        };
        if this.is_placeholder() {
            return Vec::new();
        }
        let rigid = self.connected_set_of(block);

        let mut planned: Vec<(BlockId, Dimension, EdgeDirection)> = Vec::new();
        for (other, b) in self.blocks() {
            if other == block
                || b.is_placeholder()
                || rigid.contains(&other)
                || self.edge_between(block, other).is_some()
            {
                continue;
            }
            let shared = Dimension::ALL.into_iter().find(|&dim| {
                can_merge(this.id_type(dim), b.id_type(dim))
                    && !this.ids(dim).is_disjoint(b.ids(dim))
            });
            let Some(dim) = shared else {
                continue;
            };
            let (r, s) = (this.bounds(), b.bounds());
            let direction = if r.is_placed() && s.is_placed() {
                let axis = dim.axis();
                if s.center().along(axis) < r.center().along(axis) {
                    dim.before()
                } else {
                    dim.after()
                }
            } else {
                dim.after()
            };
            planned.push((other, dim, direction));
        }

        let created: Vec<EdgeId> = planned
            .into_iter()
            .map(|(other, dim, direction)| {
                self.insert_edge(block, other, EdgeKind::band(dim), direction)
            })
            .collect();
        if !created.is_empty() {
            tracing::debug!(%block, bands = created.len(), "created band edges");
        }
        created
    }
}

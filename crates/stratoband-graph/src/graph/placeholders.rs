//! Attachment slots offered while a block is dragged.

use rustc_hash::FxBuildHasher;

use super::{BlockGraph, PlaceholderOptions};
use crate::block::{Block, Dimension};
use crate::compat::can_merge;
use crate::direction::EdgeDirection;
use crate::edge::EdgeKind;
use crate::ids::BlockId;

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

/// A slot next to `anchor`, in `direction` of it. `transpose` is set when the dragged block
/// only fits after swapping its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder {
    pub anchor: BlockId,
    pub direction: EdgeDirection,
    pub transpose: bool,
}

impl BlockGraph {
    /// Slots where the in-graph block `node` could be dropped. Slots on `node` itself or
    /// splicing next to it are never offered.
    pub fn find_placeholders(&self, node: BlockId, options: PlaceholderOptions) -> Vec<Placeholder> {
        let Some(block) = self.block(node) else {
            return Vec::new();
        };
        self.collect_placeholders(block, Some(node), options)
    }

    /// Slots for a block that is not part of the graph yet.
    pub fn find_placeholders_for(
        &self,
        template: &Block,
        options: PlaceholderOptions,
    ) -> Vec<Placeholder> {
        self.collect_placeholders(template, None, options)
    }

    fn collect_placeholders(
        &self,
        node: &Block,
        exclude: Option<BlockId>,
        options: PlaceholderOptions,
    ) -> Vec<Placeholder> {
        let mut found: IndexMap<(BlockId, EdgeDirection), Placeholder> = IndexMap::default();

        for dim in Dimension::ALL {
            for (&vid, entry) in &self.vertices {
                let v = &entry.block;
                if Some(vid) == exclude || v.is_placeholder() {
                    continue;
                }
                let direct = can_merge(node.id_type(dim), v.id_type(dim));
                let transposed =
                    options.include_transpose && can_merge(node.id_type(dim.other()), v.id_type(dim));
                if !direct && !transposed {
                    continue;
                }

                for direction in [dim.before(), dim.after()] {
                    if found.contains_key(&(vid, direction)) {
                        continue;
                    }
                    if !self.slot_offered(vid, direction, exclude, options) {
                        continue;
                    }
                    found.insert(
                        (vid, direction),
                        Placeholder {
                            anchor: vid,
                            direction,
                            transpose: !direct,
                        },
                    );
                }
            }
        }

        tracing::trace!(count = found.len(), "placeholders found");
        found.into_values().collect()
    }

    fn slot_offered(
        &self,
        anchor: BlockId,
        direction: EdgeDirection,
        exclude: Option<BlockId>,
        options: PlaceholderOptions,
    ) -> bool {
        let Some(edge) = self.edge_in_direction(anchor, direction) else {
            return true;
        };
        let Some(far) = edge.opposite(anchor) else {
            return false;
        };
        if Some(far) == exclude {
            return false;
        }
        match edge.kind {
            EdgeKind::Band(_) => options.include_between_bands,
            EdgeKind::Magnetic => {
                options.include_between_magnetic
                    && direction.is_before()
                    && self.block(far).is_some_and(|b| !b.is_placeholder())
            }
            EdgeKind::Beam | EdgeKind::ParentChild(_) | EdgeKind::Sibling(_) => false,
        }
    }

    /// Materialises each placeholder as a transient copy of `template`, wired magnetically to
    /// its anchor. A slot that already held an edge is spliced: that edge is re-created between
    /// the new placeholder block and the far endpoint, keeping bands as bands.
    pub fn insert_placeholders(
        &mut self,
        placeholders: &[Placeholder],
        template: &Block,
    ) -> Vec<BlockId> {
        let mut out: Vec<BlockId> = Vec::with_capacity(placeholders.len());
        for p in placeholders {
            if !self.contains(p.anchor) {
                continue;
            }
            let existing = self
                .edge_in_direction(p.anchor, p.direction)
                .filter(|e| e.kind.is_rigid() || e.kind.is_band())
                .map(|e| (e.id, e.opposite(p.anchor), e.kind.is_band()));

            let pid = self.add_vertex(Block::placeholder_of(template, p.transpose));
            if let Some((edge, Some(far), was_band)) = existing {
                self.disconnect(edge);
                let kind = if was_band {
                    EdgeKind::band(p.direction.dimension())
                } else {
                    EdgeKind::Magnetic
                };
                self.insert_edge(pid, far, kind, p.direction);
            }
            self.insert_edge(p.anchor, pid, EdgeKind::Magnetic, p.direction);
            out.push(pid);
        }
        tracing::debug!(count = out.len(), "inserted placeholders");
        out
    }

    /// Removes placeholder blocks (ordinary blocks in `ids` are left alone), reconnecting the
    /// edges they split.
    pub fn remove_placeholders(&mut self, ids: &[BlockId]) {
        for &id in ids {
            if self.block(id).is_some_and(Block::is_placeholder) {
                self.remove(id);
            }
        }
    }
}

//! The block multigraph.
//!
//! Vertices and edges live in insertion-ordered maps keyed by ids that are never reused.
//! Each vertex keeps the list of its incident edge ids, so neighbourhood queries do not scan
//! the whole edge table. Algorithms built on top (connectivity, placeholders, moves, walks,
//! sorting, splitting, auto-banding) live in the submodules.

use rustc_hash::FxBuildHasher;
use std::cell::RefCell;

use crate::block::{Block, Dimension};
use crate::compat::can_merge;
use crate::direction::EdgeDirection;
use crate::edge::{Edge, EdgeKind};
use crate::error::{Error, Result};
use crate::ids::{BlockId, EdgeId, IdSet};

mod bands;
mod connectivity;
mod entries;
mod events;
mod moves;
mod options;
mod placeholders;
mod sort;
mod split;
mod walk;

pub use events::GraphEvent;
pub use options::PlaceholderOptions;
pub use placeholders::Placeholder;

use connectivity::ConnectivityCache;
use entries::VertexEntry;

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

#[derive(Debug, Default)]
pub struct BlockGraph {
    vertices: IndexMap<BlockId, VertexEntry>,
    edges: IndexMap<EdgeId, Edge>,
    next_block: u32,
    next_edge: u32,

    events: Vec<GraphEvent>,

    // Connected sets over rigid edges are queried far more often than the graph changes
    // (every drag frame asks for them), so they are rebuilt lazily per generation.
    generation: u64,
    connectivity: RefCell<Option<ConnectivityCache>>,
}

impl BlockGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        *self.connectivity.get_mut() = None;
    }

    // ---- lookups -------------------------------------------------------------------------

    pub fn contains(&self, id: BlockId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.vertices.get(&id).map(|v| &v.block)
    }

    /// Mutable access for host-side state (bounds, UI flags, label). Changes to ids go
    /// through [`BlockGraph::set_ids`] so that band caches stay current.
    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.vertices.get_mut(&id).map(|v| &mut v.block)
    }

    pub fn block_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &Block)> {
        self.vertices.iter().map(|(id, v)| (*id, &v.block))
    }

    pub fn block_ids(&self) -> Vec<BlockId> {
        self.vertices.keys().copied().collect()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.keys().copied().collect()
    }

    /// Incident edge ids of `block` (empty when absent).
    pub fn edge_ids_of(&self, block: BlockId) -> &[EdgeId] {
        self.vertices
            .get(&block)
            .map(|v| v.edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn edges_of(&self, block: BlockId) -> impl Iterator<Item = &Edge> {
        self.edge_ids_of(block)
            .iter()
            .filter_map(|id| self.edges.get(id))
    }

    pub fn edges_in_direction(
        &self,
        block: BlockId,
        direction: EdgeDirection,
    ) -> impl Iterator<Item = &Edge> {
        self.edges_of(block)
            .filter(move |e| e.direction_from(block) == Some(direction))
    }

    /// The edge occupying `block`'s slot in `direction`: rigid edges first, then bands, then
    /// split links.
    pub fn edge_in_direction(&self, block: BlockId, direction: EdgeDirection) -> Option<&Edge> {
        let mut best: Option<&Edge> = None;
        let rank = |e: &Edge| match e.kind {
            EdgeKind::Magnetic | EdgeKind::Beam => 0,
            EdgeKind::Band(_) => 1,
            EdgeKind::ParentChild(_) | EdgeKind::Sibling(_) => 2,
        };
        for e in self.edges_in_direction(block, direction) {
            if best.is_none_or(|b| rank(e) < rank(b)) {
                best = Some(e);
            }
        }
        best
    }

    pub fn neighbor_in_direction(&self, block: BlockId, direction: EdgeDirection) -> Option<BlockId> {
        self.edge_in_direction(block, direction)
            .and_then(|e| e.opposite(block))
    }

    pub fn edge_between(&self, a: BlockId, b: BlockId) -> Option<&Edge> {
        self.edges_of(a).find(|e| e.opposite(a) == Some(b))
    }

    pub fn placeholder_ids(&self) -> Vec<BlockId> {
        self.vertices
            .iter()
            .filter(|(_, v)| v.block.is_placeholder())
            .map(|(id, _)| *id)
            .collect()
    }

    // ---- events --------------------------------------------------------------------------

    /// Pending change notifications, in mutation order.
    pub fn events(&self) -> &[GraphEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GraphEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- vertices ------------------------------------------------------------------------

    pub fn add_vertex(&mut self, block: Block) -> BlockId {
        let id = BlockId::from_raw(self.next_block);
        self.next_block += 1;
        tracing::debug!(block = %id, label = %block.label, "add vertex");
        self.vertices.insert(id, VertexEntry::new(block));
        self.invalidate();
        self.events.push(GraphEvent::VertexAdded {
            vertex: id,
            edges: Vec::new(),
        });
        id
    }

    /// Removes `id`, reconnecting its former neighbours so that `a - id - b` becomes `a - b`.
    ///
    /// Returns the removed block; `None` (and no change) when `id` is not in the graph.
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let reconnect = self.detach(id)?;
        let entry = self.vertices.shift_remove(&id)?;
        debug_assert!(entry.edges.is_empty(), "detach left edges on {id}");
        self.invalidate();
        for (a, b, kind, direction) in reconnect {
            self.reconnect(a, b, kind, direction);
        }
        Some(entry.block)
    }

    /// Deletes every edge incident to `id` and reports the reconnections its removal implies.
    /// The vertex itself stays; emits `VertexRemoved` with the edges that existed.
    fn detach(&mut self, id: BlockId) -> Option<Vec<(BlockId, BlockId, EdgeKind, EdgeDirection)>> {
        let entry = self.vertices.get(&id)?;
        let incident: Vec<Edge> = entry
            .edges
            .iter()
            .filter_map(|e| self.edges.get(e))
            .cloned()
            .collect();

        let bridge = |direction: EdgeDirection| {
            incident.iter().find(|e| {
                e.direction_from(id) == Some(direction) && (e.kind.is_rigid() || e.kind.is_band())
            })
        };

        let mut reconnect = Vec::new();
        for dim in Dimension::ALL {
            let (Some(before), Some(after)) = (bridge(dim.before()), bridge(dim.after())) else {
                continue;
            };
            let (Some(a), Some(b)) = (before.opposite(id), after.opposite(id)) else {
                continue;
            };
            let crossing = incident
                .iter()
                .any(|e| e.direction_from(id).map(|d| d.dimension()) == Some(dim.other()));
            let kind = if crossing || before.kind.is_band() || after.kind.is_band() {
                EdgeKind::band(dim)
            } else {
                EdgeKind::Magnetic
            };
            reconnect.push((a, b, kind, dim.after()));
        }

        for e in &incident {
            self.unlink_edge(e.id);
        }
        tracing::debug!(block = %id, edges = incident.len(), "detach vertex");
        self.events.push(GraphEvent::VertexRemoved {
            vertex: id,
            edges: incident,
        });
        Some(reconnect)
    }

    fn reconnect(&mut self, a: BlockId, b: BlockId, kind: EdgeKind, direction: EdgeDirection) {
        if a == b || self.edge_between(a, b).is_some() {
            return;
        }
        if kind.is_rigid()
            && (self.rigid_slot(a, direction).is_some()
                || self.rigid_slot(b, direction.opposite()).is_some())
        {
            return;
        }
        self.insert_edge(a, b, kind, direction);
    }

    /// Replaces the ids of `block` along `dimension` and refreshes every band touching it.
    pub fn set_ids(&mut self, block: BlockId, dimension: Dimension, ids: IdSet) -> bool {
        let Some(entry) = self.vertices.get_mut(&block) else {
            return false;
        };
        entry.block.set_ids(dimension, ids);
        self.update_edges_of(block);
        true
    }

    /// Swaps the dimensions of `block`. Refused while the block has edges, since their
    /// directions would no longer match the dimensions they were created along.
    pub fn transpose(&mut self, block: BlockId) -> bool {
        match self.vertices.get_mut(&block) {
            Some(entry) if entry.edges.is_empty() => {
                entry.block.transpose();
                true
            }
            _ => false,
        }
    }

    // ---- edges ---------------------------------------------------------------------------

    fn rigid_slot(&self, block: BlockId, direction: EdgeDirection) -> Option<&Edge> {
        self.edges_in_direction(block, direction)
            .find(|e| e.kind.is_rigid())
    }

    /// Checked edge creation: `to` will lie in `direction` of `from`.
    pub fn connect(
        &mut self,
        from: BlockId,
        to: BlockId,
        kind: EdgeKind,
        direction: EdgeDirection,
    ) -> Result<EdgeId> {
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        let a = self.block(from).ok_or(Error::MissingVertex(from))?;
        let b = self.block(to).ok_or(Error::MissingVertex(to))?;

        let dimension = kind.dimension(direction);
        if dimension != direction.dimension() {
            return Err(Error::DirectionMismatch {
                direction,
                dimension,
            });
        }
        if !can_merge(a.id_type(dimension), b.id_type(dimension)) {
            return Err(Error::Incompatible {
                from,
                to,
                dimension,
            });
        }
        if kind.is_rigid() {
            for (block, dir) in [(from, direction), (to, direction.opposite())] {
                if let Some(e) = self.rigid_slot(block, dir) {
                    return Err(Error::SlotOccupied {
                        block,
                        direction: dir,
                        edge: e.id,
                    });
                }
            }
        }
        Ok(self.insert_edge(from, to, kind, direction))
    }

    /// Removes one edge. Returns it, or `None` when already gone.
    pub fn disconnect(&mut self, edge: EdgeId) -> Option<Edge> {
        let removed = self.unlink_edge(edge)?;
        self.events.push(GraphEvent::EdgeRemoved {
            edge: removed.clone(),
        });
        Some(removed)
    }

    /// Unchecked insertion used by operations that validated the slot themselves.
    pub(crate) fn insert_edge(
        &mut self,
        from: BlockId,
        to: BlockId,
        kind: EdgeKind,
        direction: EdgeDirection,
    ) -> EdgeId {
        debug_assert!(self.contains(from), "edge source {from} was never added");
        debug_assert!(self.contains(to), "edge target {to} was never added");
        let id = EdgeId::from_raw(self.next_edge);
        self.next_edge += 1;
        let rigid = kind.is_rigid();
        self.edges.insert(
            id,
            Edge {
                id,
                source: from,
                target: to,
                direction,
                kind,
            },
        );
        for v in [from, to] {
            if let Some(entry) = self.vertices.get_mut(&v) {
                entry.edges.push(id);
            }
        }
        if rigid {
            self.invalidate();
        }
        self.update_edge(id);
        tracing::trace!(edge = %id, %from, %to, ?direction, "insert edge");
        self.events.push(GraphEvent::EdgeAdded { edge: id });
        id
    }

    fn unlink_edge(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.edges.shift_remove(&id)?;
        for v in [edge.source, edge.target] {
            if let Some(entry) = self.vertices.get_mut(&v) {
                entry.edges.retain(|e| *e != id);
            } else {
                debug_assert!(false, "edge {id} referenced missing vertex {v}");
            }
        }
        if edge.kind.is_rigid() {
            self.invalidate();
        }
        Some(edge)
    }

    /// Recomputes the overlap and connectors of a ribbon edge from its endpoints' ids.
    pub fn update_edge(&mut self, id: EdgeId) -> bool {
        let Some(edge) = self.edges.get(&id) else {
            return false;
        };
        let (Some(s), Some(t)) = (
            self.vertices.get(&edge.source),
            self.vertices.get(&edge.target),
        ) else {
            debug_assert!(false, "edge {id} has a dangling endpoint");
            return false;
        };
        let (s, t) = (&s.block, &t.block);
        if let Some(link) = self
            .edges
            .get_mut(&id)
            .and_then(|e| e.kind.band_link_mut())
        {
            link.update(s, t);
        }
        true
    }

    pub fn update_edges_of(&mut self, block: BlockId) {
        let ids: Vec<EdgeId> = self.edge_ids_of(block).to_vec();
        for id in ids {
            self.update_edge(id);
        }
    }

    /// Changes the kind of `edge` (e.g. a rigid snap loosened into a band).
    pub fn set_edge_kind(&mut self, edge: EdgeId, kind: EdgeKind) -> Result<()> {
        let e = self.edges.get_mut(&edge).ok_or(Error::MissingEdge(edge))?;
        let was_rigid = e.kind.is_rigid();
        let now_rigid = kind.is_rigid();
        e.kind = kind;
        if was_rigid || now_rigid {
            self.invalidate();
        }
        self.update_edge(edge);
        Ok(())
    }
}

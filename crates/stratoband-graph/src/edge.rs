//! Typed relations between blocks.

use serde::{Deserialize, Serialize};
use stratoband_geom::{Connector, ConnectorStrategy};

use crate::block::{Block, Dimension};
use crate::direction::EdgeDirection;
use crate::ids::{BlockId, EdgeId, IdSet};

/// Payload of every ribbon-producing edge: the shared dimension plus the cached overlap and
/// connectors, recomputed by [`BandLink::update`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandLink {
    pub dimension: Dimension,
    overlap: IdSet,
    source_strategy: ConnectorStrategy,
    target_strategy: ConnectorStrategy,
    source_connector: Connector,
    target_connector: Connector,
}

impl BandLink {
    pub fn new(dimension: Dimension) -> Self {
        Self::with_strategies(dimension, ConnectorStrategy::Shared, ConnectorStrategy::Shared)
    }

    pub fn with_strategies(
        dimension: Dimension,
        source_strategy: ConnectorStrategy,
        target_strategy: ConnectorStrategy,
    ) -> Self {
        Self {
            dimension,
            overlap: IdSet::new(),
            source_strategy,
            target_strategy,
            source_connector: Connector::default(),
            target_connector: Connector::default(),
        }
    }

    pub fn overlap(&self) -> &IdSet {
        &self.overlap
    }

    pub fn source_connector(&self) -> Connector {
        self.source_connector
    }

    pub fn target_connector(&self) -> Connector {
        self.target_connector
    }

    pub fn source_strategy(&self) -> ConnectorStrategy {
        self.source_strategy
    }

    pub fn target_strategy(&self) -> ConnectorStrategy {
        self.target_strategy
    }

    pub fn update(&mut self, source: &Block, target: &Block) {
        let dim = self.dimension;
        self.overlap = source
            .ids(dim)
            .intersection(target.ids(dim))
            .copied()
            .collect();
        let n = self.overlap.len();
        self.source_connector = self.source_strategy.update(source.size(dim), n);
        self.target_connector = self.target_strategy.update(target.size(dim), n);
    }

    fn swap_ends(&mut self) {
        std::mem::swap(&mut self.source_strategy, &mut self.target_strategy);
        std::mem::swap(&mut self.source_connector, &mut self.target_connector);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Blocks snapped side by side; rigid.
    Magnetic,
    /// Linear link used when merging placeholders; rigid.
    Beam,
    /// Data-overlap ribbon crossing a stratification barrier.
    Band(BandLink),
    /// Split parent to one of its children.
    ParentChild(BandLink),
    /// Consecutive children of the same split.
    Sibling(BandLink),
}

/// Payload-free discriminant of [`EdgeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeTag {
    Magnetic,
    Beam,
    Band,
    ParentChild,
    Sibling,
}

impl EdgeKind {
    pub fn band(dimension: Dimension) -> EdgeKind {
        EdgeKind::Band(BandLink::new(dimension))
    }

    pub fn tag(&self) -> EdgeTag {
        match self {
            EdgeKind::Magnetic => EdgeTag::Magnetic,
            EdgeKind::Beam => EdgeTag::Beam,
            EdgeKind::Band(_) => EdgeTag::Band,
            EdgeKind::ParentChild(_) => EdgeTag::ParentChild,
            EdgeKind::Sibling(_) => EdgeTag::Sibling,
        }
    }

    /// Counts for connectivity and holds a slot exclusively.
    pub fn is_rigid(&self) -> bool {
        matches!(self, EdgeKind::Magnetic | EdgeKind::Beam)
    }

    pub fn is_band(&self) -> bool {
        matches!(self, EdgeKind::Band(_))
    }

    /// Produces a ribbon during layout.
    pub fn is_ribbon(&self) -> bool {
        self.band_link().is_some()
    }

    /// Sort propagation stops at ribbons: blocks on either side sort independently.
    pub fn is_sort_barrier(&self) -> bool {
        self.is_ribbon()
    }

    /// Stratification does not cross ribbons either.
    pub fn is_stratification_barrier(&self) -> bool {
        self.is_ribbon()
    }

    pub fn band_link(&self) -> Option<&BandLink> {
        match self {
            EdgeKind::Band(l) | EdgeKind::ParentChild(l) | EdgeKind::Sibling(l) => Some(l),
            EdgeKind::Magnetic | EdgeKind::Beam => None,
        }
    }

    pub fn band_link_mut(&mut self) -> Option<&mut BandLink> {
        match self {
            EdgeKind::Band(l) | EdgeKind::ParentChild(l) | EdgeKind::Sibling(l) => Some(l),
            EdgeKind::Magnetic | EdgeKind::Beam => None,
        }
    }

    /// Dimension whose ids the edge relates: the band dimension for ribbons, the direction's
    /// dimension for rigid edges.
    pub fn dimension(&self, direction: EdgeDirection) -> Dimension {
        self.band_link()
            .map(|l| l.dimension)
            .unwrap_or_else(|| direction.dimension())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: BlockId,
    pub target: BlockId,
    /// Where `target` lies relative to `source`.
    pub direction: EdgeDirection,
    pub kind: EdgeKind,
}

impl Edge {
    pub fn touches(&self, block: BlockId) -> bool {
        self.source == block || self.target == block
    }

    /// Endpoint on the other side of `block`.
    pub fn opposite(&self, block: BlockId) -> Option<BlockId> {
        if self.source == block {
            Some(self.target)
        } else if self.target == block {
            Some(self.source)
        } else {
            None
        }
    }

    /// Where the other endpoint lies, seen from `block`.
    pub fn direction_from(&self, block: BlockId) -> Option<EdgeDirection> {
        if self.source == block {
            Some(self.direction)
        } else if self.target == block {
            Some(self.direction.opposite())
        } else {
            None
        }
    }

    /// Re-orients the edge: swaps endpoints and flips the direction (and per-end band data)
    /// so that the relation it describes is unchanged.
    pub fn swap_direction(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        self.direction = self.direction.opposite();
        if let Some(link) = self.kind.band_link_mut() {
            link.swap_ends();
        }
    }

    /// Band connector on `block`'s end.
    pub fn connector_for(&self, block: BlockId) -> Option<Connector> {
        let link = self.kind.band_link()?;
        if self.source == block {
            Some(link.source_connector)
        } else if self.target == block {
            Some(link.target_connector)
        } else {
            None
        }
    }
}

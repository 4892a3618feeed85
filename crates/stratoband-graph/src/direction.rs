//! Logical edge directions.

use serde::{Deserialize, Serialize};

use crate::block::Dimension;

/// Where the target of an edge lies relative to its source.
///
/// Only the four axis-aligned compass points are used: `LeftOf`/`RightOf` run along
/// [`Dimension::D1`], `Above`/`Below` along [`Dimension::D2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeDirection {
    Above,
    Below,
    LeftOf,
    RightOf,
}

impl EdgeDirection {
    pub const ALL: [EdgeDirection; 4] = [
        EdgeDirection::Above,
        EdgeDirection::Below,
        EdgeDirection::LeftOf,
        EdgeDirection::RightOf,
    ];

    pub fn opposite(self) -> EdgeDirection {
        match self {
            EdgeDirection::Above => EdgeDirection::Below,
            EdgeDirection::Below => EdgeDirection::Above,
            EdgeDirection::LeftOf => EdgeDirection::RightOf,
            EdgeDirection::RightOf => EdgeDirection::LeftOf,
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            EdgeDirection::LeftOf | EdgeDirection::RightOf => Dimension::D1,
            EdgeDirection::Above | EdgeDirection::Below => Dimension::D2,
        }
    }

    /// `LeftOf` and `Above`: the canonical side when a gap is seen from both ends.
    pub fn is_before(self) -> bool {
        matches!(self, EdgeDirection::LeftOf | EdgeDirection::Above)
    }
}

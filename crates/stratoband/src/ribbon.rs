//! Renderer-facing ribbons produced by a layout pass.

use stratoband_geom::{Band, Point};
use stratoband_graph::{EdgeId, EdgeTag, IdSet, IdType};

use crate::config::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub struct Ribbon {
    pub edge: EdgeId,
    pub tag: EdgeTag,
    pub color: Rgba,
    pub band: Band,
    /// Overlapping ids the ribbon represents.
    pub ids: IdSet,
    pub id_type: IdType,
    /// Narrower ribbon for the selected part of `ids`, if any.
    pub highlight: Option<Highlight>,
}

/// Sub-ribbon drawn over a ribbon for the selected share of its ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub band: Band,
    pub color: Rgba,
}

impl Ribbon {
    pub fn fill(&self) -> Vec<Point> {
        self.band.fill()
    }

    pub fn stroke(&self) -> [&[Point]; 2] {
        self.band.stroke()
    }

    pub fn is_empty(&self) -> bool {
        self.band.is_empty()
    }
}

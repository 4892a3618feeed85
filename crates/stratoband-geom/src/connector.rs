//! Where and how wide a band attaches to a block edge.
//!
//! Both values are fractions of the edge length: `center` is the position of the band's
//! middle along the edge, `radius` its half-width.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Connector {
    pub center: f64,
    pub radius: f64,
}

impl Connector {
    pub const fn new(center: f64, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Start of the attached span along the edge (`center - radius`).
    pub fn start(&self) -> f64 {
        self.center - self.radius
    }

    /// End of the attached span along the edge (`center + radius`).
    pub fn end(&self) -> f64 {
        self.center + self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ConnectorStrategy {
    /// Centered on the edge, width proportional to the overlap.
    #[default]
    Shared,
    /// Anchored at `offset` along the edge: the block is one slice of a split parent and the
    /// band must leave the parent where that slice sits.
    Parent { offset: f64 },
}

impl ConnectorStrategy {
    /// Computes the connector for a block representing `full` ids of which `overlap` are
    /// shared with the block on the other end.
    pub fn update(&self, full: usize, overlap: usize) -> Connector {
        let ratio = if full == 0 {
            0.0
        } else {
            (overlap.min(full) as f64) / (full as f64)
        };
        let radius = ratio / 2.0;
        let center = match *self {
            ConnectorStrategy::Shared => (1.0 - ratio) / 2.0 + radius,
            ConnectorStrategy::Parent { offset } => offset + radius,
        };
        Connector { center, radius }
    }
}

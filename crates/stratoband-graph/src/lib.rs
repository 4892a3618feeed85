#![forbid(unsafe_code)]

//! Block/edge multigraph behind the stratoband canvas.
//!
//! Vertices are data blocks, edges are typed relations between them (magnetic adjacency,
//! beams, data-overlap bands, split parent/child and sibling links). [`BlockGraph`] owns
//! every vertex and edge and addresses them by ids that are never reused, so a stale id simply
//! stops resolving.

pub mod block;
pub mod compat;
pub mod direction;
pub mod edge;
pub mod error;
pub mod graph;
pub mod ids;

pub use block::{Block, DataSlice, Dimension, DimensionData, SortPriority, UiFlags};
pub use compat::{DimensionMatch, IdType};
pub use direction::EdgeDirection;
pub use edge::{BandLink, Edge, EdgeKind, EdgeTag};
pub use error::{Error, Result};
pub use graph::{BlockGraph, GraphEvent, Placeholder, PlaceholderOptions};
pub use ids::{BlockId, DataId, EdgeId, IdSet};

pub use stratoband_geom as geom;

#![forbid(unsafe_code)]

//! Headless block canvas.
//!
//! [`Canvas`] owns a [`BlockGraph`](stratoband_graph::BlockGraph) of data blocks, turns host
//! actions (add, remove, split, drag, sort) into graph mutations, and runs the
//! [`LayoutDriver`] that places blocks and builds the ribbons a renderer draws.

pub mod canvas;
pub mod config;
pub mod error;
pub mod layout;
pub mod ribbon;
pub mod selection;
mod timing;

pub use canvas::Canvas;
pub use config::{ColorConfig, Config, LayoutConfig, Rgba};
pub use error::{Error, Result};
pub use layout::{LayoutDriver, LayoutPass};
pub use ribbon::{Highlight, Ribbon};
pub use selection::Selection;

pub use stratoband_geom as geom;
pub use stratoband_graph as graph;

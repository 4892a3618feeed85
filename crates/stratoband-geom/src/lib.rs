#![forbid(unsafe_code)]

//! Band geometry for stratoband.
//!
//! Given two block rectangles and a [`Connector`] per side, [`Band`] builds the ribbon that
//! links them: attachment points on the facing edges, a centerline routed around the blocks,
//! optional B-spline smoothing and the two boundary curves offset by the connector radii.
//! The crate is pure: output depends only on bounds, connectors and options.

pub mod band;
pub mod connector;
pub mod curve;
pub mod point;
pub mod svg;

pub use band::{Band, BandOptions, RadiusInterpolation};
pub use connector::{Connector, ConnectorStrategy};
pub use point::{Axis, Point, Rect};

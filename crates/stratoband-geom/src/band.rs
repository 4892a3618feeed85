//! Ribbon construction between two block rectangles.
//!
//! Routing is written once for horizontal bands (blocks side by side, attaching to their
//! vertical edges). Vertical bands are transposed into that frame, routed, and transposed
//! back.

use serde::{Deserialize, Serialize};

use crate::connector::Connector;
use crate::curve;
use crate::point::{Axis, Point, Rect};
use crate::svg;

/// How the half-width changes from the source connector to the target connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadiusInterpolation {
    #[default]
    Linear,
    /// Smooth-step; keeps the width flat near both blocks.
    Smooth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BandOptions {
    /// Smooth the routed centerline with a B-spline.
    pub spline: bool,
    pub radius_interpolation: RadiusInterpolation,
    /// Distance the route keeps from a block edge when it has to bend around blocks.
    pub curve_offset: f64,
    pub samples_per_segment: usize,
}

impl Default for BandOptions {
    fn default() -> Self {
        Self {
            spline: true,
            radius_interpolation: RadiusInterpolation::Linear,
            curve_offset: 20.0,
            samples_per_segment: 8,
        }
    }
}

/// Attachment of a band on one block edge, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attachment {
    pub point: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    axis: Axis,
    control: Vec<Point>,
    centerline: Vec<Point>,
    params: Vec<f64>,
    normals: Vec<Point>,
    source_radius: f64,
    target_radius: f64,
    interpolation: RadiusInterpolation,
    top: Vec<Point>,
    bottom: Vec<Point>,
}

fn attach(rect: &Rect, connector: &Connector, right_side: bool) -> Attachment {
    let x = if right_side { rect.right() } else { rect.x };
    Attachment {
        point: Point::new(x, rect.y + connector.center * rect.height),
        radius: connector.radius * rect.height,
    }
}

/// Control polygon for a horizontal band from `s` to `t` (both already in horizontal frame).
fn route(s: &Rect, t: &Rect, ps: Point, pt: Point, offset: f64) -> Vec<Point> {
    const EPS: f64 = 1e-9;
    let forward = s.center().x <= t.center().x;
    let dir = if forward { 1.0 } else { -1.0 };
    let facing = if forward {
        s.right() <= t.x
    } else {
        t.right() <= s.x
    };

    if facing {
        if (ps.y - pt.y).abs() <= EPS {
            return vec![ps, pt];
        }
        let mid = (ps.x + pt.x) / 2.0;
        return vec![ps, Point::new(mid, ps.y), Point::new(mid, pt.y), pt];
    }

    let out_s = Point::new(ps.x + dir * offset, ps.y);
    let in_t = Point::new(pt.x - dir * offset, pt.y);
    if !s.overlaps_along(t, Axis::Vertical) {
        return vec![ps, out_s, in_t, pt];
    }

    // Blocks overlap on both axes: leave, drop below both blocks, come back in.
    let detour_y = s.union(t).bottom() + offset;
    vec![
        ps,
        out_s,
        Point::new(out_s.x, detour_y),
        Point::new(in_t.x, detour_y),
        in_t,
        pt,
    ]
}

impl Band {
    pub fn new(
        source: &Rect,
        target: &Rect,
        axis: Axis,
        source_connector: &Connector,
        target_connector: &Connector,
        options: &BandOptions,
    ) -> Band {
        let (s, t) = match axis {
            Axis::Horizontal => (*source, *target),
            Axis::Vertical => (source.transposed(), target.transposed()),
        };
        let forward = s.center().x <= t.center().x;
        let a_s = attach(&s, source_connector, forward);
        let a_t = attach(&t, target_connector, !forward);

        let mut control = route(&s, &t, a_s.point, a_t.point, options.curve_offset);
        if axis == Axis::Vertical {
            for p in &mut control {
                *p = p.transposed();
            }
        }

        let mut centerline = if options.spline {
            curve::basis_points(&control, options.samples_per_segment)
        } else {
            control.clone()
        };
        curve::dedup_points(&mut centerline);

        let params = curve::arc_length_params(&centerline);
        let normals = curve::normals(&centerline);
        let mut band = Band {
            axis,
            control,
            centerline,
            params,
            normals,
            source_radius: a_s.radius,
            target_radius: a_t.radius,
            interpolation: options.radius_interpolation,
            top: Vec::new(),
            bottom: Vec::new(),
        };
        band.rebuild_boundaries();
        band
    }

    fn radius_at(&self, t: f64) -> f64 {
        let f = match self.interpolation {
            RadiusInterpolation::Linear => t,
            RadiusInterpolation::Smooth => t * t * (3.0 - 2.0 * t),
        };
        self.source_radius + (self.target_radius - self.source_radius) * f
    }

    fn rebuild_boundaries(&mut self) {
        let mut top = Vec::with_capacity(self.centerline.len());
        let mut bottom = Vec::with_capacity(self.centerline.len());
        for ((c, n), &t) in self
            .centerline
            .iter()
            .zip(self.normals.iter())
            .zip(self.params.iter())
        {
            let r = self.radius_at(t);
            top.push(Point::new(c.x + n.x * r, c.y + n.y * r));
            bottom.push(Point::new(c.x - n.x * r, c.y - n.y * r));
        }
        self.top = top;
        self.bottom = bottom;
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Routed control polygon before smoothing.
    pub fn control_points(&self) -> &[Point] {
        &self.control
    }

    pub fn centerline(&self) -> &[Point] {
        &self.centerline
    }

    pub fn source_radius(&self) -> f64 {
        self.source_radius
    }

    pub fn target_radius(&self) -> f64 {
        self.target_radius
    }

    pub fn top(&self) -> &[Point] {
        &self.top
    }

    pub fn bottom(&self) -> &[Point] {
        &self.bottom
    }

    /// A band with zero width at both ends draws nothing.
    pub fn is_empty(&self) -> bool {
        self.source_radius <= 0.0 && self.target_radius <= 0.0
    }

    /// The two boundary curves.
    pub fn stroke(&self) -> [&[Point]; 2] {
        [&self.top, &self.bottom]
    }

    /// Closed outline: top curve followed by the reversed bottom curve.
    pub fn fill(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.top.len() + self.bottom.len());
        out.extend_from_slice(&self.top);
        out.extend(self.bottom.iter().rev().copied());
        out
    }

    pub fn fill_path_d(&self) -> String {
        svg::polygon_d(&self.fill())
    }

    pub fn stroke_path_d(&self) -> [String; 2] {
        [svg::polyline_d(&self.top), svg::polyline_d(&self.bottom)]
    }

    /// A narrower ribbon on the same centerline, with the end radii scaled by `ratio_source`
    /// and `ratio_target` (clamped to `0..=1`).
    pub fn sub_ribbon(&self, ratio_source: f64, ratio_target: f64) -> Band {
        let mut sub = self.clone();
        sub.source_radius = self.source_radius * ratio_source.clamp(0.0, 1.0);
        sub.target_radius = self.target_radius * ratio_target.clamp(0.0, 1.0);
        sub.rebuild_boundaries();
        sub
    }
}

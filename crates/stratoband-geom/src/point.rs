//! Plain geometry value types shared by the graph model and the band engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Coordinate along `axis`.
    pub fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Swaps `x` and `y`. Used to run horizontal routing code on vertical bands.
    pub fn transposed(self) -> Point {
        Point {
            x: self.y,
            y: self.x,
        }
    }
}

/// Direction in which two blocks are laid out relative to each other.
///
/// A horizontal band links a block to a neighbour on its left or right and attaches to the
/// vertical sides; a vertical band attaches to the top/bottom sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Rect {
    fn default() -> Self {
        Self::unplaced(0.0, 0.0)
    }
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle with a size but no location yet (`NaN` origin).
    pub const fn unplaced(width: f64, height: f64) -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
            width,
            height,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Start coordinate along `axis`.
    pub fn min_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// End coordinate along `axis`.
    pub fn max_along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right(),
            Axis::Vertical => self.bottom(),
        }
    }

    /// Extent along `axis`.
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Whether the projections of both rectangles onto `axis` intersect.
    pub fn overlaps_along(&self, other: &Rect, axis: Axis) -> bool {
        self.min_along(axis) < other.max_along(axis) && other.min_along(axis) < self.max_along(axis)
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    pub fn transposed(&self) -> Rect {
        Rect::new(self.y, self.x, self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_along_axis_excludes_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 5.0, 10.0, 10.0);
        assert!(!a.overlaps_along(&b, Axis::Horizontal));
        assert!(a.overlaps_along(&b, Axis::Vertical));
    }

    #[test]
    fn unplaced_rects_report_not_placed() {
        assert!(!Rect::unplaced(4.0, 4.0).is_placed());
        assert!(Rect::new(0.0, 0.0, 4.0, 4.0).is_placed());
    }
}

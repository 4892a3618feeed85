//! Centerline smoothing and sampling.

use crate::point::Point;

fn cubic_at(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point {
        x: a * p0.x + b * c1.x + c * c2.x + d * p1.x,
        y: a * p0.y + b * c1.y + c * c2.y + d * p1.y,
    }
}

/// Uniform cubic B-spline through the control polygon `points`, sampled into a polyline.
///
/// Same construction as D3's `curveBasis`: the curve starts at the first point, ends at the
/// last one and stays inside the convex hull of the control points. Inputs with fewer than
/// three points are returned unchanged.
pub fn basis_points(points: &[Point], samples_per_segment: usize) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let samples = samples_per_segment.max(1);
    let mut out: Vec<Point> = Vec::with_capacity((points.len() + 1) * samples + 2);

    let first = points[0];
    let second = points[1];
    out.push(first);
    out.push(Point {
        x: (5.0 * first.x + second.x) / 6.0,
        y: (5.0 * first.y + second.y) / 6.0,
    });

    fn basis_segment(out: &mut Vec<Point>, x0: Point, x1: Point, x: Point, samples: usize) {
        let Some(&from) = out.last() else {
            return;
        };
        let c1 = Point {
            x: (2.0 * x0.x + x1.x) / 3.0,
            y: (2.0 * x0.y + x1.y) / 3.0,
        };
        let c2 = Point {
            x: (x0.x + 2.0 * x1.x) / 3.0,
            y: (x0.y + 2.0 * x1.y) / 3.0,
        };
        let end = Point {
            x: (x0.x + 4.0 * x1.x + x.x) / 6.0,
            y: (x0.y + 4.0 * x1.y + x.y) / 6.0,
        };
        for i in 1..=samples {
            let t = i as f64 / samples as f64;
            out.push(cubic_at(from, c1, c2, end, t));
        }
    }

    let mut x0 = first;
    let mut x1 = second;
    for &p in &points[2..] {
        basis_segment(&mut out, x0, x1, p, samples);
        x0 = x1;
        x1 = p;
    }
    basis_segment(&mut out, x0, x1, x1, samples);
    out.push(x1);

    dedup_points(&mut out);
    out
}

/// Drops consecutive duplicates; zero-length segments have no usable normal.
pub fn dedup_points(points: &mut Vec<Point>) {
    const EPS: f64 = 1e-9;
    points.dedup_by(|b, a| (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS);
}

/// Normalised arc-length parameter (0 at the first point, 1 at the last) of every point.
pub fn arc_length_params(points: &[Point]) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::with_capacity(points.len());
    let mut acc = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            acc += points[i - 1].distance(*p);
        }
        out.push(acc);
    }
    if acc > 0.0 {
        for v in &mut out {
            *v /= acc;
        }
    } else if let Some(last) = out.last_mut() {
        *last = 1.0;
    }
    out
}

/// Unit normal at every point: the tangent rotated by +90 degrees, where the tangent is the
/// average direction of the adjacent segments.
pub fn normals(points: &[Point]) -> Vec<Point> {
    fn unit(dx: f64, dy: f64) -> Point {
        let len = dx.hypot(dy);
        if len > 1e-12 {
            Point::new(dx / len, dy / len)
        } else {
            Point::new(0.0, 0.0)
        }
    }

    let n = points.len();
    let mut out: Vec<Point> = Vec::with_capacity(n);
    for i in 0..n {
        let mut tx = 0.0;
        let mut ty = 0.0;
        if i > 0 {
            let d = unit(points[i].x - points[i - 1].x, points[i].y - points[i - 1].y);
            tx += d.x;
            ty += d.y;
        }
        if i + 1 < n {
            let d = unit(points[i + 1].x - points[i].x, points[i + 1].y - points[i].y);
            tx += d.x;
            ty += d.y;
        }
        let t = unit(tx, ty);
        out.push(Point::new(-t.y, t.x));
    }
    out
}

//! SVG path emission for band outlines.
//!
//! Numbers are rounded to three fractional digits (half-up) and trailing zeros are trimmed, so
//! paths stay compact and stable across platforms.

use crate::point::Point;

pub fn fmt_path_into(out: &mut String, v: f64) {
    if !v.is_finite() || v.abs() < 0.0005 {
        out.push('0');
        return;
    }

    let k = (v * 1000.0 + 0.5).floor() as i64;
    if k == 0 {
        out.push('0');
        return;
    }

    let neg = k.is_negative();
    let abs = k.unsigned_abs();
    let int_part = abs / 1000;
    let frac = abs % 1000;

    if neg {
        out.push('-');
    }

    use std::fmt::Write as _;
    let _ = write!(out, "{int_part}");
    if frac == 0 {
        return;
    }

    let mut digits = [b'0'; 3];
    digits[0] = b'0' + (frac / 100) as u8;
    digits[1] = b'0' + ((frac / 10) % 10) as u8;
    digits[2] = b'0' + (frac % 10) as u8;
    let mut end = 3usize;
    while end > 0 && digits[end - 1] == b'0' {
        end -= 1;
    }
    out.push('.');
    for &b in &digits[..end] {
        out.push(b as char);
    }
}

fn emit_cmd_pair(out: &mut String, cmd: char, p: Point) {
    out.push(cmd);
    fmt_path_into(out, p.x);
    out.push(',');
    fmt_path_into(out, p.y);
}

/// Open path through `points` (`M` then `L` commands).
pub fn polyline_d(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len().saturating_mul(16));
    for (i, p) in points.iter().enumerate() {
        emit_cmd_pair(&mut out, if i == 0 { 'M' } else { 'L' }, *p);
    }
    out
}

/// Closed path through `points`.
pub fn polygon_d(points: &[Point]) -> String {
    let mut out = polyline_d(points);
    if !out.is_empty() {
        out.push('Z');
    }
    out
}

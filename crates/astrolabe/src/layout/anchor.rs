//! Clipping indicator lines against a ring boundary.

use crate::angle::{solve, ConvergenceError};
use crate::layout::types::Point;

/// Parameter `t` at which the line `from + (to - from)·t` is at distance
/// `radius` from `center`.
///
/// Newton iteration starts at t = 0 (the `from` end) and returns whichever
/// root it reaches.
pub fn intersect_circle(
    from: Point,
    to: Point,
    center: Point,
    radius: f64,
) -> Result<f64, ConvergenceError> {
    let f = |t: f64| {
        let p = from.lerp(&to, t);
        (p.x - center.x).powi(2) + (p.y - center.y).powi(2) - radius.powi(2)
    };
    solve(0.0, f)
}

/// The point where the line crosses the circle.
pub fn clip_to_circle(
    from: Point,
    to: Point,
    center: Point,
    radius: f64,
) -> Result<Point, ConvergenceError> {
    intersect_circle(from, to, center, radius).map(|t| from.lerp(&to, t))
}

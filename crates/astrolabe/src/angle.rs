//! Angle helpers for the circular ecliptic coordinate space.
//!
//! All chart math is done in degrees; radians only appear inside `sin`/`cos`.

use thiserror::Error;

/// Iteration budget for [`solve`].
pub const MAX_ITERATIONS: usize = 20;
/// Residual accepted by [`solve`] as a root.
pub const TOLERANCE: f64 = 1e-6;
/// Step used for the central-difference derivative.
const DERIVATIVE_STEP: f64 = 1e-6;

/// Raised when Newton iteration cannot find a root within the budget.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvergenceError {
    #[error("no root within {iterations} iterations (last t = {last_t}, f(t) = {residual})")]
    Exhausted {
        iterations: usize,
        last_t: f64,
        residual: f64,
    },
    #[error("derivative vanished at t = {t}")]
    FlatDerivative { t: f64 },
}

/// Normalize degrees to [0, 360).
pub fn normalize(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Cosine of an angle given in degrees.
pub fn cos(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Sine of an angle given in degrees.
pub fn sin(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = normalize(a - b);
    d.min(360.0 - d)
}

/// Find a root of `f` near `t0` by Newton iteration with a numeric derivative.
pub fn solve<F>(t0: f64, f: F) -> Result<f64, ConvergenceError>
where
    F: Fn(f64) -> f64,
{
    let mut t = t0;
    let mut ft = f(t);

    for _ in 0..MAX_ITERATIONS {
        if ft.abs() < TOLERANCE {
            return Ok(t);
        }

        let slope = (f(t + DERIVATIVE_STEP) - f(t - DERIVATIVE_STEP)) / (2.0 * DERIVATIVE_STEP);
        if slope == 0.0 || !slope.is_finite() {
            return Err(ConvergenceError::FlatDerivative { t });
        }

        t -= ft / slope;
        ft = f(t);
    }

    if ft.abs() < TOLERANCE {
        Ok(t)
    } else {
        Err(ConvergenceError::Exhausted {
            iterations: MAX_ITERATIONS,
            last_t: t,
            residual: ft,
        })
    }
}

//! Spline error types.
//!
//! All variants are construction-time failures: a [`crate::spline::monotone::MonotoneSpline`]
//! either validates fully or is never built, and evaluation afterwards
//! cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplineError {
    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("non-finite coordinate in control point ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("x positions of ({x1}, {y1}) and ({x2}, {y2}) are below minimum spacing {min}")]
    XSpacingBelowMinimum {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        min: f64,
    },

    #[error("input is not monotonic: y reverses direction between ({x1}, {y1}) and ({x2}, {y2})")]
    NonMonotonicY {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },

    #[error("input datapoints are not strictly monotone: negative tangent ratio on segment {segment}")]
    NotStrictlyMonotone { segment: usize },
}

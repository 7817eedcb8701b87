//! Monotone cubic spline over ordered control points.
//!
//! The spline passes through each control point exactly, and whenever the
//! control points are monotonic in y the interpolated values are
//! monotonic as well. Construction validates the control points, computes
//! secants and Fritsch-Carlson tangents, and stores one tangent per
//! point; evaluation locates the containing segment by binary search and
//! evaluates a single Hermite cubic.

use std::cmp::Ordering;

use crate::point::Point;
use crate::search::{locate, BinarySearchResult};
use crate::spline::errors::SplineError;
use crate::spline::hermite::CubicHermite;
use crate::spline::secant;
use crate::spline::tangent::{FritschCarlson, PointWithTangent, TangentStrategy};

/// Minimum spacing between adjacent x positions. Below this, secant
/// slopes become numerically unstable.
pub const MIN_X_SPACING: f64 = 1e-6;

/// How x values outside the range of the control points are handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExtrapolationStrategy {
    /// The y value of the nearest control point: a flat line before and
    /// after the spline.
    Flat,
    /// Linear continuation using the tangent computed at the nearest
    /// control point.
    Tangent,
}

#[derive(Debug, Clone)]
pub struct MonotoneSpline {
    points: Vec<PointWithTangent>,
    xs: Vec<f64>,
}

impl MonotoneSpline {
    /// Builds a spline through `input_points` with Fritsch-Carlson
    /// tangents.
    pub fn new(input_points: &[Point]) -> Result<Self, SplineError> {
        Self::with_strategy(input_points, &FritschCarlson)
    }

    /// Builds a spline with a caller-supplied tangent strategy.
    ///
    /// # Errors
    /// ┌ [`SplineError::InsufficientPoints`]    - fewer than 2 control points.
    /// ├ [`SplineError::NonFinitePoint`]        - a coordinate is NaN or infinite.
    /// ├ [`SplineError::XSpacingBelowMinimum`]  - adjacent x positions closer
    /// │                                          than [`MIN_X_SPACING`] (this
    /// │                                          also rejects non-increasing x).
    /// ├ [`SplineError::NonMonotonicY`]         - y reverses direction.
    /// └ [`SplineError::NotStrictlyMonotone`]   - propagated from the tangent
    ///                                            strategy.
    pub fn with_strategy(
        input_points: &[Point],
        tangent_strategy: &dyn TangentStrategy,
    ) -> Result<Self, SplineError> {
        validate_control_points(input_points)?;

        let points_with_secants = secant::calculate(input_points)?;
        let points = tangent_strategy.compute(&points_with_secants)?;
        let xs = points.iter().map(|p| p.x).collect();

        Ok(Self { points, xs })
    }

    /// Interpolates y = f(x).
    ///
    /// Within the control point range this evaluates the containing
    /// Hermite segment; an exact hit on a control point returns the
    /// stored y directly. Outside the range, `extrapolation` decides the
    /// value, so evaluation is total.
    pub fn interpolate(&self, x: f64, extrapolation: ExtrapolationStrategy) -> f64 {
        match locate(&self.xs, x) {
            Ok(BinarySearchResult::Exact(index)) => self.points[index].y,
            Ok(BinarySearchResult::Between { low, high }) => {
                let p1 = self.points[low];
                let p2 = self.points[high];
                CubicHermite::new(p1.x, p1.y, p1.tangent, p2.x, p2.y, p2.tangent).interpolate(x)
            }
            Err(_) => self.extrapolate(x, extrapolation),
        }
    }

    /// The control points with their computed tangents.
    pub fn points(&self) -> &[PointWithTangent] {
        &self.points
    }

    fn extrapolate(&self, x: f64, extrapolation: ExtrapolationStrategy) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        match extrapolation {
            ExtrapolationStrategy::Flat => {
                if x < first.x {
                    first.y
                } else {
                    last.y
                }
            }
            ExtrapolationStrategy::Tangent => {
                if x < first.x {
                    first.y - first.tangent * (first.x - x)
                } else {
                    last.y + last.tangent * (x - last.x)
                }
            }
        }
    }
}

/// x must step by at least [`MIN_X_SPACING`] and y must not reverse
/// direction anywhere in the set.
fn validate_control_points(points: &[Point]) -> Result<(), SplineError> {
    if points.len() < 2 {
        return Err(SplineError::InsufficientPoints { got: points.len() });
    }
    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(SplineError::NonFinitePoint {
                x: point.x,
                y: point.y,
            });
        }
    }

    let mut direction = Ordering::Equal;
    for pair in points.windows(2) {
        let (last, point) = (&pair[0], &pair[1]);

        if point.x - last.x < MIN_X_SPACING {
            return Err(SplineError::XSpacingBelowMinimum {
                x1: last.x,
                y1: last.y,
                x2: point.x,
                y2: point.y,
                min: MIN_X_SPACING,
            });
        }

        let cd = point.y.total_cmp(&last.y);
        if cd != Ordering::Equal {
            if direction == Ordering::Equal {
                direction = cd;
            } else if cd != direction {
                return Err(SplineError::NonMonotonicY {
                    x1: last.x,
                    y1: last.y,
                    x2: point.x,
                    y2: point.y,
                });
            }
        }
    }

    Ok(())
}

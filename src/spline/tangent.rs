//! Tangent selection for the monotone spline.
//!
//! Implements the Fritsch-Carlson algorithm for interpolant selection
//! described by
//! [monotone cubic interpolation](https://en.wikipedia.org/wiki/Monotone_cubic_interpolation):
//! initialize each tangent from the secants around its point, then
//! rescale any tangent pair that leaves the monotonicity region.

use crate::spline::errors::SplineError;
use crate::spline::secant::PointWithSecants;

/// A control point with its chosen tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointWithTangent {
    pub x: f64,
    pub y: f64,
    pub tangent: f64,
}

/// Derives one tangent per control point from the secants around it.
///
/// The only built-in implementation is [`FritschCarlson`]; the seam
/// exists for alternative tangent selection algorithms.
pub trait TangentStrategy {
    fn compute(&self, points: &[PointWithSecants]) -> Result<Vec<PointWithTangent>, SplineError>;
}

/// Fritsch-Carlson tangent selection.
#[derive(Debug, Default, Clone, Copy)]
pub struct FritschCarlson;

impl TangentStrategy for FritschCarlson {
    fn compute(&self, points: &[PointWithSecants]) -> Result<Vec<PointWithTangent>, SplineError> {
        let mut m = init_tangents(points);
        ensure_monotonicity(points, &mut m)?;

        Ok(points
            .iter()
            .zip(&m)
            .map(|(p, &tangent)| PointWithTangent {
                x: p.point.x,
                y: p.point.y,
                tangent,
            })
            .collect())
    }
}

/// Steps 1 and 2: the sole adjacent secant slope at the ends, the
/// arithmetic mean of both adjacent secant slopes in the interior.
fn init_tangents(points: &[PointWithSecants]) -> Vec<f64> {
    points
        .iter()
        .map(|p| match (p.secant_before, p.secant_after) {
            (Some(before), Some(after)) => (before.slope + after.slope) / 2.0,
            (Some(before), None) => before.slope,
            (None, Some(after)) => after.slope,
            // unreachable with two or more points
            (None, None) => 0.0,
        })
        .collect()
}

/// Steps 3 to 5: zero the tangents either side of a flat segment, then
/// rescale any tangent pair whose (α, β) vector leaves the circle of
/// radius 3, the Fritsch-Carlson sufficient condition for a monotone
/// segment.
fn ensure_monotonicity(points: &[PointWithSecants], m: &mut [f64]) -> Result<(), SplineError> {
    let n = m.len();
    let delta: Vec<f64> = points
        .iter()
        .filter_map(|p| p.secant_after)
        .map(|secant| secant.slope)
        .collect();

    // step 3: equal successive y values force flat tangents at both
    // points, and exempt the pairs touching them from the rescale
    let mut skip = vec![false; n];
    for k in 0..n.saturating_sub(1) {
        if points[k].point.y == points[k + 1].point.y {
            m[k] = 0.0;
            m[k + 1] = 0.0;
            skip[k] = true;
            skip[k + 1] = true;
        }
    }

    for k in 0..n.saturating_sub(1) {
        if skip[k] {
            continue;
        }

        let alpha = m[k] / delta[k];
        let beta = m[k + 1] / delta[k];
        if alpha < 0.0 || beta < 0.0 {
            return Err(SplineError::NotStrictlyMonotone { segment: k });
        }

        // step 5: keep α² + β² <= 9
        let magnitude = (alpha * alpha + beta * beta).sqrt();
        if magnitude > 3.0 {
            let gamma = 3.0 / magnitude;
            m[k] = gamma * alpha * delta[k];
            m[k + 1] = gamma * beta * delta[k];
        }
    }

    Ok(())
}

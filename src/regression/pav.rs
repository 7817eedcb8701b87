//! Pair-adjacent violators, also known as "pool adjacent violators", for
//! isotonic regression.
//!
//! Input points are stable-sorted by x and scanned once over a
//! [`Chain`]; any adjacent pair violating the requested ordering is
//! merged into its weighted average, and the cursor rewind built into the
//! chain lets a merge cascade backwards through earlier points until no
//! violation remains.
//!
//! Points closer together than the configured minimum x spacing are
//! merged regardless of their y ordering: near-zero-width segments
//! produce extreme secant slopes in the spline step.

use crate::point::Point;
use crate::regression::chain::Chain;
use crate::regression::errors::RegressionError;
use crate::regression::interpolant::{Interpolant, InterpolationStrategy};
use crate::spline::errors::SplineError;
use crate::spline::monotone::{ExtrapolationStrategy, MonotoneSpline, MIN_X_SPACING};

/// Requested ordering of the regressed y values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PavMode {
    Increasing,
    Decreasing,
}

/// Pair-adjacent-violators configuration
///
/// # Fields
/// ┌ `mode`          : requested y ordering; [`PavMode::Increasing`] by default
/// └ `x_min_spacing` : adjacent points closer than this merge unconditionally;
///                     [`MIN_X_SPACING`] by default, matching the spline's
///                     construction threshold
#[derive(Debug, Copy, Clone)]
pub struct PavCfg {
    mode: PavMode,
    x_min_spacing: f64,
}

impl PavCfg {
    pub fn new() -> Self {
        Self {
            mode: PavMode::Increasing,
            x_min_spacing: MIN_X_SPACING,
        }
    }

    pub fn set_mode(mut self, v: PavMode) -> Self {
        self.mode = v;
        self
    }

    pub fn set_x_min_spacing(mut self, v: f64) -> Result<Self, RegressionError> {
        if !v.is_finite() || v < 0.0 {
            return Err(RegressionError::InvalidXMinSpacing { got: v });
        }
        self.x_min_spacing = v;
        Ok(self)
    }

    // getters
    pub fn mode(&self) -> PavMode { self.mode }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
}

impl Default for PavCfg {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of an isotonic regression: an ordered point set monotonic
/// in y, with total weight conserved, plus interpolating functions over
/// it.
#[derive(Debug, Clone)]
pub struct IsotonicRegression {
    isotonic_points: Vec<Point>,
}

impl IsotonicRegression {
    /// Reduces `points` onto a monotonic point set.
    ///
    /// The input does not need to be sorted; the result depends only on
    /// the multiset of points and the configured mode.
    ///
    /// # Errors
    /// ┌ [`RegressionError::EmptyInput`]     - no points supplied.
    /// ├ [`RegressionError::NonFinitePoint`] - a coordinate is NaN or infinite.
    /// └ [`RegressionError::InvalidWeight`]  - a weight is not finite and > 0.
    pub fn new(points: &[Point], cfg: PavCfg) -> Result<Self, RegressionError> {
        let mut sorted = Vec::with_capacity(points.len());
        for point in points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(RegressionError::NonFinitePoint {
                    x: point.x,
                    y: point.y,
                });
            }
            if !point.weight.is_finite() || point.weight <= 0.0 {
                return Err(RegressionError::InvalidWeight { got: point.weight });
            }
            sorted.push(*point);
        }
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

        let mode = cfg.mode();
        let x_min_spacing = cfg.x_min_spacing();

        let mut chain = Chain::from_values(sorted)?;
        chain.iterate(|cursor| {
            let next = *cursor.next_value();
            cursor.previous_value().and_then(|previous| {
                let should_merge = previous.x == next.x
                    || next.x - previous.x < x_min_spacing
                    || match mode {
                        PavMode::Increasing => previous.y >= next.y,
                        PavMode::Decreasing => previous.y <= next.y,
                    };
                if should_merge {
                    Some(previous.merge(&next))
                } else {
                    None
                }
            })
        })?;

        Ok(Self {
            isotonic_points: chain.to_values(),
        })
    }

    /// Regression with the default configuration, increasing mode.
    pub fn increasing(points: &[Point]) -> Result<Self, RegressionError> {
        Self::new(points, PavCfg::new())
    }

    /// Regression with the default configuration, decreasing mode.
    pub fn decreasing(points: &[Point]) -> Result<Self, RegressionError> {
        Self::new(points, PavCfg::new().set_mode(PavMode::Decreasing))
    }

    /// The points after the regression, ordered by x and monotonic in y
    /// in the configured direction.
    pub fn isotonic_points(&self) -> &[Point] {
        &self.isotonic_points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.isotonic_points
    }

    /// Builds a function interpolating y = f(x) over the regressed
    /// points.
    ///
    /// A single regressed point yields a constant function returning its
    /// y for any x; otherwise a [`MonotoneSpline`] through the points,
    /// with `extrapolation` applied outside their x range.
    pub fn interpolator(
        &self,
        strategy: InterpolationStrategy,
        extrapolation: ExtrapolationStrategy,
    ) -> Result<Interpolant, SplineError> {
        if self.isotonic_points.len() == 1 {
            return Ok(Interpolant::Constant(self.isotonic_points[0].y));
        }
        match strategy {
            InterpolationStrategy::Spline => {
                let spline = MonotoneSpline::new(&self.isotonic_points)?;
                Ok(Interpolant::Spline {
                    spline,
                    extrapolation,
                })
            }
        }
    }

    /// Builds a function interpolating x = f⁻¹(y) over the regressed
    /// points, by running the spline over the (y, x)-swapped points. The
    /// swapped points are monotonic in y by construction of the
    /// regression.
    ///
    /// A single regressed point yields a constant function returning its
    /// x for any y.
    pub fn inverse_interpolator(
        &self,
        strategy: InterpolationStrategy,
        extrapolation: ExtrapolationStrategy,
    ) -> Result<Interpolant, SplineError> {
        if self.isotonic_points.len() == 1 {
            return Ok(Interpolant::Constant(self.isotonic_points[0].x));
        }
        match strategy {
            InterpolationStrategy::Spline => {
                let swapped: Vec<Point> = self
                    .isotonic_points
                    .iter()
                    .map(|p| Point::with_weight(p.y, p.x, p.weight))
                    .collect();
                let spline = MonotoneSpline::new(&swapped)?;
                Ok(Interpolant::Spline {
                    spline,
                    extrapolation,
                })
            }
        }
    }
}

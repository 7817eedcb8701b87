use crate::point::Point;
use crate::spline::errors::SplineError;

/// Slope of the straight line between two adjacent points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Secant {
    pub slope: f64,
}

impl Secant {
    pub fn new(start: &Point, end: &Point) -> Self {
        Self {
            slope: (end.y - start.y) / (end.x - start.x),
        }
    }
}

/// A point together with the secants to its neighbors. `secant_before`
/// and `secant_after` are absent exactly at the first and last point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointWithSecants {
    pub point: Point,
    pub secant_before: Option<Secant>,
    pub secant_after: Option<Secant>,
}

/// Associates each point with the secants on either side of it.
///
/// # Errors
/// └ [`SplineError::InsufficientPoints`] - fewer than 2 points supplied.
pub fn calculate(points: &[Point]) -> Result<Vec<PointWithSecants>, SplineError> {
    if points.len() < 2 {
        return Err(SplineError::InsufficientPoints { got: points.len() });
    }

    let secants: Vec<Secant> = points
        .windows(2)
        .map(|pair| Secant::new(&pair[0], &pair[1]))
        .collect();

    Ok(points
        .iter()
        .enumerate()
        .map(|(i, &point)| PointWithSecants {
            point,
            secant_before: if i > 0 { Some(secants[i - 1]) } else { None },
            secant_after: secants.get(i).copied(),
        })
        .collect())
}

use std::fmt;

/// A point in 2D space, with an optional weight (defaults to 1).
///
/// Merging produces a new point at the weighted average of the inputs,
/// carrying their combined weight; the reduction uses this to collapse
/// runs of violating points into a single representative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub weight: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, weight: 1.0 }
    }

    pub fn with_weight(x: f64, y: f64, weight: f64) -> Self {
        Self { x, y, weight }
    }

    /// Combines two points into one at their weighted average position.
    ///
    /// The result's x and y lie between the inputs' and its weight is the
    /// sum of the input weights.
    pub fn merge(&self, other: &Point) -> Point {
        let combined = self.weight + other.weight;
        let nx = (self.x * self.weight + other.x * other.weight) / combined;
        let ny = (self.y * self.weight + other.y * other.weight) / combined;
        Point::with_weight(nx, ny, combined)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weight == 1.0 {
            write!(f, "({}, {})", self.x, self.y)
        } else {
            write!(f, "({}, {} :{})", self.x, self.y, self.weight)
        }
    }
}

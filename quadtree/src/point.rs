//! Point type shared by the geometry and index layers.

use std::fmt::{self, Display};

/// Squared Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn distance_squared(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

/// An immutable 2D location.
///
/// Coordinates are expected to be finite. Infinite or NaN values are
/// accepted but every predicate involving them is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Gets the x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Gets the y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared distance to `(x, y)`.
    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        distance_squared(self.x, self.y, x, y)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared_to(other.x, other.y).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

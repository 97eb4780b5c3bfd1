use std::fmt::{self, Display};

use crate::bounding_square::BoundingSquare;
use crate::point::distance_squared;

/// A circular region in 2D space.
///
/// The squared radius is cached so that containment and intersection tests
/// never multiply it out again. Containment is strict: points exactly on
/// the circumference are outside.
///
/// # Examples
///
/// ```rust
/// use quadtree::{BoundingCircle, BoundingSquare};
///
/// let circle = BoundingCircle::new(50.0, 50.0, 20.0);
/// assert!(circle.contains(40.0, 40.0));
/// assert!(!circle.contains(70.0, 50.0));
///
/// let square = BoundingSquare::new(80.0, 50.0, 30.0);
/// assert!(circle.intersects_square(&square));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingCircle {
    cx: f64,
    cy: f64,
    radius: f64,
    radius_squared: f64,
}

impl Display for BoundingCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingCircle({}, {}, {})", self.cx, self.cy, self.radius)
    }
}

impl BoundingCircle {
    /// Creates a circle centered at `(cx, cy)`.
    ///
    /// A negative `radius` is treated as its absolute value.
    pub fn new(cx: f64, cy: f64, radius: f64) -> BoundingCircle {
        let radius = radius.abs();
        BoundingCircle {
            cx,
            cy,
            radius,
            radius_squared: radius * radius,
        }
    }

    pub fn center_x(&self) -> f64 {
        self.cx
    }

    pub fn center_y(&self) -> f64 {
        self.cy
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn radius_squared(&self) -> f64 {
        self.radius_squared
    }

    /// Squared distance from the center of the circle to `(x, y)`.
    #[inline]
    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        distance_squared(self.cx, self.cy, x, y)
    }

    /// Checks if `(x, y)` lies strictly inside the circle.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.distance_squared_to(x, y) < self.radius_squared
    }

    /// Checks if this circle overlaps another circle.
    ///
    /// Circles that only touch do not intersect.
    pub fn intersects(&self, other: &BoundingCircle) -> bool {
        let total_radius = self.radius + other.radius;
        self.distance_squared_to(other.cx, other.cy) < total_radius * total_radius
    }

    /// Checks if this circle overlaps an axis-aligned square.
    pub fn intersects_square(&self, square: &BoundingSquare) -> bool {
        let extent = square.extent();
        let dx = (self.cx - square.center_x()).abs();
        let dy = (self.cy - square.center_y()).abs();

        // Too far apart along either axis.
        if dx > extent + self.radius || dy > extent + self.radius {
            return false;
        }

        // The center projects into the square's span on one axis, so the
        // nearest edge is within reach.
        if dx < extent || dy < extent {
            return true;
        }

        // Only the nearest corner can be inside the circle. The absolute
        // offsets put every corner at (extent, extent).
        distance_squared(dx, dy, extent, extent) < self.radius_squared
    }
}

use std::fmt::{self, Display};

use crate::bounding_circle::BoundingCircle;

/// An axis-aligned square region in 2D space.
///
/// A `BoundingSquare` is described by its center `(cx, cy)` and its
/// `extent`, the distance the square reaches along each axis from the
/// center. The full side length (`size`) is cached alongside.
///
/// Containment is half-open: points on the left and bottom edges are
/// inside, points on the right and top edges are not. This makes the four
/// squares produced by [`BoundingSquare::subdivide`] partition their parent
/// exactly, with no point claimed twice and none dropped.
///
/// # Examples
///
/// ```rust
/// use quadtree::BoundingSquare;
///
/// // A square covering [0, 100) x [0, 100)
/// let square = BoundingSquare::new(50.0, 50.0, 100.0);
///
/// assert!(square.contains(0.0, 0.0));
/// assert!(!square.contains(100.0, 50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingSquare {
    cx: f64,
    cy: f64,
    extent: f64,
    size: f64,
}

impl Display for BoundingSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingSquare({}, {}, {})", self.cx, self.cy, self.size)
    }
}

impl BoundingSquare {
    /// Creates a square centered at `(cx, cy)` with side length `size`.
    ///
    /// A negative `size` is treated as its absolute value.
    pub fn new(cx: f64, cy: f64, size: f64) -> BoundingSquare {
        let size = size.abs();
        BoundingSquare {
            cx,
            cy,
            extent: size / 2.0,
            size,
        }
    }

    /// Creates a square with one corner at `(x, y)` and the opposite corner
    /// at `(x + size, y + size)`.
    pub fn from_corner(x: f64, y: f64, size: f64) -> BoundingSquare {
        let size = size.abs();
        let extent = size / 2.0;
        BoundingSquare {
            cx: x + extent,
            cy: y + extent,
            extent,
            size,
        }
    }

    /// Returns the x coordinate of the center.
    pub fn center_x(&self) -> f64 {
        self.cx
    }

    /// Returns the y coordinate of the center.
    pub fn center_y(&self) -> f64 {
        self.cy
    }

    /// Half of the side length.
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Full side length.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn min_x(&self) -> f64 {
        self.cx - self.extent
    }

    pub fn min_y(&self) -> f64 {
        self.cy - self.extent
    }

    pub fn max_x(&self) -> f64 {
        self.cx + self.extent
    }

    pub fn max_y(&self) -> f64 {
        self.cy + self.extent
    }

    /// Returns `true` if the square covers no points at all.
    pub fn is_empty(&self) -> bool {
        self.extent <= 0.0
    }

    /// Checks if this square contains the point `(x, y)`.
    ///
    /// The left and bottom edges are inclusive, the right and top edges
    /// exclusive. A square with zero extent contains nothing.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.cx - self.extent
            && x < self.cx + self.extent
            && y >= self.cy - self.extent
            && y < self.cy + self.extent
    }

    /// Checks if this square overlaps another square.
    ///
    /// Squares that only touch along an edge or a corner count as
    /// intersecting.
    #[inline]
    pub fn intersects(&self, other: &BoundingSquare) -> bool {
        let max_distance = self.size + other.size;
        (self.cx - other.cx).abs() * 2.0 <= max_distance
            && (self.cy - other.cy).abs() * 2.0 <= max_distance
    }

    /// Checks if this square overlaps a circle.
    ///
    /// Equivalent to [`BoundingCircle::intersects_square`].
    pub fn intersects_circle(&self, circle: &BoundingCircle) -> bool {
        circle.intersects_square(self)
    }

    /// Splits the square into its four quadrants.
    ///
    /// The quadrants are returned in a fixed order: (-x, -y), (+x, -y),
    /// (-x, +y), (+x, +y). Index `i` of the result is the quadrant
    /// [`BoundingSquare::quadrant_of`] reports for points inside it.
    pub fn subdivide(&self) -> [BoundingSquare; 4] {
        let half_extent = self.extent / 2.0;
        [
            BoundingSquare::new(self.cx - half_extent, self.cy - half_extent, self.extent),
            BoundingSquare::new(self.cx + half_extent, self.cy - half_extent, self.extent),
            BoundingSquare::new(self.cx - half_extent, self.cy + half_extent, self.extent),
            BoundingSquare::new(self.cx + half_extent, self.cy + half_extent, self.extent),
        ]
    }

    /// Index of the quadrant of this square that `(x, y)` belongs to, using
    /// the ordering of [`BoundingSquare::subdivide`].
    ///
    /// The center lines belong to the positive side, matching the
    /// half-open containment rule. The point is not required to lie inside
    /// the square.
    #[inline]
    pub fn quadrant_of(&self, x: f64, y: f64) -> usize {
        let east = (x >= self.cx) as usize;
        let north = (y >= self.cy) as usize;
        east | (north << 1)
    }

    /// Squared distance from `(x, y)` to the farthest corner of the square.
    ///
    /// Every point of the square lies within this distance of `(x, y)`.
    pub fn max_distance_squared_to(&self, x: f64, y: f64) -> f64 {
        let dx = (x - self.cx).abs() + self.extent;
        let dy = (y - self.cy).abs() + self.extent;
        dx * dx + dy * dy
    }
}

/// Splits `square` into its four quadrants.
///
/// Free-function form of [`BoundingSquare::subdivide`].
pub fn subdivide(square: &BoundingSquare) -> [BoundingSquare; 4] {
    square.subdivide()
}

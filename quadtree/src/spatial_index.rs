//! SpatialIndex trait definition for point indexes.

use crate::bounding_circle::BoundingCircle;
use crate::bounding_square::BoundingSquare;
use crate::quadtree::{Item, QuadTree};

/// A point index that answers range and nearest-neighbor queries.
///
/// Implemented by [`QuadTree`]; code that only needs to store and query
/// points can be written against this trait instead.
pub trait SpatialIndex<T> {
    /// Stores `data` at `(x, y)`. Returns `false` if the index does not
    /// cover that location.
    fn insert(&mut self, x: f64, y: f64, data: T) -> bool;

    /// Finds the items inside a square, in no particular order.
    fn find_within_square(&self, query: &BoundingSquare) -> Vec<&Item<T>>;

    /// Finds the items strictly inside a circle, nearest to its center first.
    fn find_within_circle(&self, query: &BoundingCircle) -> Vec<&Item<T>>;

    /// Finds up to `count` items nearest to `(x, y)`, nearest first.
    fn find_nearest(&self, x: f64, y: f64, count: usize) -> Vec<&Item<T>>;

    /// Gets the number of stored items.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> SpatialIndex<T> for QuadTree<T> {
    fn insert(&mut self, x: f64, y: f64, data: T) -> bool {
        QuadTree::insert(self, x, y, data)
    }

    fn find_within_square(&self, query: &BoundingSquare) -> Vec<&Item<T>> {
        QuadTree::find_within_square(self, query)
    }

    fn find_within_circle(&self, query: &BoundingCircle) -> Vec<&Item<T>> {
        QuadTree::find_within_circle(self, query)
    }

    fn find_nearest(&self, x: f64, y: f64, count: usize) -> Vec<&Item<T>> {
        QuadTree::find_nearest(self, x, y, count)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

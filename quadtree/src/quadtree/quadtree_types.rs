//! Core types shared by the quadtree implementation.
//!
//! This module defines:
//! - Error and result types
//! - Stored items
//! - Tree statistics

use thiserror::Error;

use crate::point::Point;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while configuring a quadtree.
///
/// Insertion and queries never fail; an out-of-bounds insertion is reported
/// through the boolean returned by `insert`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadTreeError {
    #[error("Invalid capacity: {0} (a node must hold at least one item)")]
    InvalidCapacity(usize),

    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    #[error("Node {0} does not exist in this tree")]
    NodeNotFound(NodeId),
}

/// Result type for quadtree configuration
pub type QuadTreeResult<T> = Result<T, QuadTreeError>;

/// Identifier of a node within its tree's arena
pub type NodeId = usize;

// ============================================================================
// Items
// ============================================================================

/// A payload stored in the tree together with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<T> {
    point: Point,
    data: T,
}

impl<T> Item<T> {
    pub fn new(point: Point, data: T) -> Self {
        Self { point, data }
    }

    /// Location the item was inserted at.
    pub fn point(&self) -> Point {
        self.point
    }

    pub fn x(&self) -> f64 {
        self.point.x()
    }

    pub fn y(&self) -> f64 {
        self.point.y()
    }

    /// Borrows the stored payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the item and returns its payload.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Squared distance from the item to `(x, y)`.
    #[inline]
    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        self.point.distance_squared_to(x, y)
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Shape of a quadtree at a point in time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuadTreeStats {
    pub total_items: usize,
    pub node_count: usize,
    pub leaf_count: usize,
    pub branch_count: usize,
    /// Depth of the deepest node (the root is at depth 0)
    pub max_depth: u32,
    /// Largest number of items held by a single leaf
    pub max_leaf_items: usize,
}

//! # Quadtree - Region Quadtree for 2D Point Data
//!
//! This crate provides an in-memory region quadtree that stores arbitrary
//! payloads at 2D points and answers spatial queries over them.
//!
//! ## Features
//!
//! - **Generic Payloads**: Any type can be stored, no trait bounds required
//! - **Adaptive Subdivision**: Leaves split into four quadrants once full
//! - **Square Queries**: All items inside an axis-aligned square
//! - **Circle Queries**: All items inside a circle, ordered by distance
//! - **Nearest Neighbors**: The `k` closest items to a point
//! - **Visitors**: Fallible callbacks that stop a query early
//! - **Serde Support**: Geometry types serialize with the `serde` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree::{BoundingCircle, BoundingSquare, QuadTree};
//!
//! let mut tree = QuadTree::new(100.0, 100.0, 200.0);
//! for y in (0..200).step_by(10) {
//!     for x in (0..200).step_by(10) {
//!         tree.insert(x as f64, y as f64, (x, y));
//!     }
//! }
//!
//! // Items inside the square [10, 30) x [10, 30)
//! let in_square = tree.find_within_square(&BoundingSquare::new(20.0, 20.0, 20.0));
//! assert_eq!(in_square.len(), 4);
//!
//! // Items strictly within 15 units of (100, 100), nearest first
//! let in_circle = tree.find_within_circle(&BoundingCircle::new(100.0, 100.0, 15.0));
//! assert_eq!(*in_circle[0].data(), (100, 100));
//!
//! // The three items closest to (41, 42)
//! let nearest = tree.find_nearest(41.0, 42.0, 3);
//! assert_eq!(*nearest[0].data(), (40, 40));
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use quadtree::QuadTree;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree: QuadTree<u64> = QuadTree::builder()
//!     .center(0.0, 0.0)
//!     .size(1000.0)
//!     .capacity(16)
//!     .max_depth(20)
//!     .build()?;
//!
//! tree.set_capacity(4)?;
//! # Ok(())
//! # }
//! ```

// Geometry
pub mod bounding_circle;
pub mod bounding_square;
pub mod point;

// Index
pub mod quadtree;
pub mod spatial_index;

// Re-export geometry types
pub use bounding_circle::BoundingCircle;
pub use bounding_square::{subdivide, BoundingSquare};
pub use point::{distance_squared, Point};

// Re-export quadtree types
pub use quadtree::{
    Item, NodeId, NodeRef, QuadTree, QuadTreeBuilder, QuadTreeConfig, QuadTreeError,
    QuadTreeResult, QuadTreeStats, DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH,
};
pub use spatial_index::SpatialIndex;

//! In-memory region quadtree.
//!
//! The tree stores its nodes in an arena and refers to them by [`NodeId`]:
//! - Leaves hold items until they reach their capacity
//! - A full leaf splits into four quadrant children on the next insertion
//! - Queries prune every subtree whose region cannot contain a match

mod config;
mod node;
pub mod quadtree_constants;
mod quadtree_impl;
mod quadtree_search;
mod quadtree_types;

pub use config::{QuadTreeBuilder, QuadTreeConfig};
pub use node::NodeRef;
pub use quadtree_constants::{DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH};
pub use quadtree_impl::QuadTree;
pub use quadtree_types::{Item, NodeId, QuadTreeError, QuadTreeResult, QuadTreeStats};

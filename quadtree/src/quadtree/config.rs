//! Configuration for building a quadtree.

use std::marker::PhantomData;

use super::quadtree_constants::{DEFAULT_CAPACITY, DEFAULT_MAX_DEPTH};
use super::quadtree_impl::QuadTree;
use super::quadtree_types::{QuadTreeError, QuadTreeResult};
use crate::bounding_square::BoundingSquare;

/// Tunable parameters of a quadtree.
///
/// # Examples
///
/// ```rust
/// use quadtree::QuadTreeConfig;
///
/// let config = QuadTreeConfig::default().with_capacity(4);
/// assert_eq!(config.capacity(), 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadTreeConfig {
    capacity: usize,
    max_depth: u32,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadTreeConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        QuadTreeConfig {
            capacity: DEFAULT_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Number of items a leaf holds before it splits.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Deepest level at which nodes are created.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks the configuration for values the tree cannot operate with.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidCapacity`] if the capacity is zero.
    pub fn validate(&self) -> QuadTreeResult<()> {
        validate_capacity(self.capacity)
    }
}

pub(crate) fn validate_capacity(capacity: usize) -> QuadTreeResult<()> {
    if capacity == 0 {
        return Err(QuadTreeError::InvalidCapacity(capacity));
    }
    Ok(())
}

/// Builder for [`QuadTree`] with validated parameters.
///
/// # Examples
///
/// ```rust
/// use quadtree::QuadTree;
///
/// let tree: QuadTree<&str> = QuadTree::builder()
///     .center(50.0, 50.0)
///     .size(100.0)
///     .capacity(4)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(tree.config().capacity(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct QuadTreeBuilder<T> {
    center_x: f64,
    center_y: f64,
    size: f64,
    config: QuadTreeConfig,
    _payload: PhantomData<fn() -> T>,
}

impl<T> Default for QuadTreeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QuadTreeBuilder<T> {
    /// Starts a builder for an empty region centered at the origin.
    pub fn new() -> Self {
        QuadTreeBuilder {
            center_x: 0.0,
            center_y: 0.0,
            size: 0.0,
            config: QuadTreeConfig::new(),
            _payload: PhantomData,
        }
    }

    #[inline]
    pub fn center(mut self, x: f64, y: f64) -> Self {
        self.center_x = x;
        self.center_y = y;
        self
    }

    /// Side length of the root region.
    #[inline]
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets center and size from an existing square.
    #[inline]
    pub fn boundary(mut self, boundary: BoundingSquare) -> Self {
        self.center_x = boundary.center_x();
        self.center_y = boundary.center_y();
        self.size = boundary.size();
        self
    }

    #[inline]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_capacity(capacity);
        self
    }

    #[inline]
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config = self.config.with_max_depth(max_depth);
        self
    }

    #[inline]
    pub fn config(mut self, config: QuadTreeConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the parameters and creates the tree.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidBoundary`] if the center or size is
    /// not finite, and [`QuadTreeError::InvalidCapacity`] if the capacity
    /// is zero.
    pub fn build(self) -> QuadTreeResult<QuadTree<T>> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(QuadTreeError::InvalidBoundary(format!(
                "Center must be finite, got: ({}, {})",
                self.center_x, self.center_y
            )));
        }
        if !self.size.is_finite() {
            return Err(QuadTreeError::InvalidBoundary(format!(
                "Size must be finite, got: {}",
                self.size
            )));
        }
        self.config.validate()?;

        let boundary = BoundingSquare::new(self.center_x, self.center_y, self.size);
        Ok(QuadTree::with_config(boundary, self.config))
    }
}

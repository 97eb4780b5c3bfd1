//! QuadTree construction, insertion and splitting.

use super::config::{validate_capacity, QuadTreeBuilder, QuadTreeConfig};
use super::node::{Node, NodeKind, NodeRef};
use super::quadtree_constants::ROOT;
use super::quadtree_types::{Item, NodeId, QuadTreeError, QuadTreeResult, QuadTreeStats};
use crate::bounding_square::BoundingSquare;
use crate::point::Point;

/// A region quadtree storing payloads of type `T` at point locations.
///
/// Nodes live in an arena owned by the tree. A leaf holds up to its
/// capacity of items; inserting into a full leaf splits it into four
/// quadrant children and moves its items down. Nodes are never removed.
///
/// # Examples
///
/// ```rust
/// use quadtree::QuadTree;
///
/// let mut tree = QuadTree::new(50.0, 50.0, 100.0);
/// assert!(tree.insert(10.0, 20.0, "a"));
/// assert!(tree.insert(60.0, 70.0, "b"));
/// assert!(!tree.insert(150.0, 20.0, "outside"));
///
/// assert_eq!(tree.len(), 2);
/// let nearest = tree.find_nearest(55.0, 65.0, 1);
/// assert_eq!(*nearest[0].data(), "b");
/// ```
#[derive(Debug)]
pub struct QuadTree<T> {
    nodes: Vec<Node<T>>,
    config: QuadTreeConfig,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree covering the square centered at
    /// `(center_x, center_y)` with side length `size`, using the default
    /// configuration.
    pub fn new(center_x: f64, center_y: f64, size: f64) -> Self {
        Self::with_config(
            BoundingSquare::new(center_x, center_y, size),
            QuadTreeConfig::default(),
        )
    }

    /// Starts a builder for a tree with custom configuration.
    pub fn builder() -> QuadTreeBuilder<T> {
        QuadTreeBuilder::new()
    }

    /// Creates an empty tree with an already validated configuration.
    pub(crate) fn with_config(boundary: BoundingSquare, config: QuadTreeConfig) -> Self {
        log::debug!(
            "Creating quadtree over {} with capacity {} and max depth {}",
            boundary,
            config.capacity(),
            config.max_depth()
        );
        QuadTree {
            nodes: vec![Node::leaf(boundary, config.capacity(), 0, None, Vec::new())],
            config,
        }
    }

    /// Region covered by the root node.
    pub fn boundary(&self) -> &BoundingSquare {
        &self.nodes[ROOT].boundary
    }

    /// Configuration the tree was created with.
    ///
    /// Capacity changes made later through [`QuadTree::set_capacity`] are
    /// reflected here; per-subtree overrides are not.
    pub fn config(&self) -> &QuadTreeConfig {
        &self.config
    }

    /// Total number of stored items.
    pub fn len(&self) -> usize {
        self.nodes[ROOT].subtree_size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, ROOT)
    }

    /// Read-only view of the node with the given id, if it exists.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        (id < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    pub(crate) fn node_at(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }

    /// Iterates over every stored item. The order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &Item<T>> + '_ {
        self.nodes.iter().flat_map(|node| node.items().iter())
    }

    /// Sets the split threshold of every node in the tree.
    ///
    /// Leaves already holding more items than the new capacity are left as
    /// they are; they split on their next insertion.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidCapacity`] if `capacity` is zero.
    pub fn set_capacity(&mut self, capacity: usize) -> QuadTreeResult<()> {
        self.set_subtree_capacity(ROOT, capacity)?;
        self.config = self.config.with_capacity(capacity);
        Ok(())
    }

    /// Sets the split threshold of a node and all of its descendants.
    /// Nodes created later by splitting inherit it from their parent.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::InvalidCapacity`] if `capacity` is zero and
    /// [`QuadTreeError::NodeNotFound`] if `id` is not a node of this tree.
    pub fn set_subtree_capacity(&mut self, id: NodeId, capacity: usize) -> QuadTreeResult<()> {
        validate_capacity(capacity)?;
        if id >= self.nodes.len() {
            return Err(QuadTreeError::NodeNotFound(id));
        }

        let mut pending = vec![id];
        let mut updated = 0usize;
        while let Some(current) = pending.pop() {
            let node = &mut self.nodes[current];
            node.capacity = capacity;
            updated += 1;
            if let Some(children) = node.children() {
                pending.extend(children);
            }
        }

        log::debug!("Set capacity {} on {} node(s) below node {}", capacity, updated, id);
        Ok(())
    }

    /// Stores `data` at `(x, y)`.
    ///
    /// Returns `false`, without storing anything, if the point lies outside
    /// the root boundary.
    pub fn insert(&mut self, x: f64, y: f64, data: T) -> bool {
        if !self.nodes[ROOT].boundary.contains(x, y) {
            log::trace!("Ignoring insertion at ({}, {}) outside {}", x, y, self.boundary());
            return false;
        }

        let item = Item::new(Point::new(x, y), data);
        let mut id = ROOT;
        self.nodes[id].subtree_size += 1;

        loop {
            if self.should_split(id) {
                self.split(id);
            }

            let node = &mut self.nodes[id];
            let next = match &mut node.kind {
                NodeKind::Leaf { items } => {
                    items.push(item);
                    return true;
                }
                NodeKind::Branch { children } => children[node.boundary.quadrant_of(x, y)],
            };

            id = next;
            self.nodes[id].subtree_size += 1;
        }
    }

    /// A full leaf splits unless it is already at the maximum depth or its
    /// quadrants would be too small to represent.
    fn should_split(&self, id: NodeId) -> bool {
        let node = &self.nodes[id];
        match &node.kind {
            NodeKind::Leaf { items } => {
                items.len() >= node.capacity
                    && node.depth < self.config.max_depth()
                    && node.boundary.extent() / 2.0 > 0.0
            }
            NodeKind::Branch { .. } => false,
        }
    }

    /// Turns a leaf into a branch with four quadrant children, moving every
    /// stored item into the child that owns its location.
    fn split(&mut self, id: NodeId) {
        let first_child = self.nodes.len();
        let node = &mut self.nodes[id];
        let items = match &mut node.kind {
            NodeKind::Leaf { items } => std::mem::take(items),
            NodeKind::Branch { .. } => return,
        };

        let boundary = node.boundary;
        let capacity = node.capacity;
        let depth = node.depth + 1;
        let children: [NodeId; 4] = std::array::from_fn(|i| first_child + i);
        node.kind = NodeKind::Branch { children };

        let mut buckets: [Vec<Item<T>>; 4] = Default::default();
        for item in items {
            buckets[boundary.quadrant_of(item.x(), item.y())].push(item);
        }

        log::debug!(
            "Splitting node {} at depth {} over {} into nodes {}..{} ({:?} items per quadrant)",
            id,
            depth - 1,
            boundary,
            first_child,
            first_child + 4,
            buckets.iter().map(Vec::len).collect::<Vec<_>>()
        );

        for (quadrant, bucket) in boundary.subdivide().into_iter().zip(buckets) {
            self.nodes
                .push(Node::leaf(quadrant, capacity, depth, Some(id), bucket));
        }
    }

    /// Id of the leaf whose region contains `(x, y)`, or `None` if the point
    /// is outside the tree.
    pub(crate) fn leaf_containing(&self, x: f64, y: f64) -> Option<NodeId> {
        if !self.nodes[ROOT].boundary.contains(x, y) {
            return None;
        }

        let mut id = ROOT;
        while let Some(children) = self.nodes[id].children() {
            id = children[self.nodes[id].boundary.quadrant_of(x, y)];
        }
        Some(id)
    }

    /// Collects statistics about the current shape of the tree.
    pub fn stats(&self) -> QuadTreeStats {
        let mut stats = QuadTreeStats {
            total_items: self.len(),
            node_count: self.nodes.len(),
            ..QuadTreeStats::default()
        };

        for node in &self.nodes {
            stats.max_depth = stats.max_depth.max(node.depth);
            match &node.kind {
                NodeKind::Leaf { items } => {
                    stats.leaf_count += 1;
                    stats.max_leaf_items = stats.max_leaf_items.max(items.len());
                }
                NodeKind::Branch { .. } => stats.branch_count += 1,
            }
        }
        stats
    }
}

//! Arena nodes and read-only node views.

use super::quadtree_impl::QuadTree;
use super::quadtree_types::{Item, NodeId};
use crate::bounding_square::BoundingSquare;

/// Contents of a node: either stored items or exactly four children.
#[derive(Debug)]
pub(crate) enum NodeKind<T> {
    Leaf { items: Vec<Item<T>> },
    Branch { children: [NodeId; 4] },
}

/// A node in the tree's arena.
///
/// Children are owned through the arena slots listed in `kind`; `parent`
/// only points back for upward navigation.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) boundary: BoundingSquare,
    pub(crate) capacity: usize,
    pub(crate) depth: u32,
    pub(crate) parent: Option<NodeId>,
    /// Items stored in this node and all of its descendants
    pub(crate) subtree_size: usize,
    pub(crate) kind: NodeKind<T>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(
        boundary: BoundingSquare,
        capacity: usize,
        depth: u32,
        parent: Option<NodeId>,
        items: Vec<Item<T>>,
    ) -> Self {
        Node {
            boundary,
            capacity,
            depth,
            parent,
            subtree_size: items.len(),
            kind: NodeKind::Leaf { items },
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Items held directly by this node; always empty for a branch.
    pub(crate) fn items(&self) -> &[Item<T>] {
        match &self.kind {
            NodeKind::Leaf { items } => items,
            NodeKind::Branch { .. } => &[],
        }
    }

    pub(crate) fn children(&self) -> Option<[NodeId; 4]> {
        match &self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Branch { children } => Some(*children),
        }
    }
}

/// Read-only view of a single node of a [`QuadTree`].
///
/// # Examples
///
/// ```rust
/// use quadtree::QuadTree;
///
/// let mut tree = QuadTree::new(50.0, 50.0, 100.0);
/// for y in 0..10 {
///     tree.insert(51.0, y as f64, y);
/// }
///
/// let root = tree.root();
/// assert!(root.is_branch());
/// assert_eq!(root.len(), 10);
/// assert!(root.items().is_empty());
/// ```
pub struct NodeRef<'a, T> {
    tree: &'a QuadTree<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> std::fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = self.node();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("boundary", &node.boundary)
            .field("depth", &node.depth)
            .field("leaf", &node.is_leaf())
            .field("len", &node.subtree_size)
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a QuadTree<T>, id: NodeId) -> Self {
        NodeRef { tree, id }
    }

    fn node(&self) -> &'a Node<T> {
        self.tree.node_at(self.id)
    }

    /// Identifier of this node within its tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Region this node is responsible for.
    pub fn boundary(&self) -> &'a BoundingSquare {
        &self.node().boundary
    }

    /// Split threshold currently in effect for this node.
    pub fn capacity(&self) -> usize {
        self.node().capacity
    }

    /// Distance from the root, which is at depth 0.
    pub fn depth(&self) -> u32 {
        self.node().depth
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// The enclosing node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    /// The four quadrant children in subdivision order, or `None` for a leaf.
    pub fn children(&self) -> Option<[NodeRef<'a, T>; 4]> {
        self.node()
            .children()
            .map(|ids| ids.map(|id| NodeRef::new(self.tree, id)))
    }

    /// Items stored directly in this node.
    pub fn items(&self) -> &'a [Item<T>] {
        self.node().items()
    }

    /// Number of items stored in this node and all of its descendants.
    pub fn len(&self) -> usize {
        self.node().subtree_size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Range and nearest-neighbor queries.

use std::cmp::Ordering;
use std::convert::Infallible;

use super::node::NodeKind;
use super::quadtree_constants::ROOT;
use super::quadtree_impl::QuadTree;
use super::quadtree_types::{Item, NodeId};
use crate::bounding_circle::BoundingCircle;
use crate::bounding_square::BoundingSquare;

/// Sorts items by ascending squared distance to `(x, y)`.
///
/// The sort is stable, so items at equal distance keep their relative
/// order.
pub(crate) fn sort_by_distance<T>(items: &mut [&Item<T>], x: f64, y: f64) {
    items.sort_by(|a, b| {
        a.distance_squared_to(x, y)
            .partial_cmp(&b.distance_squared_to(x, y))
            .unwrap_or(Ordering::Equal)
    });
}

fn into_ok<V>(result: Result<V, Infallible>) -> V {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<T> QuadTree<T> {
    /// Finds every item located inside `query`.
    ///
    /// The result is in no particular order.
    pub fn find_within_square(&self, query: &BoundingSquare) -> Vec<&Item<T>> {
        let mut results = Vec::new();
        into_ok(self.visit_within_square(query, |item| {
            results.push(item);
            Ok(())
        }));
        results
    }

    /// Finds every item strictly inside `query`, nearest to the circle's
    /// center first.
    pub fn find_within_circle(&self, query: &BoundingCircle) -> Vec<&Item<T>> {
        let mut results = self.collect_within_circle(query);
        sort_by_distance(&mut results, query.center_x(), query.center_y());
        results
    }

    /// Applies `visitor` to every item inside `query`, stopping at and
    /// returning the first error it produces.
    ///
    /// Items are visited in tree order, not by distance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadtree::{BoundingSquare, QuadTree};
    ///
    /// let mut tree = QuadTree::new(0.0, 0.0, 100.0);
    /// tree.insert(1.0, 1.0, 10);
    /// tree.insert(2.0, 2.0, -1);
    ///
    /// let result = tree.visit_within_square(&BoundingSquare::new(0.0, 0.0, 10.0), |item| {
    ///     if *item.data() < 0 {
    ///         return Err(format!("negative payload at {}", item.point()));
    ///     }
    ///     Ok(())
    /// });
    /// assert_eq!(result, Err("negative payload at (2, 2)".to_string()));
    /// ```
    pub fn visit_within_square<'a, E, F>(&'a self, query: &BoundingSquare, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&'a Item<T>) -> Result<(), E>,
    {
        self.search_square_recursive(ROOT, query, &mut visitor)
    }

    /// Applies `visitor` to every item strictly inside `query`, stopping at
    /// and returning the first error it produces.
    ///
    /// Items are visited in tree order, not by distance.
    pub fn visit_within_circle<'a, E, F>(&'a self, query: &BoundingCircle, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&'a Item<T>) -> Result<(), E>,
    {
        self.search_circle_recursive(ROOT, query, &mut visitor)
    }

    /// Finds up to `count` items nearest to `(x, y)`, nearest first.
    ///
    /// Returns an empty list if `(x, y)` lies outside the tree, and fewer
    /// than `count` items if the tree does not hold that many.
    ///
    /// The search starts at the leaf containing the point and issues circle
    /// queries that cover successively larger ancestors until enough
    /// candidates have been found. Any item outside a circle is farther
    /// away than every item inside it, so once a circle yields `count`
    /// items the nearest `count` are among them.
    pub fn find_nearest(&self, x: f64, y: f64, count: usize) -> Vec<&Item<T>> {
        if count == 0 {
            return Vec::new();
        }
        let Some(leaf) = self.leaf_containing(x, y) else {
            return Vec::new();
        };

        let mut results = self.expanding_search(leaf, x, y, count);
        sort_by_distance(&mut results, x, y);
        results.truncate(count);
        results
    }

    /// Grows the search region from `anchor` towards the root until at
    /// least `count` candidates are found. The root itself is never
    /// circle-searched; reaching it yields every stored item.
    fn expanding_search(&self, mut anchor: NodeId, x: f64, y: f64, count: usize) -> Vec<&Item<T>> {
        if self.len() <= count {
            return self.iter().collect();
        }

        loop {
            let node = self.node_at(anchor);
            let Some(parent) = node.parent else {
                log::trace!("Nearest search at ({}, {}) reached the root", x, y);
                return self.iter().collect();
            };

            let radius = node.boundary.max_distance_squared_to(x, y).sqrt();
            let candidates = self.collect_within_circle(&BoundingCircle::new(x, y, radius));
            log::trace!(
                "Nearest search at ({}, {}) from node {} at depth {}: radius {} found {} of {}",
                x,
                y,
                anchor,
                node.depth,
                radius,
                candidates.len(),
                count
            );

            if candidates.len() >= count {
                return candidates;
            }
            anchor = parent;
        }
    }

    fn collect_within_circle(&self, query: &BoundingCircle) -> Vec<&Item<T>> {
        let mut results = Vec::new();
        into_ok(self.visit_within_circle(query, |item| {
            results.push(item);
            Ok(())
        }));
        results
    }

    /// Recursive square search. Only descends into nodes whose boundary
    /// intersects the query.
    fn search_square_recursive<'a, E, F>(
        &'a self,
        id: NodeId,
        query: &BoundingSquare,
        visitor: &mut F,
    ) -> Result<(), E>
    where
        F: FnMut(&'a Item<T>) -> Result<(), E>,
    {
        let node = self.node_at(id);
        if !node.boundary.intersects(query) {
            return Ok(());
        }

        match &node.kind {
            NodeKind::Leaf { items } => {
                for item in items {
                    if query.contains(item.x(), item.y()) {
                        visitor(item)?;
                    }
                }
            }
            NodeKind::Branch { children } => {
                for &child in children {
                    self.search_square_recursive(child, query, visitor)?;
                }
            }
        }
        Ok(())
    }

    /// Recursive circle search, pruning with the circle/square test.
    fn search_circle_recursive<'a, E, F>(
        &'a self,
        id: NodeId,
        query: &BoundingCircle,
        visitor: &mut F,
    ) -> Result<(), E>
    where
        F: FnMut(&'a Item<T>) -> Result<(), E>,
    {
        let node = self.node_at(id);
        if !query.intersects_square(&node.boundary) {
            return Ok(());
        }

        match &node.kind {
            NodeKind::Leaf { items } => {
                for item in items {
                    if query.contains(item.x(), item.y()) {
                        visitor(item)?;
                    }
                }
            }
            NodeKind::Branch { children } => {
                for &child in children {
                    self.search_circle_recursive(child, query, visitor)?;
                }
            }
        }
        Ok(())
    }
}

//! Integration tests for the shape of the tree after many insertions.

use quadtree::{NodeRef, QuadTree, QuadTreeError, SpatialIndex, DEFAULT_MAX_DEPTH};
use quadtree_int_test::test_util::{
    clustered_points, create_random_context, create_test_context, random_points, run_test,
    sorted_ids, test_boundary,
};

/// Walks the subtree and checks containment, subtree sizes and the
/// quadrant layout. Returns the number of items found.
///
/// With `max_depth` set, leaves above that depth must also be within
/// their capacity.
fn check_subtree(node: NodeRef<'_, usize>, max_depth: Option<u32>) -> usize {
    match node.children() {
        None => {
            for item in node.items() {
                assert!(
                    node.boundary().contains(item.x(), item.y()),
                    "({}, {}) stored outside {}",
                    item.x(),
                    item.y(),
                    node.boundary()
                );
            }
            if max_depth.is_some_and(|depth| node.depth() < depth) {
                assert!(
                    node.items().len() <= node.capacity(),
                    "leaf {} over capacity",
                    node.id()
                );
            }
            assert_eq!(node.len(), node.items().len());
            node.items().len()
        }
        Some(children) => {
            assert!(node.items().is_empty(), "branch {} holds items", node.id());
            let quadrants = node.boundary().subdivide();
            let mut total = 0;
            for (child, quadrant) in children.into_iter().zip(quadrants.iter()) {
                assert_eq!(child.boundary(), quadrant);
                assert_eq!(child.depth(), node.depth() + 1);
                assert_eq!(child.parent().map(|p| p.id()), Some(node.id()));
                total += check_subtree(child, max_depth);
            }
            assert_eq!(node.len(), total, "subtree size of node {}", node.id());
            total
        }
    }
}

#[test]
fn test_uniform_tree_shape() {
    for capacity in [1, 2, 8, 64] {
        run_test(
            || create_random_context(41, 5000, capacity),
            |ctx| {
                let tree = ctx.tree();
                assert_eq!(tree.len(), 5000);
                assert_eq!(check_subtree(tree.root(), Some(DEFAULT_MAX_DEPTH)), 5000);

                let stats = tree.stats();
                assert_eq!(stats.total_items, 5000);
                assert_eq!(stats.node_count, stats.leaf_count + stats.branch_count);
                assert_eq!(stats.node_count, 1 + 4 * stats.branch_count);
                assert!(stats.max_leaf_items <= capacity);
                Ok(())
            },
        );
    }
}

#[test]
fn test_clustered_tree_shape() {
    run_test(
        || create_test_context(42, &clustered_points(42, 4000), 4),
        |ctx| {
            assert_eq!(check_subtree(ctx.tree().root(), Some(DEFAULT_MAX_DEPTH)), 4000);
            assert_eq!(ctx.tree().iter().count(), 4000);
            Ok(())
        },
    );
}

#[test]
fn test_iter_yields_every_item() {
    run_test(
        || create_random_context(43, 1000, 4),
        |ctx| {
            let all: Vec<_> = ctx.tree().iter().collect();
            assert_eq!(sorted_ids(&all), (0..1000).collect::<Vec<_>>());
            Ok(())
        },
    );
}

#[test]
fn test_capacity_changes_between_insertions() {
    run_test(
        || create_random_context(44, 500, 16),
        |mut ctx| {
            let before = ctx.tree().stats();
            ctx.tree_mut().set_capacity(2)?;
            assert_eq!(ctx.tree().stats(), before, "capacity change alone reshaped the tree");

            for (x, y) in random_points(45, 500) {
                ctx.insert(x, y);
            }
            assert_eq!(ctx.tree().len(), 1000);
            assert_eq!(ctx.tree().len(), ctx.reference().size());
            assert!(ctx.tree().stats().node_count > before.node_count);
            // Leaves filled before the change may still exceed the new capacity
            assert_eq!(check_subtree(ctx.tree().root(), None), 1000);

            assert_eq!(
                ctx.tree_mut().set_capacity(0),
                Err(QuadTreeError::InvalidCapacity(0))
            );
            Ok(())
        },
    );
}

#[test]
fn test_out_of_bounds_insertions_are_ignored() {
    run_test(
        || create_random_context(46, 100, 4),
        |mut ctx| {
            let boundary = test_boundary();
            assert!(!ctx.insert(boundary.max_x(), 10.0));
            assert!(!ctx.insert(10.0, boundary.max_y()));
            assert!(!ctx.insert(-0.001, 10.0));
            assert!(ctx.insert(boundary.min_x(), boundary.min_y()));
            assert_eq!(ctx.tree().len(), 101);
            Ok(())
        },
    );
}

#[test]
fn test_identical_points_respect_max_depth() {
    let mut tree: QuadTree<usize> = QuadTree::builder()
        .boundary(test_boundary())
        .capacity(3)
        .max_depth(6)
        .build()
        .unwrap();

    for i in 0..200 {
        assert!(tree.insert(123.0, 456.0, i));
    }

    let stats = tree.stats();
    assert_eq!(stats.max_depth, 6);
    assert_eq!(stats.max_leaf_items, 200);
    assert_eq!(check_subtree(tree.root(), Some(6)), 200);

    let nearest = tree.find_nearest(123.0, 456.0, 5);
    assert_eq!(nearest.len(), 5);
    assert!(nearest.iter().all(|item| item.distance_squared_to(123.0, 456.0) == 0.0));
}

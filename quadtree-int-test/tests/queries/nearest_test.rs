//! Integration tests for nearest-neighbor search.

use quadtree::SpatialIndex;
use quadtree_int_test::test_util::{
    assert_sorted_by_distance, clustered_points, create_random_context, create_test_context,
    distances, random_points, run_test, SIDE,
};

#[test]
fn test_nearest_matches_linear_scan() {
    for capacity in [1, 4, 8, 32] {
        run_test(
            || create_random_context(21, 2000, capacity),
            |ctx| {
                for (x, y) in random_points(22, 50) {
                    for count in [1, 2, 5, 17, 100] {
                        let expected = ctx.reference().find_nearest(x, y, count);
                        let actual = ctx.tree().find_nearest(x, y, count);
                        assert_eq!(actual.len(), count);
                        assert_eq!(
                            distances(&actual, x, y),
                            distances(&expected, x, y),
                            "nearest {} to ({}, {}) differ at capacity {}",
                            count,
                            x,
                            y,
                            capacity
                        );
                    }
                }
                Ok(())
            },
        );
    }
}

#[test]
fn test_nearest_far_from_clusters() {
    run_test(
        || create_test_context(23, &clustered_points(23, 2000), 4),
        |ctx| {
            // Corners and edges are usually far from every cluster
            let probes = [
                (0.0, 0.0),
                (SIDE - 1.0, 0.0),
                (0.0, SIDE - 1.0),
                (SIDE - 1.0, SIDE - 1.0),
                (SIDE / 2.0, 0.0),
            ];
            for (x, y) in probes {
                for count in [1, 3, 50, 600] {
                    let expected = ctx.reference().find_nearest(x, y, count);
                    let actual = ctx.tree().find_nearest(x, y, count);
                    assert_eq!(distances(&actual, x, y), distances(&expected, x, y));
                }
            }
            Ok(())
        },
    );
}

#[test]
fn test_nearest_returns_everything_when_count_exceeds_size() {
    run_test(
        || create_random_context(24, 30, 2),
        |ctx| {
            let results = ctx.tree().find_nearest(250.0, 750.0, 100);
            assert_eq!(results.len(), 30);
            assert_sorted_by_distance(&results, 250.0, 750.0);
            Ok(())
        },
    );
}

#[test]
fn test_nearest_every_count() {
    run_test(
        || create_random_context(25, 200, 3),
        |ctx| {
            let (x, y) = (613.0, 287.0);
            let everything = ctx.reference().find_nearest(x, y, ctx.reference().size());
            for count in 1..=ctx.tree().len() {
                let actual = ctx.tree().find_nearest(x, y, count);
                assert_eq!(actual.len(), count);
                assert_eq!(distances(&actual, x, y), distances(&everything[..count], x, y));
            }
            Ok(())
        },
    );
}

#[test]
fn test_nearest_on_stored_points() {
    run_test(
        || create_random_context(26, 500, 4),
        |ctx| {
            for (x, y) in random_points(26, 20) {
                let nearest = ctx.tree().find_nearest(x, y, 1);
                assert_eq!(nearest.len(), 1);
                assert_eq!(nearest[0].distance_squared_to(x, y), 0.0);
            }
            Ok(())
        },
    );
}

#[test]
fn test_nearest_outside_and_zero_count() {
    run_test(
        || create_random_context(27, 100, 4),
        |ctx| {
            assert!(ctx.tree().find_nearest(-1.0, 500.0, 5).is_empty());
            assert!(ctx.tree().find_nearest(500.0, SIDE, 5).is_empty());
            assert!(ctx.tree().find_nearest(500.0, 500.0, 0).is_empty());
            Ok(())
        },
    );
}

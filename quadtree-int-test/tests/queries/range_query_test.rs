//! Integration tests for square and circle range queries.

use quadtree::{BoundingCircle, BoundingSquare, SpatialIndex};
use quadtree_int_test::test_util::{
    assert_sorted_by_distance, clustered_points, create_random_context, create_test_context,
    random_points, run_test, sorted_ids, SIDE,
};

fn square_queries() -> Vec<BoundingSquare> {
    let mut queries = Vec::new();
    for (i, &(x, y)) in random_points(99, 40).iter().enumerate() {
        queries.push(BoundingSquare::new(x, y, 5.0 + (i * 13 % 200) as f64));
    }
    // Whole region, beyond it, and partially outside
    queries.push(BoundingSquare::new(SIDE / 2.0, SIDE / 2.0, SIDE));
    queries.push(BoundingSquare::new(SIDE / 2.0, SIDE / 2.0, SIDE * 4.0));
    queries.push(BoundingSquare::new(0.0, 0.0, 300.0));
    queries.push(BoundingSquare::new(-500.0, -500.0, 10.0));
    queries
}

fn circle_queries() -> Vec<BoundingCircle> {
    let mut queries = Vec::new();
    for (i, &(x, y)) in random_points(101, 40).iter().enumerate() {
        queries.push(BoundingCircle::new(x, y, 2.0 + (i * 7 % 150) as f64));
    }
    queries.push(BoundingCircle::new(SIDE / 2.0, SIDE / 2.0, SIDE));
    queries.push(BoundingCircle::new(SIDE, SIDE, 120.0));
    queries.push(BoundingCircle::new(-50.0, 500.0, 60.0));
    queries
}

#[test]
fn test_square_queries_match_linear_scan() {
    for capacity in [1, 4, 8, 32] {
        run_test(
            || create_random_context(1, 2000, capacity),
            |ctx| {
                for query in square_queries() {
                    let expected = sorted_ids(&ctx.reference().find_within_square(&query));
                    let actual = sorted_ids(&ctx.tree().find_within_square(&query));
                    assert_eq!(actual, expected, "mismatch for {} at capacity {}", query, capacity);
                }
                Ok(())
            },
        );
    }
}

#[test]
fn test_circle_queries_match_linear_scan() {
    for capacity in [1, 4, 8, 32] {
        run_test(
            || create_random_context(2, 2000, capacity),
            |ctx| {
                for query in circle_queries() {
                    let expected = sorted_ids(&ctx.reference().find_within_circle(&query));
                    let results = ctx.tree().find_within_circle(&query);
                    assert_eq!(sorted_ids(&results), expected, "mismatch for {}", query);
                    assert_sorted_by_distance(&results, query.center_x(), query.center_y());
                }
                Ok(())
            },
        );
    }
}

#[test]
fn test_range_queries_on_clustered_points() {
    run_test(
        || create_test_context(3, &clustered_points(3, 3000), 4),
        |ctx| {
            assert!(ctx.tree().stats().max_depth > 5);
            for (x, y) in random_points(4, 50) {
                let square = BoundingSquare::new(x, y, 50.0);
                assert_eq!(
                    sorted_ids(&ctx.tree().find_within_square(&square)),
                    sorted_ids(&ctx.reference().find_within_square(&square))
                );

                let circle = BoundingCircle::new(x, y, 25.0);
                assert_eq!(
                    sorted_ids(&ctx.tree().find_within_circle(&circle)),
                    sorted_ids(&ctx.reference().find_within_circle(&circle))
                );
            }
            Ok(())
        },
    );
}

#[test]
fn test_grid_points_on_query_edges() {
    let points: Vec<(f64, f64)> = (0..100)
        .flat_map(|y| (0..100).map(move |x| ((x * 10) as f64, (y * 10) as f64)))
        .collect();

    run_test(
        || create_test_context(5, &points, 8),
        |ctx| {
            assert_eq!(ctx.tree().len(), 10_000);

            // Edges fall exactly on grid lines
            let square = BoundingSquare::new(500.0, 500.0, 100.0);
            let results = ctx.tree().find_within_square(&square);
            assert_eq!(results.len(), 100);
            assert_eq!(
                sorted_ids(&results),
                sorted_ids(&ctx.reference().find_within_square(&square))
            );

            // The circle passes exactly through four grid points
            let circle = BoundingCircle::new(500.0, 500.0, 50.0);
            let results = ctx.tree().find_within_circle(&circle);
            assert_eq!(
                sorted_ids(&results),
                sorted_ids(&ctx.reference().find_within_circle(&circle))
            );
            assert!(results.iter().all(|item| item.distance_squared_to(500.0, 500.0) < 2500.0));
            Ok(())
        },
    );
}

#[test]
fn test_visitor_sees_every_match_once() {
    run_test(
        || create_random_context(6, 1500, 4),
        |mut ctx| {
            for (x, y) in random_points(7, 20) {
                ctx.insert(x, y);
            }

            let query = BoundingSquare::new(400.0, 600.0, 300.0);
            let mut visited = Vec::new();
            let outcome: Result<(), String> = ctx.tree().visit_within_square(&query, |item| {
                visited.push(*item.data());
                Ok(())
            });
            assert!(outcome.is_ok());

            let mut sorted = visited.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), visited.len(), "an item was visited twice");
            assert_eq!(sorted, sorted_ids(&ctx.reference().find_within_square(&query)));
            Ok(())
        },
    );
}

#[test]
fn test_visitor_error_stops_circle_query() {
    run_test(
        || create_random_context(8, 1000, 4),
        |ctx| {
            let query = BoundingCircle::new(500.0, 500.0, 400.0);
            let total = ctx.reference().find_within_circle(&query).len();
            assert!(total > 10);

            let mut visited = 0;
            let outcome = ctx.tree().visit_within_circle(&query, |item| {
                visited += 1;
                if visited == 10 {
                    return Err(*item.data());
                }
                Ok(())
            });

            assert!(outcome.is_err());
            assert_eq!(visited, 10);
            Ok(())
        },
    );
}

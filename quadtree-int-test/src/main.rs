use quadtree::{BoundingCircle, BoundingSquare, QuadTreeResult};
use quadtree_int_test::test_util::{clustered_points, create_random_context, create_test_context};
use std::time::Instant;

const POINTS: usize = 200_000;
const QUERIES: usize = 1_000;

fn main() -> QuadTreeResult<()> {
    colog::init();
    log::info!("Starting stress test...");

    let start = Instant::now();
    let ctx = create_random_context(7, POINTS, 16)?;
    log::info!("Inserted {} uniform points in {:?}", POINTS, start.elapsed());
    log::info!("Tree shape: {:?}", ctx.tree().stats());

    let start = Instant::now();
    let mut found = 0;
    for i in 0..QUERIES {
        let x = (i * 37 % 1000) as f64;
        let y = (i * 91 % 1000) as f64;
        found += ctx.tree().find_within_square(&BoundingSquare::new(x, y, 20.0)).len();
        found += ctx.tree().find_within_circle(&BoundingCircle::new(x, y, 10.0)).len();
        found += ctx.tree().find_nearest(x, y, 10).len();
    }
    log::info!(
        "Ran {} query rounds in {:?} ({} items returned)",
        QUERIES,
        start.elapsed(),
        found
    );

    let start = Instant::now();
    let ctx = create_test_context(11, &clustered_points(11, POINTS), 16)?;
    log::info!("Inserted {} clustered points in {:?}", POINTS, start.elapsed());
    log::info!("Tree shape: {:?}", ctx.tree().stats());

    log::info!("Stress test completed");
    Ok(())
}

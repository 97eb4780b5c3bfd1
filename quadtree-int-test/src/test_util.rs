use quadtree::{BoundingCircle, BoundingSquare, Item, Point, QuadTree, QuadTreeResult, SpatialIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::time::Instant;

/// Side length of the region every test context covers.
pub const SIDE: f64 = 1000.0;

/// Brute-force index that scans every item on each query.
///
/// Serves as the reference the quadtree's answers are checked against.
#[derive(Debug)]
pub struct LinearIndex<T> {
    boundary: BoundingSquare,
    items: Vec<Item<T>>,
}

impl<T> LinearIndex<T> {
    pub fn new(boundary: BoundingSquare) -> Self {
        LinearIndex {
            boundary,
            items: Vec::new(),
        }
    }
}

impl<T> SpatialIndex<T> for LinearIndex<T> {
    fn insert(&mut self, x: f64, y: f64, data: T) -> bool {
        if !self.boundary.contains(x, y) {
            return false;
        }
        self.items.push(Item::new(Point::new(x, y), data));
        true
    }

    fn find_within_square(&self, query: &BoundingSquare) -> Vec<&Item<T>> {
        self.items
            .iter()
            .filter(|item| query.contains(item.x(), item.y()))
            .collect()
    }

    fn find_within_circle(&self, query: &BoundingCircle) -> Vec<&Item<T>> {
        let mut results: Vec<&Item<T>> = self
            .items
            .iter()
            .filter(|item| query.contains(item.x(), item.y()))
            .collect();
        sort_by_distance(&mut results, query.center_x(), query.center_y());
        results
    }

    fn find_nearest(&self, x: f64, y: f64, count: usize) -> Vec<&Item<T>> {
        if !self.boundary.contains(x, y) {
            return Vec::new();
        }
        let mut results: Vec<&Item<T>> = self.items.iter().collect();
        sort_by_distance(&mut results, x, y);
        results.truncate(count);
        results
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

pub fn sort_by_distance<T>(items: &mut [&Item<T>], x: f64, y: f64) {
    items.sort_by(|a, b| {
        a.distance_squared_to(x, y)
            .partial_cmp(&b.distance_squared_to(x, y))
            .unwrap_or(Ordering::Equal)
    });
}

/// A quadtree and a brute-force reference holding the same items.
///
/// Each item's payload is its insertion index.
pub struct TestContext {
    seed: u64,
    tree: QuadTree<usize>,
    reference: LinearIndex<usize>,
}

impl TestContext {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tree(&self) -> &QuadTree<usize> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut QuadTree<usize> {
        &mut self.tree
    }

    pub fn reference(&self) -> &LinearIndex<usize> {
        &self.reference
    }

    /// Inserts the point into both indexes and checks they agree on
    /// whether it was accepted.
    pub fn insert(&mut self, x: f64, y: f64) -> bool {
        let data = self.reference.size();
        let accepted = self.tree.insert(x, y, data);
        assert_eq!(
            accepted,
            self.reference.insert(x, y, data),
            "indexes disagree on accepting ({}, {})",
            x,
            y
        );
        accepted
    }
}

/// Root region shared by every test context.
pub fn test_boundary() -> BoundingSquare {
    BoundingSquare::from_corner(0.0, 0.0, SIDE)
}

/// Uniformly distributed points inside the test boundary.
pub fn random_points(seed: u64, count: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.random_range(0.0..SIDE), rng.random_range(0.0..SIDE)))
        .collect()
}

/// Points packed around a few centers, which drives parts of the tree
/// much deeper than a uniform distribution does.
pub fn clustered_points(seed: u64, count: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let centers: Vec<(f64, f64)> = (0..4)
        .map(|_| (rng.random_range(100.0..900.0), rng.random_range(100.0..900.0)))
        .collect();

    (0..count)
        .map(|i| {
            let (cx, cy) = centers[i % centers.len()];
            (cx + rng.random_range(-5.0..5.0), cy + rng.random_range(-5.0..5.0))
        })
        .collect()
}

/// Creates a context holding `points`, using the given leaf capacity.
pub fn create_test_context(
    seed: u64,
    points: &[(f64, f64)],
    capacity: usize,
) -> QuadTreeResult<TestContext> {
    let boundary = test_boundary();
    let tree = QuadTree::builder()
        .boundary(boundary)
        .capacity(capacity)
        .build()?;

    let mut ctx = TestContext {
        seed,
        tree,
        reference: LinearIndex::new(boundary),
    };
    for &(x, y) in points {
        ctx.insert(x, y);
    }
    log::debug!(
        "Created test context with seed {}: {:?}",
        seed,
        ctx.tree.stats()
    );
    Ok(ctx)
}

/// Creates a context of uniformly distributed points.
pub fn create_random_context(seed: u64, count: usize, capacity: usize) -> QuadTreeResult<TestContext> {
    create_test_context(seed, &random_points(seed, count), capacity)
}

/// Runs a test against a freshly created context and logs how long it took.
pub fn run_test<B, T>(before: B, test: T)
where
    B: FnOnce() -> QuadTreeResult<TestContext>,
    T: FnOnce(TestContext) -> QuadTreeResult<()>,
{
    let start_time = Instant::now();
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {}", e),
    };
    let seed = ctx.seed();

    if let Err(e) = test(ctx) {
        panic!("Test failed with seed {}: {}", seed, e);
    }
    log::debug!("Test with seed {} passed in {:?}", seed, start_time.elapsed());
}

/// Payloads of `items`, sorted so result sets can be compared.
pub fn sorted_ids(items: &[&Item<usize>]) -> Vec<usize> {
    let mut ids: Vec<usize> = items.iter().map(|item| *item.data()).collect();
    ids.sort_unstable();
    ids
}

/// Squared distances of `items` to `(x, y)`, in result order.
pub fn distances(items: &[&Item<usize>], x: f64, y: f64) -> Vec<f64> {
    items.iter().map(|item| item.distance_squared_to(x, y)).collect()
}

pub fn assert_sorted_by_distance(items: &[&Item<usize>], x: f64, y: f64) {
    let distances = distances(items, x, y);
    for pair in distances.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "results not ordered by distance to ({}, {}): {:?}",
            x,
            y,
            distances
        );
    }
}

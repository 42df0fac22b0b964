#![allow(dead_code)]

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_bnb::SearchOutcome;
use tsp_core::{tour_cost, DistanceMatrix, DistanceOracle, Point, PointSet};

pub const EPS: f64 = 1e-9;

pub fn unit_square() -> PointSet {
    PointSet::euclidean(vec![
        Point::new("a", 0.0, 0.0),
        Point::new("b", 0.0, 1.0),
        Point::new("c", 1.0, 1.0),
        Point::new("d", 1.0, 0.0),
    ])
}

pub fn triangle() -> DistanceMatrix {
    DistanceMatrix::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![
            vec![0.0, 1.0, 3.0],
            vec![1.0, 0.0, 1.0],
            vec![3.0, 1.0, 0.0],
        ],
    )
    .unwrap()
}

pub fn random_points(seed: u64, n: usize) -> PointSet {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let points = (0..n)
        .map(|i| {
            let x = rng.gen_range(0.0..100.0);
            let y = rng.gen_range(0.0..100.0);
            Point::new(format!("p{i}"), x, y)
        })
        .collect();
    PointSet::euclidean(points)
}

/// Integer weights in `1..=20`, independently per direction.
pub fn random_asymmetric(seed: u64, n: usize) -> DistanceMatrix {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let labels = (0..n).map(|i| format!("n{i}")).collect();
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0.0
                    } else {
                        rng.gen_range(1..=20) as f64
                    }
                })
                .collect()
        })
        .collect();
    DistanceMatrix::new(labels, rows).unwrap()
}

/// Closed, visits every node once, starts at `start`, and its cost matches
/// an independent recomputation from the oracle.
pub fn assert_valid_tour<O: DistanceOracle>(
    oracle: &O,
    outcome: &SearchOutcome<O::Node>,
    start: &O::Node,
) {
    let nodes = oracle.nodes();
    let path = &outcome.tour.path;

    assert_eq!(path.len(), nodes.len() + 1, "path {path:?}");
    assert_eq!(path.first(), Some(start));
    assert_eq!(path.last(), Some(start));

    let distinct: HashSet<_> = path[..path.len() - 1].iter().collect();
    assert_eq!(distinct.len(), nodes.len(), "repeated node in {path:?}");
    assert!(nodes.iter().all(|n| distinct.contains(n)));

    let recomputed = tour_cost(oracle, path);
    assert!(
        (recomputed - outcome.tour.cost).abs() < EPS,
        "reported {} but path costs {recomputed}",
        outcome.tour.cost
    );
}

//! Exhaustive TSP search. Fixes the start node and walks every permutation
//! of the remaining nodes in lexicographic index order, keeping the first
//! strictly cheapest one. `(n - 1)!` tours, so only for small graphs.

use tsp_core::{DistanceOracle, Error, Result, Tour};

pub fn solve<O: DistanceOracle>(oracle: &O, start: Option<&O::Node>) -> Result<Tour<O::Node>> {
    let nodes = oracle.nodes();
    let start_idx = match start {
        Some(label) => nodes.iter().position(|n| n == label).ok_or_else(|| {
            Error::invalid_input(format!("start node {label:?} is not in the graph"))
        })?,
        None => 0,
    };

    match nodes.len() {
        0 => return Ok(Tour::empty()),
        1 => {
            return Ok(Tour {
                path: nodes,
                cost: 0.0,
            })
        }
        _ => {}
    }

    let n = nodes.len();

    // Flattened matrix, same as the search engines read.
    let mut dist_mat = vec![0.0; n * n];
    for (i, from) in nodes.iter().enumerate() {
        for (j, to) in nodes.iter().enumerate() {
            if i != j {
                dist_mat[i * n + j] = oracle.distance(from, to);
            }
        }
    }

    let mut rest: Vec<usize> = (0..n).filter(|&i| i != start_idx).collect();
    let mut best_cost = f64::INFINITY;
    let mut best_order = rest.clone();

    loop {
        let mut cost = 0.0;
        let mut prev = start_idx;
        for &node in &rest {
            cost += dist_mat[prev * n + node];
            prev = node;
        }
        cost += dist_mat[prev * n + start_idx];

        if cost < best_cost {
            best_cost = cost;
            best_order.copy_from_slice(&rest);
        }

        if !next_permutation(&mut rest) {
            break;
        }
    }

    let mut path = Vec::with_capacity(n + 1);
    path.push(nodes[start_idx].clone());
    path.extend(best_order.iter().map(|&idx| nodes[idx].clone()));
    path.push(nodes[start_idx].clone());

    Ok(Tour {
        path,
        cost: best_cost,
    })
}

/// Rearranges `items` into the next lexicographic permutation. Returns
/// `false` (leaving `items` sorted ascending) after the last one.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let Some(pivot) = (0..items.len() - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        items.reverse();
        return false;
    };

    let Some(successor) = (pivot + 1..items.len()).rev().find(|&j| items[j] > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::{Point, PointSet};

    #[test]
    fn permutations_cover_all_orders() {
        let mut items = vec![0, 1, 2, 3];
        let mut count = 1;
        while next_permutation(&mut items) {
            count += 1;
        }
        assert_eq!(count, 24);
        assert_eq!(items, vec![0, 1, 2, 3]);
    }

    #[test]
    fn unit_square_perimeter() {
        let set = PointSet::euclidean(vec![
            Point::new("a", 0.0, 0.0),
            Point::new("b", 0.0, 1.0),
            Point::new("c", 1.0, 1.0),
            Point::new("d", 1.0, 0.0),
        ]);

        let tour = solve(&set, None).unwrap();
        assert!((tour.cost - 4.0).abs() < 1e-9);
        assert_eq!(tour.path, vec!["a", "b", "c", "d", "a"]);
    }

    #[test]
    fn rejects_foreign_start() {
        let set = PointSet::euclidean(vec![Point::new("a", 0.0, 0.0)]);
        assert!(solve(&set, Some(&"x".to_string())).is_err());
    }
}

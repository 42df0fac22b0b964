use std::collections::HashSet;

use tsp_core::{DistanceOracle, Error, Result};

use crate::bound::BoundEstimator;

/// Everything the engines need, built once per search invocation.
pub struct SearchContext<N> {
    pub labels: Vec<N>,
    pub num_nodes: usize,
    pub start: usize,

    // Flattened matrix for cache locality
    pub dist_mat: Vec<f64>,

    pub bounds: BoundEstimator,
}

impl<N> SearchContext<N> {
    #[inline(always)]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.dist_mat[from * self.num_nodes + to]
    }
}

impl<N> SearchContext<N>
where
    N: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    /// Validates the graph and the start node, then queries the oracle for
    /// all `n * (n - 1)` ordered pairs.
    pub fn new<O>(oracle: &O, start: Option<&N>) -> Result<Self>
    where
        O: DistanceOracle<Node = N> + ?Sized,
    {
        let labels = oracle.nodes();
        let num_nodes = labels.len();

        {
            let mut seen = HashSet::with_capacity(num_nodes);
            for label in &labels {
                if !seen.insert(label) {
                    return Err(Error::invalid_graph(format!("duplicate node {label:?}")));
                }
            }
        }

        let start = match start {
            Some(label) => labels.iter().position(|l| l == label).ok_or_else(|| {
                Error::invalid_input(format!("start node {label:?} is not in the graph"))
            })?,
            None => 0,
        };

        let mut dist_mat = vec![0.0; num_nodes * num_nodes];
        for (i, from) in labels.iter().enumerate() {
            for (j, to) in labels.iter().enumerate() {
                if i == j {
                    continue;
                }
                let value = oracle.distance(from, to);
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::InvalidDistance {
                        from: i,
                        to: j,
                        value,
                    });
                }
                dist_mat[i * num_nodes + j] = value;
            }
        }

        // Every path cost and bound is at most n edges of the largest weight.
        let max_edge = dist_mat.iter().copied().fold(0.0, f64::max);
        if !(max_edge * num_nodes as f64).is_finite() {
            return Err(Error::invalid_graph(format!(
                "{num_nodes} edges of weight {max_edge} overflow the tour cost"
            )));
        }

        let bounds = BoundEstimator::precompute(&dist_mat, num_nodes);

        Ok(Self {
            labels,
            num_nodes,
            start,
            dist_mat,
            bounds,
        })
    }

    /// Labels for an index path, closed by repeating the start label.
    pub fn closed_labels(&self, path: &[usize]) -> Vec<N> {
        let mut labels: Vec<N> = path.iter().map(|&idx| self.labels[idx].clone()).collect();
        if !labels.is_empty() {
            labels.push(self.labels[self.start].clone());
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsp_core::{DistanceMatrix, Point, PointSet};

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_start_and_flattens_distances() {
        let set = PointSet::euclidean(vec![
            Point::new("a", 0.0, 0.0),
            Point::new("b", 3.0, 4.0),
        ]);
        let ctx = SearchContext::new(&set, Some(&"b".to_string())).unwrap();

        assert_eq!(ctx.start, 1);
        assert_eq!(ctx.distance(0, 1), 5.0);
        assert_eq!(ctx.distance(1, 0), 5.0);
        assert_eq!(ctx.closed_labels(&[1, 0]), labels(&["b", "a", "b"]));
    }

    #[test]
    fn rejects_unknown_start() {
        let set = PointSet::euclidean(vec![Point::new("a", 0.0, 0.0)]);
        let err = SearchContext::new(&set, Some(&"q".to_string())).err().unwrap();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_duplicate_labels() {
        let set = PointSet::euclidean(vec![
            Point::new("a", 0.0, 0.0),
            Point::new("a", 1.0, 0.0),
        ]);
        let err = SearchContext::new(&set, None).err().unwrap();
        assert!(matches!(err, Error::InvalidGraph(_)));
    }

    #[test]
    fn rejects_negative_and_nan_distances() {
        let negative = DistanceMatrix::new(
            labels(&["a", "b"]),
            vec![vec![0.0, -1.0], vec![1.0, 0.0]],
        )
        .unwrap();
        let err = SearchContext::new(&negative, None).err().unwrap();
        assert!(matches!(err, Error::InvalidDistance { from: 0, to: 1, .. }));

        let nan = DistanceMatrix::new(
            labels(&["a", "b"]),
            vec![vec![0.0, 1.0], vec![f64::NAN, 0.0]],
        )
        .unwrap();
        let err = SearchContext::new(&nan, None).err().unwrap();
        assert!(matches!(err, Error::InvalidDistance { from: 1, to: 0, .. }));
    }

    #[test]
    fn rejects_weights_whose_tour_sum_overflows() {
        let huge = f64::MAX / 2.0;
        let m = DistanceMatrix::new(
            labels(&["a", "b", "c"]),
            vec![
                vec![0.0, huge, huge],
                vec![huge, 0.0, huge],
                vec![huge, huge, 0.0],
            ],
        )
        .unwrap();
        let err = SearchContext::new(&m, None).err().unwrap();
        assert!(matches!(err, Error::InvalidGraph(_)), "{err}");

        let pair = DistanceMatrix::new(
            labels(&["a", "b"]),
            vec![vec![0.0, huge], vec![huge, 0.0]],
        )
        .unwrap();
        assert!(SearchContext::new(&pair, None).is_ok());
    }

    #[test]
    fn diagonal_is_never_queried() {
        let m = DistanceMatrix::new(
            labels(&["a", "b"]),
            vec![vec![f64::NAN, 2.0], vec![2.0, -9.0]],
        )
        .unwrap();
        assert!(SearchContext::new(&m, None).is_ok());
    }
}

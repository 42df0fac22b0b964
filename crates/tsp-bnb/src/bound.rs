use crate::state::Visited;

/// Lower bound on completing a partial tour: the cost paid so far plus the
/// cheapest outgoing edge of every node not yet visited.
///
/// Each unvisited node still has to be left exactly once by any completion,
/// so with nonnegative distances the estimate never exceeds the true
/// completion cost, symmetric oracle or not.
#[derive(Clone, Debug)]
pub struct BoundEstimator {
    min_edge: Vec<f64>,
}

impl BoundEstimator {
    /// `O(n^2)` over a flattened `n x n` matrix. Nodes without neighbours
    /// (`n < 2`) get an infinite minimum.
    pub fn precompute(dist_mat: &[f64], num_nodes: usize) -> Self {
        let min_edge = (0..num_nodes)
            .map(|i| {
                (0..num_nodes)
                    .filter(|&j| j != i)
                    .map(|j| dist_mat[i * num_nodes + j])
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();

        Self { min_edge }
    }

    #[inline(always)]
    pub fn min_edge(&self, node: usize) -> f64 {
        self.min_edge[node]
    }

    pub fn estimate(&self, cost_so_far: f64, visited: &Visited) -> f64 {
        visited
            .unvisited()
            .fold(cost_so_far, |bound, node| bound + self.min_edge[node])
    }
}

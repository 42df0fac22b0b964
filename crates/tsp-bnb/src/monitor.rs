use serde::Serialize;

/// Hooks into the search loop. Every method defaults to a no-op.
pub trait SearchMonitor {
    /// A state with `bound` and a path of `depth` nodes is being expanded.
    fn on_expand(&mut self, _bound: f64, _depth: usize) {}

    /// A child was discarded because its bound could not beat the incumbent.
    fn on_prune(&mut self, _bound: f64, _depth: usize) {}

    /// The incumbent improved to `cost`.
    fn on_incumbent(&mut self, _cost: f64) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMonitor;

impl SearchMonitor for NoopMonitor {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub expanded: u64,
    pub pruned: u64,
    pub incumbent_updates: u64,
    /// Subtrees skipped by the DFS depth limit.
    pub abandoned_subtrees: u64,
    /// Largest best-first frontier observed.
    pub peak_frontier: usize,
    /// Wall-clock time spent in `solve_with`, in milliseconds.
    pub elapsed_ms: u64,
}

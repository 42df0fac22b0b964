/// Best complete tour seen so far in one search invocation.
#[derive(Clone, Debug)]
pub struct Incumbent {
    best_cost: f64,
    best_path: Vec<usize>,
}

impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}

impl Incumbent {
    pub fn new() -> Self {
        Self {
            best_cost: f64::INFINITY,
            best_path: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn cost(&self) -> f64 {
        self.best_cost
    }

    pub fn path(&self) -> &[usize] {
        &self.best_path
    }

    pub fn is_found(&self) -> bool {
        !self.best_path.is_empty()
    }

    /// Replaces the incumbent iff `cost` is strictly smaller. The path is a
    /// snapshot; later mutation of the caller's buffer does not leak in.
    pub fn offer(&mut self, cost: f64, path: &[usize]) -> bool {
        self.offer_with(cost, || path.to_vec())
    }

    /// Like [`offer`](Self::offer) but only builds the path on improvement.
    pub fn offer_with(&mut self, cost: f64, path: impl FnOnce() -> Vec<usize>) -> bool {
        if cost < self.best_cost {
            self.best_cost = cost;
            self.best_path = path();
            true
        } else {
            false
        }
    }
}

//! Best-first branch and bound.
//!
//! States wait in a min-heap keyed by `(bound, seq)`, where `seq` is the
//! order in which they were generated. Children are generated in ascending
//! index order, so equal bounds pop first-generated-first. Once the smallest
//! bound on the frontier cannot beat the incumbent, nothing left can either
//! and the search stops with a proof of optimality.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{trace, warn};
use tsp_core::{Error, Result};

use crate::cancel::CancelToken;
use crate::context::SearchContext;
use crate::incumbent::Incumbent;
use crate::monitor::{SearchMonitor, SearchStats};
use crate::report::{EngineRun, SearchStatus};
use crate::state::SearchState;

struct FrontierEntry {
    bound: f64,
    seq: u64,
    state: SearchState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // Reversed so the max-heap pops the smallest bound, then the oldest entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .bound
            .total_cmp(&self.bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    limit: Option<usize>,
}

impl Frontier {
    fn new(limit: Option<usize>) -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            limit,
        }
    }

    /// Refuses to grow past the limit instead of dropping entries.
    fn push(&mut self, bound: f64, state: SearchState, best_cost: f64) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.heap.len() >= limit {
                return Err(Error::FrontierExhausted { limit, best_cost });
            }
        }
        self.heap.push(FrontierEntry {
            bound,
            seq: self.next_seq,
            state,
        });
        self.next_seq += 1;
        Ok(())
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

pub fn search<N, M>(
    ctx: &SearchContext<N>,
    max_frontier: Option<usize>,
    cancel: &CancelToken,
    monitor: &mut M,
) -> Result<EngineRun>
where
    M: SearchMonitor + ?Sized,
{
    let n = ctx.num_nodes;
    let start = ctx.start;

    let mut incumbent = Incumbent::new();
    let mut stats = SearchStats::default();
    let mut status = SearchStatus::Optimal;
    let mut frontier = Frontier::new(max_frontier);

    let root = SearchState::initial(n, start);
    let root_bound = ctx.bounds.estimate(root.cost, &root.visited);
    frontier.push(root_bound, root, incumbent.cost())?;
    stats.peak_frontier = frontier.len();

    while let Some(FrontierEntry { bound, state, .. }) = frontier.pop() {
        if cancel.is_cancelled() {
            warn!(
                "best-first cancelled after {} expansions with {} states pending",
                stats.expanded,
                frontier.len() + 1
            );
            status = SearchStatus::Cancelled;
            break;
        }

        // Global stop: the frontier is bound-ordered.
        if bound >= incumbent.cost() {
            trace!(
                "best-first stopped at bound {bound} with {} states pending",
                frontier.len()
            );
            break;
        }

        stats.expanded += 1;
        monitor.on_expand(bound, state.depth());

        if state.is_complete() {
            let total = state.cost + ctx.distance(state.last(), start);
            if incumbent.offer_with(total, || state.trail.to_vec()) {
                stats.incumbent_updates += 1;
                monitor.on_incumbent(total);
                trace!("best-first incumbent improved to {total}");
            }
            continue;
        }

        let last = state.last();
        for next in state.visited.unvisited() {
            let cost = state.cost + ctx.distance(last, next);
            let child = state.child(next, cost);
            let child_bound = ctx.bounds.estimate(cost, &child.visited);

            if child_bound < incumbent.cost() {
                frontier.push(child_bound, child, incumbent.cost())?;
            } else {
                stats.pruned += 1;
                monitor.on_prune(child_bound, child.depth());
            }
        }
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
    }

    Ok(EngineRun {
        incumbent,
        status,
        stats,
    })
}

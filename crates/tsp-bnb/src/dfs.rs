//! Depth-first branch and bound.
//!
//! The recursion lives on an explicit stack of frames, one per node on the
//! current path, so depth is bounded by `max_depth` rather than by the
//! thread's call stack. A single visited set and path buffer are mutated in
//! place and restored on backtrack. Children are tried in ascending index
//! order; among equal-cost optimal tours the first one reached in that order
//! is kept.

use log::{trace, warn};

use crate::cancel::CancelToken;
use crate::context::SearchContext;
use crate::incumbent::Incumbent;
use crate::monitor::{SearchMonitor, SearchStats};
use crate::report::{EngineRun, SearchStatus};
use crate::state::Visited;

struct Frame {
    cost: f64,
    // Next candidate index to try from this frame.
    cursor: usize,
}

pub fn search<N, M>(
    ctx: &SearchContext<N>,
    max_depth: Option<usize>,
    cancel: &CancelToken,
    monitor: &mut M,
) -> EngineRun
where
    M: SearchMonitor + ?Sized,
{
    let n = ctx.num_nodes;
    let start = ctx.start;
    let max_depth = max_depth.unwrap_or(usize::MAX);

    let mut incumbent = Incumbent::new();
    let mut stats = SearchStats::default();
    let mut status = SearchStatus::Optimal;

    let mut visited = Visited::new(n);
    visited.insert(start);
    let mut path = Vec::with_capacity(n);
    path.push(start);
    let mut stack = Vec::with_capacity(n);
    stack.push(Frame {
        cost: 0.0,
        cursor: 0,
    });

    stats.expanded += 1;
    monitor.on_expand(ctx.bounds.estimate(0.0, &visited), 1);

    while let Some(frame) = stack.last_mut() {
        if cancel.is_cancelled() {
            warn!("dfs cancelled after {} expansions", stats.expanded);
            status = SearchStatus::Cancelled;
            break;
        }

        let last = path[path.len() - 1];
        let mut next = None;

        while frame.cursor < n {
            let candidate = frame.cursor;
            frame.cursor += 1;
            if visited.contains(candidate) {
                continue;
            }

            let next_cost = frame.cost + ctx.distance(last, candidate);
            visited.insert(candidate);
            let estimate = ctx.bounds.estimate(next_cost, &visited);

            // Compared against the current incumbent, so siblings see
            // improvements found in earlier subtrees.
            if estimate < incumbent.cost() {
                next = Some((candidate, next_cost, estimate));
                break;
            }

            stats.pruned += 1;
            monitor.on_prune(estimate, path.len() + 1);
            visited.remove(candidate);
        }

        let Some((node, cost, estimate)) = next else {
            // Frame exhausted: backtrack.
            stack.pop();
            if let Some(node) = path.pop() {
                visited.remove(node);
            }
            continue;
        };

        path.push(node);

        if path.len() > max_depth {
            stats.abandoned_subtrees += 1;
            status = SearchStatus::DepthLimited;
            path.pop();
            visited.remove(node);
            continue;
        }

        stats.expanded += 1;
        monitor.on_expand(estimate, path.len());

        if path.len() == n {
            let total = cost + ctx.distance(node, start);
            if incumbent.offer(total, &path) {
                stats.incumbent_updates += 1;
                monitor.on_incumbent(total);
                trace!("dfs incumbent improved to {total}");
            }
            path.pop();
            visited.remove(node);
        } else {
            stack.push(Frame { cost, cursor: 0 });
        }
    }

    if stats.abandoned_subtrees > 0 {
        warn!(
            "dfs abandoned {} subtrees at depth limit {max_depth}; best cost so far {}",
            stats.abandoned_subtrees,
            incumbent.cost()
        );
    }

    EngineRun {
        incumbent,
        status,
        stats,
    }
}

#![deny(clippy::all)]

//! Exact TSP by branch and bound.
//!
//! ```
//! use tsp_bnb::solve;
//! use tsp_core::{Point, PointSet, SolverConfig, Strategy};
//!
//! let square = PointSet::euclidean(vec![
//!     Point::new("a", 0.0, 0.0),
//!     Point::new("b", 0.0, 1.0),
//!     Point::new("c", 1.0, 1.0),
//!     Point::new("d", 1.0, 0.0),
//! ]);
//! let config = SolverConfig::default().with_strategy(Strategy::BestFirst);
//! let outcome = solve(&square, None, &config).unwrap();
//!
//! assert_eq!(outcome.tour.path, vec!["a", "b", "c", "d", "a"]);
//! assert!((outcome.tour.cost - 4.0).abs() < 1e-9);
//! ```

pub mod best_first;
pub mod bound;
pub mod cancel;
pub mod context;
pub mod dfs;
pub mod driver;
pub mod incumbent;
pub mod monitor;
pub mod report;
pub mod state;

use std::time::Instant;

use log::{debug, info};
use tsp_core::{DistanceOracle, Result, SolverConfig, Strategy};

pub use cancel::CancelToken;
pub use context::SearchContext;
pub use driver::{solve_in_worker, solve_with_deadline, WorkerExit};
pub use monitor::{NoopMonitor, SearchMonitor, SearchStats};
pub use report::{SearchOutcome, SearchStatus};

/// Solves on the calling thread with the configured strategy. `start`
/// defaults to the oracle's first node.
///
/// The start node is resolved before anything else, so an unknown start is
/// `InvalidInput` even on an empty or single-node graph.
pub fn solve<O>(
    oracle: &O,
    start: Option<&O::Node>,
    config: &SolverConfig,
) -> Result<SearchOutcome<O::Node>>
where
    O: DistanceOracle + ?Sized,
{
    solve_with(oracle, start, config, &CancelToken::new(), &mut NoopMonitor)
}

/// Like [`solve`], with a caller-owned cancel token and monitor.
/// `stats.elapsed_ms` covers validation, precomputation and the search.
pub fn solve_with<O, M>(
    oracle: &O,
    start: Option<&O::Node>,
    config: &SolverConfig,
    cancel: &CancelToken,
    monitor: &mut M,
) -> Result<SearchOutcome<O::Node>>
where
    O: DistanceOracle + ?Sized,
    M: SearchMonitor + ?Sized,
{
    let started = Instant::now();
    let ctx = SearchContext::new(oracle, start)?;

    if let Some(outcome) = report::degenerate(&ctx.labels) {
        return Ok(outcome);
    }

    info!(
        "searching {} nodes from {:?} with {:?}",
        ctx.num_nodes, ctx.labels[ctx.start], config.strategy
    );

    let run = match config.strategy {
        Strategy::Dfs => dfs::search(&ctx, config.max_depth, cancel, monitor),
        Strategy::BestFirst => best_first::search(&ctx, config.max_frontier, cancel, monitor)?,
    };

    let mut outcome = report::report(&ctx, run);
    outcome.stats.elapsed_ms = started.elapsed().as_millis().try_into().unwrap_or(u64::MAX);

    let stats = &outcome.stats;
    debug!(
        "{:?} {:?} in {} ms: cost {}, {} expanded, {} pruned, {} updates, peak frontier {}",
        config.strategy,
        outcome.status,
        stats.elapsed_ms,
        outcome.tour.cost,
        stats.expanded,
        stats.pruned,
        stats.incumbent_updates,
        stats.peak_frontier
    );

    Ok(outcome)
}

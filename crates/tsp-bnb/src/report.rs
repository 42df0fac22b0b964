use serde::Serialize;
use tsp_core::Tour;

use crate::context::SearchContext;
use crate::incumbent::Incumbent;
use crate::monitor::SearchStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStatus {
    /// The search space was exhausted or provably cut off; the tour is optimal.
    Optimal,
    /// Some subtrees were abandoned at the depth limit.
    DepthLimited,
    /// The cancel token fired before the search finished.
    Cancelled,
}

/// Raw result of one engine run, still in index space.
#[derive(Debug)]
pub struct EngineRun {
    pub incumbent: Incumbent,
    pub status: SearchStatus,
    pub stats: SearchStats,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchOutcome<N> {
    pub tour: Tour<N>,
    pub status: SearchStatus,
    pub stats: SearchStats,
}

impl<N> SearchOutcome<N> {
    pub fn is_optimal(&self) -> bool {
        self.status == SearchStatus::Optimal
    }
}

/// Translates an engine run back to labels and closes the tour.
pub fn report<N>(ctx: &SearchContext<N>, run: EngineRun) -> SearchOutcome<N>
where
    N: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    let tour = if run.incumbent.is_found() {
        Tour {
            path: ctx.closed_labels(run.incumbent.path()),
            cost: run.incumbent.cost(),
        }
    } else {
        Tour::not_found()
    };

    SearchOutcome {
        tour,
        status: run.status,
        stats: run.stats,
    }
}

/// The fixed outcome for graphs with fewer than two nodes, which never reach
/// an engine. `None` for anything larger.
pub(crate) fn degenerate<N: Clone>(labels: &[N]) -> Option<SearchOutcome<N>> {
    let tour = match labels {
        [] => Tour::empty(),
        [only] => Tour {
            path: vec![only.clone()],
            cost: 0.0,
        },
        _ => return None,
    };

    Some(SearchOutcome {
        tour,
        status: SearchStatus::Optimal,
        stats: SearchStats::default(),
    })
}

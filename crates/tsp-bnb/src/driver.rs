//! Runs a whole search on an isolated worker thread under a wall-clock
//! deadline.
//!
//! The worker reports through a one-item channel. If the deadline passes
//! first, the driver raises the worker's cancel token and walks away; the
//! worker's partial incumbent is never reported.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};
use log::{debug, error, warn};
use tsp_core::{DistanceOracle, Result, SolverConfig};

use crate::cancel::CancelToken;
use crate::monitor::NoopMonitor;
use crate::report::SearchOutcome;

#[derive(Debug)]
pub enum WorkerExit<N> {
    /// The worker finished and reported, successfully or with an error.
    Completed(Result<SearchOutcome<N>>),
    /// The deadline elapsed first; no result is available.
    TimedOut,
    /// The worker died without reporting.
    Terminated,
}

impl<N> WorkerExit<N> {
    pub fn completed(self) -> Option<Result<SearchOutcome<N>>> {
        match self {
            Self::Completed(result) => Some(result),
            Self::TimedOut | Self::Terminated => None,
        }
    }
}

/// Solves on a worker thread, waiting at most `config.deadline()` (forever
/// when unset). Fails only if the thread cannot be spawned.
pub fn solve_in_worker<O>(
    oracle: Arc<O>,
    start: Option<O::Node>,
    config: SolverConfig,
) -> Result<WorkerExit<O::Node>>
where
    O: DistanceOracle + Send + Sync + 'static,
    O::Node: Send + 'static,
{
    let deadline = config.deadline();
    let (tx, rx) = bounded(1);
    let cancel = CancelToken::new();
    let worker_cancel = cancel.clone();

    let handle = thread::Builder::new()
        .name("tsp-bnb-worker".into())
        .spawn(move || {
            let result = crate::solve_with(
                &*oracle,
                start.as_ref(),
                &config,
                &worker_cancel,
                &mut NoopMonitor,
            );
            // The driver may have given up already.
            let _ = tx.send(result);
        })?;

    let received = match deadline {
        Some(deadline) => rx.recv_timeout(deadline),
        None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
    };

    match received {
        Ok(result) => {
            let _ = handle.join();
            Ok(WorkerExit::Completed(result))
        }
        Err(RecvTimeoutError::Timeout) => {
            warn!(
                "search exceeded its {}ms deadline; cancelling worker",
                deadline.map_or(0, |d| d.as_millis())
            );
            cancel.cancel();
            // Detached: the worker notices the token on its next expansion.
            drop(handle);
            Ok(WorkerExit::TimedOut)
        }
        Err(RecvTimeoutError::Disconnected) => {
            let panicked = handle.join().is_err();
            error!("search worker exited without a result (panicked: {panicked})");
            Ok(WorkerExit::Terminated)
        }
    }
}

/// [`solve_in_worker`] with an explicit deadline overriding the config's.
pub fn solve_with_deadline<O>(
    oracle: Arc<O>,
    start: Option<O::Node>,
    config: SolverConfig,
    deadline: Duration,
) -> Result<WorkerExit<O::Node>>
where
    O: DistanceOracle + Send + Sync + 'static,
    O::Node: Send + 'static,
{
    debug!("spawning search worker with a {}ms deadline", deadline.as_millis());
    solve_in_worker(oracle, start, config.with_deadline(deadline))
}

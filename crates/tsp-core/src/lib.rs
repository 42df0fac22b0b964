//! Shared types for exact TSP search.
//!
//! The search crates only ever talk to a graph through [`DistanceOracle`];
//! [`PointSet`] and [`DistanceMatrix`] are the two oracles shipped here.

pub mod config;
mod error;
pub mod logging;
pub mod models;
pub mod oracle;
pub mod utils;

pub use config::{LogFormat, LogLevel, SolverConfig, Strategy};
pub use error::{Error, Result};
pub use models::{DistanceMatrix, Metric, Point, PointSet, Tour};
pub use oracle::DistanceOracle;
pub use utils::tour_cost;

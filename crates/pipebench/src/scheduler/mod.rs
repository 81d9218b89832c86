//! # Pipeline scheduler
//!
//! The driver that keeps a fixed number of operations in flight against an
//! executor and reports sustained throughput. One sequential task owns the
//! request pool and both cursors; concurrency comes entirely from the
//! executor running submitted operations in its own time.

mod pipeline;
mod summary;

use std::fmt;

pub use pipeline::{BenchConfig, PipelineScheduler};
pub use summary::RunSummary;

/// Phase of the benchmark run, carried in error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Filling the window; submits only.
    Warmup,
    /// One submit and one wait per iteration.
    SteadyState,
    /// Waiting out outstanding work; no further submits.
    Drain,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Warmup => "warmup",
            Phase::SteadyState => "steady state",
            Phase::Drain => "drain",
        };
        write!(f, "{}", name)
    }
}

//! Error types for the benchmark harness.
//!
//! Every error here is fatal by policy: this is a measurement tool whose job
//! is to expose backend problems, so nothing is retried and nothing is
//! papered over. The one deliberate exception is the drain phase tolerating
//! a `NOT_STARTED` wait status, which is handled in the scheduler itself and
//! never reaches these types.

use thiserror::Error;

use crate::scheduler::Phase;
use crate::status::StatusCode;

/// Rejected before any scheduling begins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A pipeline needs at least one request slot.
    #[error("pipeline depth must be at least 1, got {0}")]
    InvalidDepth(usize),
}

/// The executor could not be prepared for the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The workload source could not be loaded onto the executor.
    #[error("failed to load workload source: {0}")]
    WorkloadLoad(String),
    /// The executor could not allocate a backend-bound request.
    #[error("failed to allocate backend request: {0}")]
    RequestAllocation(String),
}

/// A wait returned a status the current phase does not allow.
///
/// Carries enough context to locate the failure: which pool slot, which
/// submission (1-based, in submission order), which phase, and how many
/// operations had completed before the failure. The accumulated count is
/// error context only, never a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "request {handle} (submission {submission}) returned {status} during {phase} \
     after {processed} completed operations"
)]
pub struct ExecutionError {
    /// Pool slot id of the failing request.
    pub handle: usize,
    /// 1-based submission ordinal of the failing operation.
    pub submission: u64,
    /// Phase the scheduler was in when the wait settled.
    pub phase: Phase,
    /// The disallowed status.
    pub status: StatusCode,
    /// Operations completed before the failure.
    pub processed: u64,
}

/// Umbrella error for a benchmark run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

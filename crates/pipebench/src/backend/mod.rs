//! # Execution backends
//!
//! This module provides the seams between the scheduler and whatever is
//! actually executing the work, allowing the pipelined benchmark loop to run
//! in a backend-agnostic manner.
//!
//! ## Usage
//!
//! Users of this crate plug in a backend by:
//!
//! 1. Implementing [`Executor`] for their device or runtime
//! 2. Implementing [`WorkloadGenerator`] for whatever payload shape the
//!    executor expects (or using [`RandomPayload`] for opaque byte buffers)
//! 3. Handing both to the scheduler
//!
//! The built-in [`SimExecutor`] is a fixed-latency simulated backend, useful
//! for exercising the harness without real hardware.

mod core_trait;
mod sim;
mod workload;

// Re-export the core traits for convenient imports
pub use core_trait::*;

pub use sim::{DEFAULT_LATENCY, SimExecutor, SimHandle};
pub use workload::RandomPayload;

#[cfg(test)]
/// Scripted executor implementation.
///
/// Settles submissions on a serialized fixed-latency lane
pub(crate) mod mock;

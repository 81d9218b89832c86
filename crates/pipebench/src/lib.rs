//! # Pipebench
//!
//! A **pipe**lined throughput **bench**marking harness for asynchronous,
//! latency-bearing execution backends.
//!
//! ## Overview
//!
//! This library measures the sustained throughput of an opaque asynchronous
//! backend by keeping a fixed number of operations concurrently in flight.
//! A fixed-size pool of reusable request handles is driven by a sliding
//! submit/wait window: every iteration submits one fresh payload and waits
//! on the handle submitted a full window earlier, so the backend always has
//! `depth - 1` operations overlapping in time.
//!
//! Key components include:
//!
//! - Backend-agnostic [`backend::Executor`] and [`backend::WorkloadGenerator`]
//!   seams
//! - A pre-allocated arena of reusable request handles
//! - The sliding-window pipeline scheduler with warmup, steady-state, and
//!   drain phases
//! - Throughput accounting over whole elapsed seconds
//!
//! ## Architecture
//!
//! The library is built around several key abstractions:
//!
//! ### Backend traits
//!
//! The [`backend::Executor`] trait defines the interface any execution
//! backend must satisfy: allocate a request, bind input, begin execution
//! without blocking, and settle a wait with a terminal [`StatusCode`]. This
//! keeps the scheduling core independent of what is actually executing;
//! the harness never inspects results, only completion status and timing.
//!
//! ### The pipeline
//!
//! [`scheduler::PipelineScheduler`] owns all scheduling state: the request
//! pool, both cursors, and the counters. One sequential driver task issues
//! every submit and wait, so no locking is needed anywhere in the hot loop;
//! concurrency arises inside the executor, where submitted operations
//! complete in their own time.
//!
//! ## Error policy
//!
//! Everything is fatal and nothing is retried: the harness exists to expose
//! backend problems, not mask them. The single deliberate exception is the
//! drain phase tolerating a `NOT_STARTED` status for window slots that never
//! carried work.
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use pipebench::backend::{RandomPayload, SimExecutor};
//! use pipebench::scheduler::{BenchConfig, PipelineScheduler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pipebench::BenchError> {
//!     let executor = SimExecutor::default();
//!     executor.load_workload(b"model").await?;
//!
//!     let config = BenchConfig::new(4, Duration::from_secs(120))?;
//!     let generator = RandomPayload::new(224 * 224 * 3);
//!     let scheduler = PipelineScheduler::new(executor, generator, config).await?;
//!
//!     let summary = scheduler.run().await?;
//!     println!("{} ops/sec", summary.throughput());
//!     Ok(())
//! }
//! ```

mod error;
mod status;

pub mod backend;
pub mod request;
pub mod scheduler;

pub use error::{BenchError, ConfigError, ExecutionError, SetupError};
pub use status::StatusCode;

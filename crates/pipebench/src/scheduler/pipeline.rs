use std::cmp::min;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, trace};
use uuid::Uuid;

use crate::backend::{Executor, WorkloadGenerator};
use crate::error::{BenchError, ConfigError, ExecutionError};
use crate::request::RequestPool;
use crate::status::StatusCode;

use super::{Phase, RunSummary};

/// Parameters of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Pipeline depth: the pool holds this many reusable request slots, and
    /// steady state keeps `depth - 1` operations in flight.
    pub depth: usize,
    /// Time budget. Submission stops once this much wall time has elapsed;
    /// outstanding work is then drained, never abandoned.
    pub budget: Duration,
}

impl BenchConfig {
    /// Default time budget when the caller does not specify one.
    pub const DEFAULT_BUDGET: Duration = Duration::from_secs(120);

    pub fn new(depth: usize, budget: Duration) -> Result<Self, ConfigError> {
        if depth < 1 {
            return Err(ConfigError::InvalidDepth(depth));
        }
        Ok(Self { depth, budget })
    }
}

/// Drives the submit/wait sliding window over a fixed pool of request slots.
///
/// The scheduler exclusively owns the pool, both cursors, and all counters;
/// nothing else mutates scheduling state. A run moves through three phases:
///
/// - **Warmup** fills the window with `depth - 1` submissions and issues no
///   waits, since no handle is old enough to have completed a full cycle.
/// - **Steady state** pairs one submit with one wait per iteration, so the
///   submit cursor stays exactly `depth - 1` ahead of the wait cursor modulo
///   `depth`, and that many operations remain in flight.
/// - **Drain** waits out everything still outstanding once the budget
///   elapses, in submission order, submitting nothing further.
///
/// Any failure status in steady state is fatal: every waited handle there
/// was unconditionally submitted one window earlier, so the backend has no
/// excuse. Drain additionally tolerates `NOT_STARTED` as a zero-contribution
/// outcome, because a run stopped during warmup legitimately leaves window
/// slots that never carried work. That narrow asymmetry is deliberate and is
/// not a general error-suppression policy.
pub struct PipelineScheduler<E, G>
where
    E: Executor,
    G: WorkloadGenerator<E::Payload>,
{
    executor: E,
    generator: G,
    pool: RequestPool<E>,
    budget: Duration,
    submit_cursor: usize,
    wait_cursor: usize,
    submissions: u64,
    processed: u64,
}

impl<E, G> PipelineScheduler<E, G>
where
    E: Executor,
    G: WorkloadGenerator<E::Payload>,
{
    /// Builds the scheduler and pre-allocates its request pool.
    pub async fn new(executor: E, generator: G, config: BenchConfig) -> Result<Self, BenchError> {
        let pool = RequestPool::create(&executor, config.depth).await?;
        Ok(Self {
            executor,
            generator,
            pool,
            budget: config.budget,
            submit_cursor: 0,
            wait_cursor: 0,
            submissions: 0,
            processed: 0,
        })
    }

    /// Runs the full warmup / steady-state / drain cycle and reports the
    /// final throughput accounting.
    pub async fn run(mut self) -> Result<RunSummary, BenchError> {
        let run_id = Uuid::new_v4();
        let depth = self.pool.len();
        info!(
            %run_id,
            depth,
            budget_secs = self.budget.as_secs_f64(),
            "starting pipelined run"
        );
        let start = Instant::now();

        // Warmup: fill the window. The budget is honored here too, so a
        // short run may stop before all depth - 1 slots carry work.
        while self.submissions < depth as u64 - 1 && start.elapsed() < self.budget {
            self.submit_next();
        }
        debug!(submissions = self.submissions, "window filled, entering steady state");

        while start.elapsed() < self.budget {
            self.submit_next();
            self.wait_next(Phase::SteadyState).await?;
        }

        let outstanding = min(depth as u64 - 1, self.submissions - self.processed);
        debug!(outstanding, "budget elapsed, draining");
        for _ in 0..outstanding {
            self.wait_next(Phase::Drain).await?;
        }

        let summary = RunSummary {
            run_id,
            submissions: self.submissions,
            processed: self.processed,
            elapsed: start.elapsed(),
        };
        info!(
            %run_id,
            submissions = summary.submissions,
            processed = summary.processed,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            throughput = summary.throughput(),
            "run complete"
        );
        Ok(summary)
    }

    /// Submits a fresh payload at the submit cursor and advances it.
    fn submit_next(&mut self) {
        let payload = self.generator.next_payload();
        self.submissions += 1;
        let ordinal = self.submissions;
        let slot = self.pool.get_mut(self.submit_cursor);
        slot.submit(&self.executor, payload, ordinal);
        trace!(handle = self.submit_cursor, ordinal, "submitted");
        self.submit_cursor = (self.submit_cursor + 1) % self.pool.len();
    }

    /// Waits on the handle at the wait cursor and advances it.
    ///
    /// Success increments the processed count. `NOT_STARTED` contributes
    /// nothing and is only allowed during drain; every other non-success
    /// status is fatal in any phase.
    async fn wait_next(&mut self, phase: Phase) -> Result<(), ExecutionError> {
        let slot = self.pool.get_mut(self.wait_cursor);
        let handle = slot.id();
        let submission = slot.submission();
        let status = slot.wait(&self.executor).await;
        trace!(handle, submission, %status, %phase, "wait settled");

        match status {
            StatusCode::Ok => self.processed += 1,
            StatusCode::NotStarted if phase == Phase::Drain => {
                // Nothing ran, nothing to count.
            }
            _ => {
                return Err(ExecutionError {
                    handle,
                    submission,
                    phase,
                    status,
                    processed: self.processed,
                });
            }
        }
        self.wait_cursor = (self.wait_cursor + 1) % self.pool.len();
        Ok(())
    }
}

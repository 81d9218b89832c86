use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::time::{Duration, Instant, sleep_until};

use crate::error::SetupError;
use crate::status::StatusCode;

use super::core_trait::Executor;

/// Default per-operation completion latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(10);

/// A simulated execution backend with a fixed per-operation latency.
///
/// Operations complete on a single serialized lane, the way a one-queue
/// device would: each submission finishes one `latency` after the previous
/// completion (or after its own submission, if the lane is idle). Submission
/// never blocks, so up to pool-depth operations are pending inside the
/// simulator at once while the driver interleaves submit/wait calls.
///
/// Because completion is driven by `tokio::time`, runs under a paused test
/// clock are fully deterministic.
pub struct SimExecutor {
    latency: Duration,
    /// Completion time of the most recently submitted operation.
    lane: Mutex<Option<Instant>>,
    loaded: AtomicBool,
}

/// A reusable simulated request slot.
#[derive(Debug)]
pub struct SimHandle {
    deadline: Option<Instant>,
    payload: Option<Vec<u8>>,
    output: Option<Vec<u8>>,
}

impl SimExecutor {
    /// Creates a simulator whose operations take `latency` each.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            lane: Mutex::new(None),
            loaded: AtomicBool::new(false),
        }
    }
}

impl Default for SimExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl Executor for SimExecutor {
    type Handle = SimHandle;
    type Payload = Vec<u8>;
    type Output = Vec<u8>;

    async fn load_workload(&self, source: &[u8]) -> Result<(), SetupError> {
        if source.is_empty() {
            return Err(SetupError::WorkloadLoad(
                "workload source is empty".to_string(),
            ));
        }
        self.loaded.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn create_request(&self) -> Result<Self::Handle, SetupError> {
        if !self.loaded.load(Ordering::SeqCst) {
            return Err(SetupError::RequestAllocation(
                "no workload loaded".to_string(),
            ));
        }
        Ok(SimHandle {
            deadline: None,
            payload: None,
            output: None,
        })
    }

    fn bind(&self, handle: &mut Self::Handle, payload: Self::Payload) {
        handle.payload = Some(payload);
    }

    fn submit(&self, handle: &mut Self::Handle) {
        let now = Instant::now();
        let mut lane = self.lane.lock().unwrap();
        let start = lane.map_or(now, |busy_until| busy_until.max(now));
        let deadline = start + self.latency;
        *lane = Some(deadline);
        handle.deadline = Some(deadline);
        handle.output = None;
    }

    async fn wait(&self, handle: &mut Self::Handle) -> StatusCode {
        match handle.deadline.take() {
            None => StatusCode::NotStarted,
            Some(deadline) => {
                sleep_until(deadline).await;
                // The simulator's "result" is the payload echoed back.
                handle.output = handle.payload.take();
                StatusCode::Ok
            }
        }
    }

    async fn fetch_result(&self, handle: &Self::Handle, _output_id: &str) -> Option<Self::Output> {
        handle.output.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_rejects_empty_source() {
        let sim = SimExecutor::default();
        let err = sim.load_workload(b"").await.unwrap_err();
        assert!(matches!(err, SetupError::WorkloadLoad(_)));
    }

    #[tokio::test]
    async fn create_requires_loaded_workload() {
        let sim = SimExecutor::default();
        let err = sim.create_request().await.unwrap_err();
        assert!(matches!(err, SetupError::RequestAllocation(_)));

        sim.load_workload(b"model").await.unwrap();
        assert!(sim.create_request().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn wait_without_submit_is_not_started() {
        let sim = SimExecutor::default();
        sim.load_workload(b"model").await.unwrap();
        let mut handle = sim.create_request().await.unwrap();
        assert_eq!(sim.wait(&mut handle).await, StatusCode::NotStarted);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_completes_after_latency() {
        let sim = SimExecutor::new(Duration::from_millis(10));
        sim.load_workload(b"model").await.unwrap();
        let mut handle = sim.create_request().await.unwrap();

        let start = Instant::now();
        sim.bind(&mut handle, vec![7u8; 4]);
        sim.submit(&mut handle);
        assert_eq!(sim.wait(&mut handle).await, StatusCode::Ok);
        assert_eq!(start.elapsed(), Duration::from_millis(10));

        // Result is available downstream once the wait settled.
        assert_eq!(sim.fetch_result(&handle, "output").await, Some(vec![7u8; 4]));
    }

    #[tokio::test(start_paused = true)]
    async fn lane_serializes_overlapping_submissions() {
        let sim = SimExecutor::new(Duration::from_millis(10));
        sim.load_workload(b"model").await.unwrap();
        let mut first = sim.create_request().await.unwrap();
        let mut second = sim.create_request().await.unwrap();
        let mut third = sim.create_request().await.unwrap();

        let start = Instant::now();
        for handle in [&mut first, &mut second, &mut third] {
            sim.bind(handle, vec![0u8; 4]);
            sim.submit(handle);
        }

        // All three are pending at once; completions stay in submission order.
        let statuses = futures::future::join_all([
            sim.wait(&mut first),
            sim.wait(&mut second),
            sim.wait(&mut third),
        ])
        .await;
        assert!(statuses.iter().all(StatusCode::is_ok));
        assert_eq!(start.elapsed(), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn handle_can_be_reused_after_completion() {
        let sim = SimExecutor::new(Duration::from_millis(5));
        sim.load_workload(b"model").await.unwrap();
        let mut handle = sim.create_request().await.unwrap();

        for round in 0..3u8 {
            sim.bind(&mut handle, vec![round; 2]);
            sim.submit(&mut handle);
            assert_eq!(sim.wait(&mut handle).await, StatusCode::Ok);
            assert_eq!(
                sim.fetch_result(&handle, "output").await,
                Some(vec![round; 2])
            );
        }
    }
}

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;

use tokio::time::{Duration, Instant, sleep_until};

use crate::error::SetupError;
use crate::status::StatusCode;

use super::core_trait::Executor;

// A scripted executor for scheduler tests. Completions run on a serialized
// lane like the simulator, but individual submissions can be scripted to
// settle with an arbitrary status, and the executor records what it observed
// so tests can check the sliding-window invariant from the outside.
pub(crate) struct MockExecutor {
    latency: Duration,
    lane: Mutex<Option<Instant>>,
    /// Submission ordinal (1-based) -> status its wait should return.
    scripted: Mutex<HashMap<u64, StatusCode>>,
    submits: AtomicU64,
    in_flight: AtomicUsize,
    /// In-flight count sampled after each wait settles.
    observed_in_flight: Mutex<Vec<usize>>,
    created: AtomicUsize,
}

pub(crate) struct MockHandle {
    submission: Option<u64>,
    deadline: Option<Instant>,
    bound: Option<Vec<u8>>,
}

impl MockExecutor {
    pub(crate) fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            lane: Mutex::new(None),
            scripted: Mutex::new(HashMap::new()),
            submits: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
            observed_in_flight: Mutex::new(Vec::new()),
            created: AtomicUsize::new(0),
        }
    }

    /// Scripts the wait of the `ordinal`-th submission (1-based) to settle
    /// with `status` instead of `Ok`.
    pub(crate) fn script_status(&self, ordinal: u64, status: StatusCode) {
        self.scripted.lock().unwrap().insert(ordinal, status);
    }

    pub(crate) fn submissions(&self) -> u64 {
        self.submits.load(Ordering::SeqCst)
    }

    pub(crate) fn created_requests(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub(crate) fn observed_in_flight(&self) -> Vec<usize> {
        self.observed_in_flight.lock().unwrap().clone()
    }
}

#[async_trait]
impl Executor for MockExecutor {
    type Handle = MockHandle;
    type Payload = Vec<u8>;
    type Output = Vec<u8>;

    async fn load_workload(&self, _source: &[u8]) -> Result<(), SetupError> {
        Ok(())
    }

    async fn create_request(&self) -> Result<Self::Handle, SetupError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(MockHandle {
            submission: None,
            deadline: None,
            bound: None,
        })
    }

    fn bind(&self, handle: &mut Self::Handle, payload: Self::Payload) {
        handle.bound = Some(payload);
    }

    fn submit(&self, handle: &mut Self::Handle) {
        let ordinal = self.submits.fetch_add(1, Ordering::SeqCst) + 1;
        handle.submission = Some(ordinal);

        let now = Instant::now();
        let mut lane = self.lane.lock().unwrap();
        let start = lane.map_or(now, |busy_until| busy_until.max(now));
        let deadline = start + self.latency;
        *lane = Some(deadline);
        handle.deadline = Some(deadline);

        self.in_flight.fetch_add(1, Ordering::SeqCst);
    }

    async fn wait(&self, handle: &mut Self::Handle) -> StatusCode {
        let Some(deadline) = handle.deadline.take() else {
            return StatusCode::NotStarted;
        };
        sleep_until(deadline).await;
        let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
        self.observed_in_flight.lock().unwrap().push(remaining);

        let ordinal = handle.submission.take().unwrap_or(0);
        self.scripted
            .lock()
            .unwrap()
            .remove(&ordinal)
            .unwrap_or(StatusCode::Ok)
    }

    async fn fetch_result(&self, handle: &Self::Handle, _output_id: &str) -> Option<Self::Output> {
        handle.bound.clone()
    }
}

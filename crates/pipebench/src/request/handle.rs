use crate::backend::Executor;
use crate::status::StatusCode;

/// Lifecycle state of a reusable request slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// Never submitted, or reset after a `NOT_STARTED` wait.
    Idle,
    /// Submitted and not yet waited to completion.
    Submitted,
    /// Last wait settled with `OK`.
    Completed,
    /// Last wait settled with a failure status.
    Failed,
}

/// One reusable unit of asynchronous work.
///
/// A handle wraps a backend-bound request resource together with its
/// lifecycle state. Handles are created once, at pool construction, and
/// reused for the pool's entire lifetime; the backend resource is bound to
/// exactly one executor throughout.
///
/// Only the driver ever touches a handle, so there is no internal locking:
/// the sliding-window invariant guarantees a handle is never submitted again
/// before its previous submission's wait has settled.
pub struct RequestHandle<E: Executor> {
    id: usize,
    state: RequestState,
    submission: u64,
    inner: E::Handle,
}

impl<E: Executor> std::fmt::Debug for RequestHandle<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandle")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("submission", &self.submission)
            .finish_non_exhaustive()
    }
}

impl<E: Executor> RequestHandle<E> {
    pub(crate) fn new(id: usize, inner: E::Handle) -> Self {
        Self {
            id,
            state: RequestState::Idle,
            submission: 0,
            inner,
        }
    }

    /// Stable pool slot id, 0-based.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    /// 1-based ordinal of the most recent submission through this handle,
    /// or 0 if it has never been submitted.
    pub fn submission(&self) -> u64 {
        self.submission
    }

    /// Binds `payload` and issues a non-blocking submission.
    ///
    /// `ordinal` is the run-wide 1-based submission number, kept for error
    /// context.
    ///
    /// # Panics
    ///
    /// Submitting a handle that is already in flight is a programmer error,
    /// not a recoverable runtime condition, and panics.
    pub fn submit(&mut self, executor: &E, payload: E::Payload, ordinal: u64) {
        assert!(
            self.state != RequestState::Submitted,
            "request {} submitted while still in flight",
            self.id
        );
        executor.bind(&mut self.inner, payload);
        executor.submit(&mut self.inner);
        self.state = RequestState::Submitted;
        self.submission = ordinal;
    }

    /// Suspends until this handle's operation reaches a terminal status.
    ///
    /// The wait settles only on this handle's own completion; no other
    /// handle's state is read or touched.
    pub async fn wait(&mut self, executor: &E) -> StatusCode {
        let status = executor.wait(&mut self.inner).await;
        self.state = match status {
            StatusCode::Ok => RequestState::Completed,
            StatusCode::NotStarted => RequestState::Idle,
            _ => RequestState::Failed,
        };
        status
    }
}

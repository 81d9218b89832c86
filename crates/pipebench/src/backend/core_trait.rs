use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SetupError;
use crate::status::StatusCode;

/// The contract an execution backend must satisfy to be benchmarked.
///
/// The harness treats the backend as fully opaque: it hands payloads in,
/// observes terminal [`StatusCode`]s, and never looks at results. Concurrency
/// lives entirely inside the implementation: `submit` must return without
/// blocking so that up to pool-depth operations genuinely overlap, while
/// `wait` is the single point where the driver suspends.
///
/// # Example
///
/// ```ignore
/// use pipebench::backend::Executor;
/// use async_trait::async_trait;
///
/// struct MyDevice { /* ... */ }
///
/// #[async_trait]
/// impl Executor for MyDevice {
///     type Handle = MyRequest;
///     type Payload = Vec<u8>;
///     type Output = Vec<u8>;
///     // ...
/// }
/// ```
#[async_trait]
pub trait Executor: Send + Sync + 'static {
    /// Backend-bound request resource. Allocated once per pool slot and
    /// reused for the pool's entire lifetime.
    type Handle: Send + Sync;

    /// One unit of input data.
    type Payload: Send;

    /// Result buffer type, available downstream via [`Executor::fetch_result`].
    type Output: Send;

    /// Loads the workload source onto the backend. Runs once, before any
    /// request is allocated; failure aborts the benchmark before it starts.
    async fn load_workload(&self, source: &[u8]) -> Result<(), SetupError>;

    /// Allocates a fresh backend-bound request resource.
    async fn create_request(&self) -> Result<Self::Handle, SetupError>;

    /// Attaches input data to a request. Does not begin execution.
    fn bind(&self, handle: &mut Self::Handle, payload: Self::Payload);

    /// Begins asynchronous execution of the bound payload. Must return
    /// without blocking; the operation completes in the backend's own time.
    fn submit(&self, handle: &mut Self::Handle);

    /// Suspends the caller until this handle's operation reaches a terminal
    /// status, and returns that status.
    ///
    /// A wait must settle only on its own handle's completion; it must
    /// never be satisfied by, or hold up, a different handle. Waiting on a
    /// handle that was never submitted returns [`StatusCode::NotStarted`].
    async fn wait(&self, handle: &mut Self::Handle) -> StatusCode;

    /// Retrieves a named output buffer from a completed request.
    ///
    /// Scheduling never consults this; it exists for downstream consumers
    /// that want to look at what the backend produced.
    async fn fetch_result(&self, handle: &Self::Handle, output_id: &str) -> Option<Self::Output>;
}

// A shared executor is still an executor. Lets callers keep a second owner
// around for inspection while the scheduler holds its own.
#[async_trait]
impl<T: Executor> Executor for Arc<T> {
    type Handle = T::Handle;
    type Payload = T::Payload;
    type Output = T::Output;

    async fn load_workload(&self, source: &[u8]) -> Result<(), SetupError> {
        (**self).load_workload(source).await
    }

    async fn create_request(&self) -> Result<Self::Handle, SetupError> {
        (**self).create_request().await
    }

    fn bind(&self, handle: &mut Self::Handle, payload: Self::Payload) {
        (**self).bind(handle, payload)
    }

    fn submit(&self, handle: &mut Self::Handle) {
        (**self).submit(handle)
    }

    async fn wait(&self, handle: &mut Self::Handle) -> StatusCode {
        (**self).wait(handle).await
    }

    async fn fetch_result(&self, handle: &Self::Handle, output_id: &str) -> Option<Self::Output> {
        (**self).fetch_result(handle, output_id).await
    }
}

/// Produces one payload per submission.
///
/// Generation must be synchronous and fast relative to the executor's
/// latency; the scheduler calls this once per submit on the driver's hot
/// path. No state needs to survive between calls beyond whatever the
/// generator wants for shaping payloads.
pub trait WorkloadGenerator<P>: Send {
    /// Produces the payload for the next submission.
    fn next_payload(&mut self) -> P;
}

//! Reusable request handles and the fixed-size pool that owns them.

mod handle;
mod pool;

pub use handle::{RequestHandle, RequestState};
pub use pool::RequestPool;

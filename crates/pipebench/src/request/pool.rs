use crate::backend::Executor;
use crate::error::{BenchError, ConfigError};

use super::handle::{RequestHandle, RequestState};

/// A fixed-size arena of reusable request handles.
///
/// All handles are allocated up front, each bound to a freshly created
/// backend resource, and the pool never grows or shrinks afterwards. Slot
/// access is mod-length, so cursor arithmetic in the scheduler can never
/// index out of bounds.
pub struct RequestPool<E: Executor> {
    slots: Vec<RequestHandle<E>>,
}

impl<E: Executor> std::fmt::Debug for RequestPool<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPool")
            .field("slots", &self.slots)
            .finish()
    }
}

impl<E: Executor> RequestPool<E> {
    /// Pre-allocates `n` handles against `executor`.
    ///
    /// Fails with [`ConfigError::InvalidDepth`] for `n < 1`, or with a setup
    /// error if the backend refuses to allocate a request.
    pub async fn create(executor: &E, n: usize) -> Result<Self, BenchError> {
        if n < 1 {
            return Err(ConfigError::InvalidDepth(n).into());
        }
        let mut slots = Vec::with_capacity(n);
        for id in 0..n {
            let inner = executor.create_request().await?;
            slots.push(RequestHandle::new(id, inner));
        }
        Ok(Self { slots })
    }

    /// Number of slots. Immutable after construction.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The handle at `index % len`.
    pub fn get_mut(&mut self, index: usize) -> &mut RequestHandle<E> {
        let n = self.slots.len();
        &mut self.slots[index % n]
    }

    /// Number of handles currently in flight.
    pub fn in_flight(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.state() == RequestState::Submitted)
            .count()
    }
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tokio::task::{AbortHandle, JoinHandle};

use super::FeedState;

/// Proof that an invocation was the latest one when it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks the in-flight invocation of one pipeline. Claiming a new ticket
/// aborts the previous task and invalidates its ticket, so a superseded
/// invocation can never write to the view.
#[derive(Debug, Default)]
pub struct TaskSlot {
    generation: AtomicU64,
    current: Mutex<Option<AbortHandle>>,
}

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&self) -> Ticket {
        let ticket = Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = current.take() {
            tracing::debug!("superseding in-flight fetch");
            previous.abort();
        }
        ticket
    }

    /// Record the task running under `ticket`. Ignored if already superseded.
    pub fn attach(&self, ticket: Ticket, handle: AbortHandle) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_current(ticket) {
            *current = Some(handle);
        } else {
            handle.abort();
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }
}

/// Handle to one spawned pipeline invocation.
#[derive(Debug)]
pub struct FeedHandle {
    handle: JoinHandle<Option<FeedState>>,
}

impl FeedHandle {
    pub(crate) fn new(handle: JoinHandle<Option<FeedState>>) -> Self {
        Self { handle }
    }

    /// Abort the request. The view keeps whatever it showed at that moment.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Wait for completion. `None` means the invocation was cancelled or
    /// superseded before it could write its result.
    pub async fn wait(self) -> Option<FeedState> {
        match self.handle.await {
            Ok(state) => state,
            Err(e) if e.is_cancelled() => None,
            Err(e) => {
                tracing::error!(error = %e, "feed task panicked");
                None
            }
        }
    }
}

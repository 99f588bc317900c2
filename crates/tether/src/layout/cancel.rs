//! Cooperative cancellation of a running layout.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A shareable flag that asks a running layout to stop.
///
/// Clones share the same flag, so one clone can be handed to the thread
/// running the layout while another stays with the caller. The simulation
/// polls the flag between iterations; setting it never changes the result of
/// a run that completes.
///
/// # Examples
///
/// ```
/// # use tether::CancelToken;
/// let token = CancelToken::new();
/// let worker_token = token.clone();
///
/// assert!(!worker_token.is_cancelled());
/// token.cancel();
/// assert!(worker_token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

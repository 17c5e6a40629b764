//! Poll-once cancellation signal.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag a host sets to cancel pending generations.
///
/// Clones share state. The task polls the flag once on entry; generation
/// itself never blocks, so there is nothing to interrupt afterwards.
///
/// # Example
///
/// ```
/// use pseudo_ssn::CancellationFlag;
///
/// let flag = CancellationFlag::new();
/// let handle = flag.clone();
/// handle.cancel();
///
/// assert!(flag.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    /// Creates a flag that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns `true` once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

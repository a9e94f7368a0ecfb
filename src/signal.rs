//! Cooperative cancellation shared by the input listener, the Ctrl+C handler
//! and the render loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-way cancellation flag. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    cancelled: Arc<AtomicBool>,
}

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn trigger(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            log::debug!("cancellation requested");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Set up the Ctrl+C / SIGTERM handler to trigger `cancel`.
///
/// This can only succeed once per process.
pub fn setup_ctrlc_handler(cancel: CancelSignal) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || cancel.trigger())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_clear() {
        assert!(!CancelSignal::new().is_cancelled());
    }

    #[test]
    fn test_clones_share_state() {
        let signal = CancelSignal::new();
        let listener = signal.clone();
        listener.trigger();
        assert!(signal.is_cancelled());
        listener.trigger();
        assert!(signal.is_cancelled());
    }

    #[test]
    fn test_trigger_from_other_thread() {
        let signal = CancelSignal::new();
        let remote = signal.clone();
        std::thread::spawn(move || remote.trigger()).join().unwrap();
        assert!(signal.is_cancelled());
    }
}

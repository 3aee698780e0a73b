use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Single-shot stop flag shared between a worker thread and its controllers.
///
/// Once raised it stays raised; raising it again is a no-op.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    raised: Arc<AtomicBool>,
}

impl StopSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. Returns `true` only for the call that raised it.
    pub fn raise(&self) -> bool {
        !self.raised.swap(true, Ordering::AcqRel)
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

impl CancelToken for StopSignal {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.is_raised()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn closure_token_reflects_atomic_state() {
        let flag = AtomicBool::new(false);
        let token = || flag.load(Ordering::Relaxed);

        assert!(!token.is_cancelled());

        flag.store(true, Ordering::Relaxed);
        assert!(token.is_cancelled());
    }

    #[test]
    fn stop_signal_is_single_shot_and_idempotent() {
        let signal = StopSignal::new();
        assert!(!signal.is_cancelled());

        assert!(signal.raise());
        assert!(!signal.raise());
        assert!(signal.is_cancelled());
    }

    #[test]
    fn stop_signal_clones_share_state_across_threads() {
        let signal = StopSignal::new();
        let remote = signal.clone();

        thread::spawn(move || {
            remote.raise();
        })
        .join()
        .unwrap();

        assert!(signal.is_raised());
    }
}

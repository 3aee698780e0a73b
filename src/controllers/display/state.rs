use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a display loop. `Stopped` is terminal.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Idle = 0,
    Running = 1,
    Stopping = 2,
    Stopped = 3,
}

impl LoopState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            1 => Self::Running,
            2 => Self::Stopping,
            _ => Self::Stopped,
        }
    }
}

/// Why the render thread left its loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopExit {
    QuitKey,
    WindowClosed,
    StopRequested,
}

#[derive(Debug)]
pub(crate) struct AtomicLoopState(AtomicU8);

impl AtomicLoopState {
    pub(crate) fn new(state: LoopState) -> Self {
        Self(AtomicU8::new(state as u8))
    }

    pub(crate) fn load(&self) -> LoopState {
        LoopState::from_u8(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn store(&self, state: LoopState) {
        self.0.store(state as u8, Ordering::Release);
    }

    /// Moves from `current` to `next`; fails with the observed state otherwise.
    pub(crate) fn transition(&self, current: LoopState, next: LoopState) -> Result<(), LoopState> {
        self.0
            .compare_exchange(current as u8, next as u8, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(LoopState::from_u8)
    }
}

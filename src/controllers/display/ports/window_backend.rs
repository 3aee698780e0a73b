use std::time::Duration;

use crate::controllers::display::errors::display::BackendError;
use crate::core::data::frame::Frame;
use crate::core::data::frame_size::FrameSize;

/// Input observed while polling the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolledInput {
    Nothing,
    Key(char),
    CloseRequested,
}

/// A window system able to show frames and report key presses.
///
/// Backends live on the render thread and need not be `Send`.
pub trait WindowBackend {
    fn open(&mut self, title: &str, size: FrameSize) -> Result<(), BackendError>;

    fn show(&mut self, frame: &Frame) -> Result<(), BackendError>;

    /// Waits at most roughly `wait` for input.
    fn poll(&mut self, wait: Duration) -> Result<PolledInput, BackendError>;

    /// Tears down every window this backend opened.
    fn close_all(&mut self);
}

/// Builds a backend on the render thread.
pub trait WindowBackendFactory<B: WindowBackend>: Send + 'static {
    fn build(self) -> Result<B, BackendError>;
}

impl<B, F> WindowBackendFactory<B> for F
where
    B: WindowBackend,
    F: FnOnce() -> Result<B, BackendError> + Send + 'static,
{
    fn build(self) -> Result<B, BackendError> {
        self()
    }
}

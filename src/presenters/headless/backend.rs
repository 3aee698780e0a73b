use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::controllers::display::{BackendError, PolledInput, WindowBackend};
use crate::core::data::frame::Frame;
use crate::core::data::frame_size::FrameSize;

/// Counters a [`HeadlessBackend`] updates as it "presents" frames.
#[derive(Debug, Default)]
pub struct HeadlessStats {
    frames_shown: AtomicU64,
    open: AtomicBool,
}

impl HeadlessStats {
    #[must_use]
    pub fn frames_shown(&self) -> u64 {
        self.frames_shown.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}

/// Window backend without a window: frames are counted and dropped, and
/// polling only waits. Runs anywhere, including without a display server.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    stats: Arc<HeadlessStats>,
    size: Option<FrameSize>,
}

impl HeadlessBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stats(stats: Arc<HeadlessStats>) -> Self {
        Self { stats, size: None }
    }

    #[must_use]
    pub fn stats(&self) -> Arc<HeadlessStats> {
        Arc::clone(&self.stats)
    }
}

impl WindowBackend for HeadlessBackend {
    fn open(&mut self, title: &str, size: FrameSize) -> Result<(), BackendError> {
        debug!(title, width = size.width(), height = size.height(), "headless window opened");
        self.size = Some(size);
        self.stats.open.store(true, Ordering::Release);
        Ok(())
    }

    fn show(&mut self, frame: &Frame) -> Result<(), BackendError> {
        let Some(size) = self.size else {
            return Err(BackendError::Present("window is not open".to_string()));
        };

        if frame.width() != size.width() || frame.height() != size.height() {
            return Err(BackendError::Present(format!(
                "frame is {}x{}, window is {}x{}",
                frame.width(),
                frame.height(),
                size.width(),
                size.height()
            )));
        }

        self.stats.frames_shown.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }

    fn poll(&mut self, wait: Duration) -> Result<PolledInput, BackendError> {
        thread::sleep(wait);
        Ok(PolledInput::Nothing)
    }

    fn close_all(&mut self) {
        self.size = None;
        self.stats.open.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::display::{DisplayConfig, DisplayLoop, LoopExit};
    use std::time::Instant;

    fn size(width: u32, height: u32) -> FrameSize {
        FrameSize::new(width, height).unwrap()
    }

    #[test]
    fn test_show_before_open_fails() {
        let mut backend = HeadlessBackend::new();

        let result = backend.show(&Frame::zeroed(size(2, 2)));

        assert!(matches!(result, Err(BackendError::Present(_))));
    }

    #[test]
    fn test_show_counts_frames_of_window_size() {
        let mut backend = HeadlessBackend::new();
        let stats = backend.stats();
        backend.open("Display", size(4, 3)).unwrap();

        backend.show(&Frame::zeroed(size(4, 3))).unwrap();
        backend.show(&Frame::zeroed(size(4, 3))).unwrap();

        assert_eq!(stats.frames_shown(), 2);
        assert!(stats.is_open());
    }

    #[test]
    fn test_show_rejects_mismatched_frame() {
        let mut backend = HeadlessBackend::new();
        backend.open("Display", size(4, 3)).unwrap();

        assert!(backend.show(&Frame::zeroed(size(3, 4))).is_err());
    }

    #[test]
    fn test_poll_waits_and_reports_nothing() {
        let mut backend = HeadlessBackend::new();
        let start = Instant::now();

        let input = backend.poll(Duration::from_millis(10)).unwrap();

        assert_eq!(input, PolledInput::Nothing);
        assert!(start.elapsed() >= Duration::from_millis(10));
    }

    #[test]
    fn test_drives_display_loop_until_stopped() {
        let stats = Arc::new(HeadlessStats::default());
        let backend_stats = Arc::clone(&stats);
        let mut display = DisplayLoop::new(DisplayConfig::default().with_size(16, 12)).unwrap();

        display
            .start(move || Ok::<_, BackendError>(HeadlessBackend::with_stats(backend_stats)))
            .unwrap();

        let start = Instant::now();
        while stats.frames_shown() < 3 && start.elapsed() < Duration::from_secs(2) {
            thread::sleep(Duration::from_millis(5));
        }
        display.stop();

        assert_eq!(display.join().unwrap(), LoopExit::StopRequested);
        assert!(stats.frames_shown() >= 3);
        assert!(!stats.is_open());
    }
}

use std::time::{Duration, Instant};

pub const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Publish-rate meter that closes a measurement window at the first event at
/// least [`FPS_WINDOW`] after the previous window closed.
///
/// The rate only changes when a window closes, so bursts inside a window do
/// not show up until then.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    frame_count: u64,
    window_start: Instant,
    fps: f64,
}

impl FpsMeter {
    #[must_use]
    pub fn new(started_at: Instant) -> Self {
        Self {
            frame_count: 0,
            window_start: started_at,
            fps: 0.0,
        }
    }

    /// Counts one event at `now`. Returns the new rate when a window closed.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        self.frame_count += 1;

        let elapsed = now.saturating_duration_since(self.window_start);

        if elapsed < FPS_WINDOW {
            return None;
        }

        self.fps = self.frame_count as f64 / elapsed.as_secs_f64();
        self.frame_count = 0;
        self.window_start = now;

        Some(self.fps)
    }

    /// Last computed rate; `0.0` until the first window closes.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    #[must_use]
    pub fn pending_count(&self) -> u64 {
        self.frame_count
    }
}

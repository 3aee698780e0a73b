use std::time::Duration;

use crate::core::data::errors::InvalidFrameError;
use crate::core::data::frame_size::FrameSize;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_DISPLAY_NAME: &str = "Display";
pub const DEFAULT_QUIT_KEY: char = 'q';
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Per-display settings: presentation geometry, window title and input handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Every published frame is stretched to this width.
    pub width: u32,
    /// Every published frame is stretched to this height.
    pub height: u32,
    /// Window title.
    pub display_name: String,
    /// Key that ends the display loop when pressed in the window.
    pub quit_key: char,
    /// Upper bound on how long each render pass waits for input.
    pub poll_interval: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            quit_key: DEFAULT_QUIT_KEY,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    #[must_use]
    pub fn with_quit_key(mut self, quit_key: char) -> Self {
        self.quit_key = quit_key;
        self
    }

    #[must_use]
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn frame_size(&self) -> Result<FrameSize, InvalidFrameError> {
        FrameSize::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.display_name, "Display");
        assert_eq!(config.quit_key, 'q');
        assert_eq!(config.poll_interval, Duration::from_millis(1));
    }

    #[test]
    fn test_builders_override_fields() {
        let config = DisplayConfig::default()
            .with_size(320, 240)
            .with_display_name("Pose")
            .with_quit_key('x')
            .with_poll_interval(Duration::from_millis(5));

        assert_eq!(config.frame_size().unwrap(), FrameSize::new(320, 240).unwrap());
        assert_eq!(config.display_name, "Pose");
        assert_eq!(config.quit_key, 'x');
        assert_eq!(config.poll_interval, Duration::from_millis(5));
    }

    #[test]
    fn test_frame_size_rejects_degenerate_geometry() {
        let config = DisplayConfig::default().with_size(0, 240);

        assert_eq!(
            config.frame_size(),
            Err(InvalidFrameError::ZeroSized { width: 0, height: 240 })
        );
    }
}

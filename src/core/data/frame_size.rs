use crate::core::data::errors::InvalidFrameError;

/// Width and height of a frame in pixels, both guaranteed non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameSize {
    width: u32,
    height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self, InvalidFrameError> {
        if width == 0 || height == 0 {
            return Err(InvalidFrameError::ZeroSized { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes an RGB frame of this size occupies.
    #[must_use]
    pub fn rgb_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

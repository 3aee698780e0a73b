use thiserror::Error;

use crate::core::data::point::Point;

/// Raised when pixel data cannot form a valid frame, or when a frame cannot be
/// resized to the presentation geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFrameError {
    #[error("frame dimensions must be non-zero: {width}x{height}")]
    ZeroSized { width: u32, height: u32 },

    #[error("frame of {width}x{height} needs {expected} bytes of RGB data, got {actual}")]
    DataLengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("pixel at x:{}, y:{} outside of {width}x{height} frame", .pixel.x, .pixel.y)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
}

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb};

use crate::core::data::errors::InvalidFrameError;
use crate::core::data::frame::Frame;
use crate::core::data::frame_size::FrameSize;

/// Stretches `frame` to exactly `target` using bilinear filtering.
///
/// The aspect ratio is not preserved. Frames that already have the target
/// size are copied without resampling.
pub fn resize_frame(frame: &Frame, target: FrameSize) -> Result<Frame, InvalidFrameError> {
    if frame.is_empty() {
        return Err(InvalidFrameError::ZeroSized {
            width: frame.width(),
            height: frame.height(),
        });
    }

    if frame.width() == target.width() && frame.height() == target.height() {
        return Ok(frame.clone());
    }

    let source: ImageBuffer<Rgb<u8>, &[u8]> =
        ImageBuffer::from_raw(frame.width(), frame.height(), frame.data()).ok_or(
            InvalidFrameError::DataLengthMismatch {
                width: frame.width(),
                height: frame.height(),
                expected: frame.width() as usize * frame.height() as usize * 3,
                actual: frame.data().len(),
            },
        )?;

    let resized = imageops::resize(&source, target.width(), target.height(), FilterType::Triangle);

    Ok(Frame::from(resized))
}

/// Like [`resize_frame`], but hands `frame` back untouched when it already has
/// the target size.
pub fn fit_to_size(frame: Frame, target: FrameSize) -> Result<Frame, InvalidFrameError> {
    if !frame.is_empty() && frame.width() == target.width() && frame.height() == target.height() {
        return Ok(frame);
    }

    resize_frame(&frame, target)
}

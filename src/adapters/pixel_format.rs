//! Pixel format conversion for presentation surfaces.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("RGB buffer length {0} is not a multiple of 3")]
    PartialPixel(usize),

    #[error("RGBA buffer holds {actual} bytes, {expected} needed")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Number of RGBA bytes needed for `rgb_len` bytes of RGB data.
#[must_use]
pub fn rgba_len(rgb_len: usize) -> usize {
    rgb_len / 3 * 4
}

/// Expands packed RGB into packed RGBA with opaque alpha.
pub fn rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::PartialPixel(src.len()));
    }

    let expected = rgba_len(src.len());
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_rgba_known_values() {
        let src = [
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
        ];
        let mut dst = [0; 12];

        rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(dst, [255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_rgb_to_rgba_empty_buffers() {
        let mut dst: [u8; 0] = [];

        assert_eq!(rgb_to_rgba(&[], &mut dst), Ok(()));
    }

    #[test]
    fn test_rgb_to_rgba_rejects_partial_pixel() {
        let mut dst = [0; 4];

        assert_eq!(rgb_to_rgba(&[1, 2], &mut dst), Err(PixelFormatError::PartialPixel(2)));
    }

    #[test]
    fn test_rgb_to_rgba_rejects_wrong_destination() {
        let mut dst = [7; 6];

        assert_eq!(
            rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst),
            Err(PixelFormatError::LengthMismatch { expected: 8, actual: 6 })
        );
        assert_eq!(dst, [7; 6]);
    }

    #[test]
    fn test_rgba_len() {
        assert_eq!(rgba_len(800 * 600 * 3), 800 * 600 * 4);
    }
}

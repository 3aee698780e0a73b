use image::RgbImage;

use crate::core::data::colour::Colour;
use crate::core::data::errors::InvalidFrameError;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;

pub type FrameData = Vec<u8>;

/// One still image: a row-major grid of RGB pixels, 3 bytes per pixel.
///
/// A frame may be zero-sized so producers can hand over whatever their source
/// gave them; the frame buffer rejects degenerate frames when resizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: FrameData,
}

impl Frame {
    /// An all-black frame of the given size.
    #[must_use]
    pub fn zeroed(size: FrameSize) -> Self {
        Self {
            width: size.width(),
            height: size.height(),
            data: vec![0; size.rgb_len()],
        }
    }

    pub fn from_rgb(width: u32, height: u32, data: FrameData) -> Result<Self, InvalidFrameError> {
        let expected = width as usize * height as usize * 3;

        if expected != data.len() {
            return Err(InvalidFrameError::DataLengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { width, height, data })
    }

    /// A frame of the given size with every pixel set to `colour`.
    #[must_use]
    pub fn filled(size: FrameSize, colour: Colour) -> Self {
        let data = [colour.r, colour.g, colour.b].repeat(size.width() as usize * size.height() as usize);

        Self {
            width: size.width(),
            height: size.height(),
            data,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The frame's size, or `None` when either dimension is zero.
    #[must_use]
    pub fn size(&self) -> Option<FrameSize> {
        FrameSize::new(self.width, self.height).ok()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[must_use]
    pub fn into_data(self) -> FrameData {
        self.data
    }

    /// Converts into an `image` buffer; `None` for zero-sized frames.
    #[must_use]
    pub fn into_image(self) -> Option<RgbImage> {
        if self.is_empty() {
            return None;
        }

        RgbImage::from_raw(self.width, self.height, self.data)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < i64::from(self.width)
            && (point.y as i64) < i64::from(self.height)
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        let index = self.index_of(point)?;

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    pub fn set_pixel(&mut self, point: Point, colour: Colour) -> Result<(), InvalidFrameError> {
        let Some(index) = self.index_of(point) else {
            return Err(InvalidFrameError::PixelOutsideBounds {
                pixel: point,
                width: self.width,
                height: self.height,
            });
        };

        self.data[index] = colour.r;
        self.data[index + 1] = colour.g;
        self.data[index + 2] = colour.b;

        Ok(())
    }

    /// Writes the pixel if it lies inside the frame and ignores it otherwise.
    pub fn set_pixel_clipped(&mut self, point: Point, colour: Colour) {
        if let Some(index) = self.index_of(point) {
            self.data[index] = colour.r;
            self.data[index + 1] = colour.g;
            self.data[index + 2] = colour.b;
        }
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some((point.y as usize * self.width as usize + point.x as usize) * 3)
    }
}

impl From<RgbImage> for Frame {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();

        Self {
            width,
            height,
            data: image.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> FrameSize {
        FrameSize::new(width, height).unwrap()
    }

    #[test]
    fn test_zeroed_creates_black_frame() {
        let frame = Frame::zeroed(size(10, 10));

        assert_eq!(frame.width(), 10);
        assert_eq!(frame.height(), 10);
        assert_eq!(frame.data().len(), 300);
        assert!(frame.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_rgb_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let frame = Frame::from_rgb(2, 2, data.clone()).unwrap();

        assert_eq!(frame.data(), data.as_slice());
        assert_eq!(frame.pixel(Point { x: 0, y: 1 }), Some(Colour::BLUE));
    }

    #[test]
    fn test_from_rgb_wrong_length() {
        let result = Frame::from_rgb(2, 2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            InvalidFrameError::DataLengthMismatch {
                width: 2,
                height: 2,
                expected: 12,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_from_rgb_allows_empty_frame() {
        let frame = Frame::from_rgb(0, 480, vec![]).unwrap();

        assert!(frame.is_empty());
        assert_eq!(frame.size(), None);
    }

    #[test]
    fn test_filled_sets_every_pixel() {
        let frame = Frame::filled(size(3, 2), Colour { r: 1, g: 2, b: 3 });

        assert_eq!(frame.data(), &[1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut frame = Frame::zeroed(size(3, 3));

        frame.set_pixel(Point { x: 2, y: 2 }, Colour::BLUE).unwrap();

        assert_eq!(&frame.data()[24..27], &[0, 0, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut frame = Frame::zeroed(size(3, 3));

        let result = frame.set_pixel(Point { x: -1, y: 1 }, Colour::RED);

        assert_eq!(
            result,
            Err(InvalidFrameError::PixelOutsideBounds {
                pixel: Point { x: -1, y: 1 },
                width: 3,
                height: 3,
            })
        );
        assert!(frame.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_clipped_ignores_outside_points() {
        let mut frame = Frame::zeroed(size(2, 2));

        frame.set_pixel_clipped(Point { x: 5, y: 0 }, Colour::WHITE);
        frame.set_pixel_clipped(Point { x: 1, y: 0 }, Colour::WHITE);

        assert_eq!(frame.pixel(Point { x: 1, y: 0 }), Some(Colour::WHITE));
        assert_eq!(frame.data().iter().filter(|&&b| b == 255).count(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Frame::zeroed(size(2, 2));
        let mut copy = original.clone();

        copy.set_pixel(Point { x: 0, y: 0 }, Colour::RED).unwrap();

        assert_eq!(original.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_rgb_image_conversion() {
        let image = RgbImage::from_pixel(4, 2, image::Rgb([9, 8, 7]));

        let frame = Frame::from(image);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.pixel(Point { x: 3, y: 1 }), Some(Colour { r: 9, g: 8, b: 7 }));

        let back = frame.into_image().unwrap();
        assert_eq!(back.get_pixel(0, 0), &image::Rgb([9, 8, 7]));
        assert_eq!(Frame::from_rgb(0, 3, vec![]).unwrap().into_image(), None);
    }
}

use std::f32::consts::TAU;

use crate::core::data::colour::Colour;
use crate::core::data::frame::Frame;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::point::Point;
use crate::overlays::Landmark;

/// Connections between the landmarks returned by [`figure_landmarks`]:
/// head-neck, neck-hips, both arms and both legs.
pub const FIGURE_CONNECTIONS: [(usize, usize); 5] = [(0, 1), (1, 2), (1, 3), (1, 4), (2, 5)];

/// Synthetic video source: a scrolling colour gradient with a white bar
/// sweeping across it, one step per frame.
#[derive(Debug, Clone)]
pub struct TestPattern {
    size: FrameSize,
    tick: u64,
}

impl TestPattern {
    #[must_use]
    pub fn new(size: FrameSize) -> Self {
        Self { size, tick: 0 }
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn next_frame(&mut self) -> Frame {
        let width = self.size.width();
        let height = self.size.height();
        let shift = (self.tick % u64::from(width)) as u32;
        let blue = (self.tick % 256) as u8;
        let bar_x = shift as i32;

        let mut frame = Frame::zeroed(self.size);

        for y in 0..height {
            for x in 0..width {
                let colour = Colour {
                    r: ((x + shift) % width * 255 / width) as u8,
                    g: (y * 255 / height) as u8,
                    b: blue,
                };
                frame.set_pixel_clipped(Point { x: x as i32, y: y as i32 }, colour);
            }
        }

        for y in 0..height as i32 {
            frame.set_pixel_clipped(Point { x: bar_x, y }, Colour::WHITE);
        }

        self.tick += 1;
        frame
    }
}

/// A six-point stick figure that sways as `tick` advances.
#[must_use]
pub fn figure_landmarks(tick: u64) -> Vec<Landmark> {
    let phase = (tick % 120) as f32 / 120.0 * TAU;
    let sway = phase.sin() * 0.1;

    vec![
        Landmark { x: 0.5 + sway, y: 0.2 },
        Landmark { x: 0.5 + sway * 0.8, y: 0.35 },
        Landmark { x: 0.5 + sway * 0.5, y: 0.6 },
        Landmark { x: 0.3 + sway, y: 0.45 + phase.cos() * 0.05 },
        Landmark { x: 0.7 + sway, y: 0.45 - phase.cos() * 0.05 },
        Landmark { x: 0.5 + sway * 0.2, y: 0.85 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_frames_have_source_size() {
        let mut pattern = TestPattern::new(FrameSize::new(64, 36).unwrap());

        let frame = pattern.next_frame();

        assert_eq!((frame.width(), frame.height()), (64, 36));
        assert_eq!(pattern.tick(), 1);
    }

    #[test]
    fn test_pattern_bar_moves_each_frame() {
        let mut pattern = TestPattern::new(FrameSize::new(8, 4).unwrap());

        let first = pattern.next_frame();
        let second = pattern.next_frame();

        assert_eq!(first.pixel(Point { x: 0, y: 2 }), Some(Colour::WHITE));
        assert_eq!(second.pixel(Point { x: 1, y: 2 }), Some(Colour::WHITE));
        assert_ne!(first, second);
    }

    #[test]
    fn test_figure_connections_are_in_range() {
        let landmarks = figure_landmarks(37);

        for (from, to) in FIGURE_CONNECTIONS {
            assert!(from < landmarks.len() && to < landmarks.len());
        }
    }
}

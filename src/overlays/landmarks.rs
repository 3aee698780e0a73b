use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::controllers::display::{Component, ComponentError};
use crate::core::actions::draw::{draw_disc, draw_line};
use crate::core::data::colour::Colour;
use crate::core::data::frame::Frame;
use crate::core::data::point::Point;

/// A landmark in normalised frame coordinates: `(0, 0)` is the top-left
/// corner and `(1, 1)` the bottom-right one. Values are clamped to
/// `[-1, 2]` before drawing, so wild detections stay near the frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    fn to_pixel(self, frame: &Frame) -> Point {
        let max_x = frame.width().saturating_sub(1) as f32;
        let max_y = frame.height().saturating_sub(1) as f32;

        Point {
            x: (self.x.clamp(-1.0, 2.0) * max_x).round() as i32,
            y: (self.y.clamp(-1.0, 2.0) * max_y).round() as i32,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LandmarkStyle {
    pub point_colour: Colour,
    pub line_colour: Colour,
    pub point_radius: i32,
}

impl Default for LandmarkStyle {
    fn default() -> Self {
        Self {
            point_colour: Colour::RED,
            line_colour: Colour::GREEN,
            point_radius: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LandmarkError {
    #[error("connection refers to landmark {index} but only {count} are set")]
    MissingLandmark { index: usize, count: usize },
}

/// Draws the most recent set of landmarks and the lines connecting them.
///
/// Landmarks are replaced from the inference side with
/// [`LandmarkOverlay::set_landmarks`]; each render pass draws whatever set
/// is current. An empty set draws nothing.
pub struct LandmarkOverlay {
    name: String,
    connections: Vec<(usize, usize)>,
    style: LandmarkStyle,
    landmarks: Mutex<Vec<Landmark>>,
}

impl LandmarkOverlay {
    pub fn new(name: impl Into<String>, connections: Vec<(usize, usize)>) -> Self {
        Self {
            name: name.into(),
            connections,
            style: LandmarkStyle::default(),
            landmarks: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: LandmarkStyle) -> Self {
        self.style = style;
        self
    }

    pub fn set_landmarks(&self, landmarks: Vec<Landmark>) {
        *self.landmarks.lock().unwrap_or_else(PoisonError::into_inner) = landmarks;
    }

    pub fn clear(&self) {
        self.set_landmarks(Vec::new());
    }

    fn current(&self) -> Vec<Landmark> {
        self.landmarks.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Component for LandmarkOverlay {
    fn annotate(&self, frame: &mut Frame) -> Result<(), ComponentError> {
        let landmarks = self.current();

        if landmarks.is_empty() {
            return Ok(());
        }

        let points: Vec<Point> = landmarks.iter().map(|landmark| landmark.to_pixel(frame)).collect();

        for &(from, to) in &self.connections {
            let (Some(&start), Some(&end)) = (points.get(from), points.get(to)) else {
                let index = if from >= points.len() { from } else { to };
                return Err(ComponentError::failed(
                    self.name.clone(),
                    LandmarkError::MissingLandmark {
                        index,
                        count: points.len(),
                    },
                ));
            };

            draw_line(frame, start, end, self.style.line_colour);
        }

        for &point in &points {
            draw_disc(frame, point, self.style.point_radius, self.style.point_colour);
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_size::FrameSize;

    fn frame(width: u32, height: u32) -> Frame {
        Frame::zeroed(FrameSize::new(width, height).unwrap())
    }

    fn overlay(connections: Vec<(usize, usize)>) -> LandmarkOverlay {
        LandmarkOverlay::new("pose", connections).with_style(LandmarkStyle {
            point_colour: Colour::RED,
            line_colour: Colour::GREEN,
            point_radius: 0,
        })
    }

    #[test]
    fn test_no_landmarks_draws_nothing() {
        let overlay = overlay(vec![(0, 1)]);
        let mut frame = frame(10, 10);

        overlay.annotate(&mut frame).unwrap();

        assert!(frame.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_landmarks_map_to_frame_corners() {
        let overlay = overlay(vec![]);
        overlay.set_landmarks(vec![Landmark { x: 0.0, y: 0.0 }, Landmark { x: 1.0, y: 1.0 }]);
        let mut frame = frame(11, 5);

        overlay.annotate(&mut frame).unwrap();

        assert_eq!(frame.pixel(Point { x: 0, y: 0 }), Some(Colour::RED));
        assert_eq!(frame.pixel(Point { x: 10, y: 4 }), Some(Colour::RED));
    }

    #[test]
    fn test_connections_are_drawn_under_points() {
        let overlay = overlay(vec![(0, 1)]);
        overlay.set_landmarks(vec![Landmark { x: 0.0, y: 0.5 }, Landmark { x: 1.0, y: 0.5 }]);
        let mut frame = frame(9, 3);

        overlay.annotate(&mut frame).unwrap();

        assert_eq!(frame.pixel(Point { x: 0, y: 1 }), Some(Colour::RED));
        assert_eq!(frame.pixel(Point { x: 4, y: 1 }), Some(Colour::GREEN));
        assert_eq!(frame.pixel(Point { x: 8, y: 1 }), Some(Colour::RED));
    }

    #[test]
    fn test_missing_landmark_is_a_component_error() {
        let overlay = overlay(vec![(0, 3)]);
        overlay.set_landmarks(vec![Landmark { x: 0.5, y: 0.5 }]);
        let mut frame = frame(4, 4);

        let error = overlay.annotate(&mut frame).unwrap_err();

        assert_eq!(error.component(), "pose");
        assert_eq!(
            error.to_string(),
            "component pose failed: connection refers to landmark 3 but only 1 are set"
        );
    }

    #[test]
    fn test_far_off_landmarks_are_clamped_near_the_frame() {
        let overlay = overlay(vec![(0, 1), (1, 2)]);
        overlay.set_landmarks(vec![
            Landmark { x: f32::INFINITY, y: -1.0e30 },
            Landmark { x: 0.5, y: 0.5 },
            Landmark { x: f32::NAN, y: f32::NEG_INFINITY },
        ]);
        let mut frame = frame(10, 10);

        overlay.annotate(&mut frame).unwrap();

        assert_eq!(frame.pixel(Point { x: 5, y: 5 }), Some(Colour::RED));
        assert_eq!(
            Landmark { x: 1.0e9, y: -1.0e9 }.to_pixel(&frame),
            Point { x: 18, y: -9 }
        );
    }

    #[test]
    fn test_clear_removes_landmarks() {
        let overlay = overlay(vec![]);
        overlay.set_landmarks(vec![Landmark { x: 0.5, y: 0.5 }]);
        overlay.clear();
        let mut frame = frame(4, 4);

        overlay.annotate(&mut frame).unwrap();

        assert!(frame.data().iter().all(|&b| b == 0));
    }
}

//! Clipped drawing primitives for overlay components.
//!
//! Everything here draws straight into a frame and silently drops pixels that
//! fall outside it.

use crate::core::data::colour::Colour;
use crate::core::data::frame::Frame;
use crate::core::data::point::Point;

/// Filled disc; only the part overlapping the frame is visited.
pub fn draw_disc(frame: &mut Frame, centre: Point, radius: i32, colour: Colour) {
    let radius = i64::from(radius.max(0));
    let radius_squared = radius * radius;
    let (cx, cy) = (i64::from(centre.x), i64::from(centre.y));

    let xs = (cx - radius).max(0)..=(cx + radius).min(i64::from(frame.width()) - 1);
    let ys = (cy - radius).max(0)..=(cy + radius).min(i64::from(frame.height()) - 1);

    for y in ys {
        let dy = y - cy;
        for x in xs.clone() {
            let dx = x - cx;
            if dx * dx + dy * dy <= radius_squared {
                frame.set_pixel_clipped(
                    Point {
                        x: x as i32,
                        y: y as i32,
                    },
                    colour,
                );
            }
        }
    }
}

/// Bresenham line from `from` to `to`, both ends inclusive.
pub fn draw_line(frame: &mut Frame, from: Point, to: Point, colour: Colour) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut error = dx + dy;
    let mut current = from;

    loop {
        frame.set_pixel_clipped(current, colour);

        if current == to {
            break;
        }

        let doubled = 2 * error;

        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }

        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
    }
}

use crate::controllers::display::{Component, ComponentError};
use crate::core::data::frame::Frame;

/// A named component around an infallible drawing closure.
pub struct DrawFn<F> {
    name: String,
    draw: F,
}

pub fn draw_fn<F>(name: impl Into<String>, draw: F) -> DrawFn<F>
where
    F: Fn(&mut Frame) + Send + Sync,
{
    DrawFn {
        name: name.into(),
        draw,
    }
}

impl<F> Component for DrawFn<F>
where
    F: Fn(&mut Frame) + Send + Sync,
{
    fn annotate(&self, frame: &mut Frame) -> Result<(), ComponentError> {
        (self.draw)(frame);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::frame_size::FrameSize;
    use crate::core::data::point::Point;

    #[test]
    fn test_draw_fn_draws_and_reports_its_name() {
        let component = draw_fn("corner", |frame: &mut Frame| {
            frame.set_pixel_clipped(Point { x: 0, y: 0 }, Colour::RED);
        });
        let mut frame = Frame::zeroed(FrameSize::new(2, 2).unwrap());

        component.annotate(&mut frame).unwrap();

        assert_eq!(component.name(), "corner");
        assert_eq!(frame.pixel(Point { x: 0, y: 0 }), Some(Colour::RED));
    }
}

use crate::controllers::display::errors::component::ComponentError;
use crate::core::data::frame::Frame;

/// An overlay that annotates the render-pass frame in place.
///
/// Components run on the render thread, in registration order, against one
/// private copy of the current frame. They must not keep the frame beyond the
/// call.
pub trait Component: Send + Sync {
    fn annotate(&self, frame: &mut Frame) -> Result<(), ComponentError>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Component for F
where
    F: Fn(&mut Frame) -> Result<(), ComponentError> + Send + Sync,
{
    #[inline]
    fn annotate(&self, frame: &mut Frame) -> Result<(), ComponentError> {
        self(frame)
    }
}

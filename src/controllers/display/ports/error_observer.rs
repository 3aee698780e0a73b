use tracing::warn;

use crate::controllers::display::errors::component::ComponentError;

/// Receives component failures from the render thread.
pub trait ComponentErrorObserver: Send + Sync {
    fn on_component_error(&self, error: &ComponentError);
}

/// Default observer: logs the failure and lets the render pass continue.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogComponentErrors;

impl ComponentErrorObserver for LogComponentErrors {
    fn on_component_error(&self, error: &ComponentError) {
        warn!(component = error.component(), %error, "overlay component skipped for this frame");
    }
}

impl<F> ComponentErrorObserver for F
where
    F: Fn(&ComponentError) + Send + Sync,
{
    #[inline]
    fn on_component_error(&self, error: &ComponentError) {
        self(error);
    }
}

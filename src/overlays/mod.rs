//! Ready-made overlay components.

mod draw_fn;
mod landmarks;

pub use draw_fn::{DrawFn, draw_fn};
pub use landmarks::{Landmark, LandmarkError, LandmarkOverlay, LandmarkStyle};

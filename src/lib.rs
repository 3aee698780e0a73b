//! Live video display surface.
//!
//! Producers publish frames from any thread into a single-slot
//! [`FrameBuffer`]; a [`DisplayLoop`] shows the latest one from its own render
//! thread, running registered overlay [`Component`]s on a private copy first.

#[cfg(feature = "gui")]
mod adapters;
mod controllers;
mod core;
pub mod overlays;
pub mod presenters;
pub mod sources;

pub use crate::controllers::display::{
    BackendError, Component, ComponentError, ComponentErrorObserver, DisplayConfig, DisplayError,
    DisplayLoop, FrameBuffer, LogComponentErrors, LoopExit, LoopState, PolledInput, StopHandle,
    WindowBackend, WindowBackendFactory,
};
pub use crate::controllers::display::config::{
    DEFAULT_DISPLAY_NAME, DEFAULT_HEIGHT, DEFAULT_POLL_INTERVAL, DEFAULT_QUIT_KEY, DEFAULT_WIDTH,
};
pub use crate::core::actions::cancellation::{CancelToken, StopSignal};
pub use crate::core::actions::draw::{draw_disc, draw_line};
pub use crate::core::actions::resize_frame::resize_frame;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::errors::InvalidFrameError;
pub use crate::core::data::frame::Frame;
pub use crate::core::data::frame_size::FrameSize;
pub use crate::core::data::point::Point;
pub use crate::core::metrics::fps_meter::FpsMeter;
pub use crate::presenters::headless::{HeadlessBackend, HeadlessStats};
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::{PixelsBackend, PixelsBackendFactory};

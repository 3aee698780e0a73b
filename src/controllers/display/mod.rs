//! Live display controller.
//!
//! Producers publish frames into a [`FrameBuffer`] from any thread while a
//! [`DisplayLoop`] presents the most recent one from its own render thread.
//!
//! # Architecture
//!
//! The controller follows the ports & adapters pattern:
//! - **Input**: frames published through `FrameBuffer::set_frame`
//! - **Output**: a `WindowBackend` that shows frames and reports key presses
//! - **Overlays**: `Component`s that annotate each render pass's private copy

pub mod config;
mod display_loop;
pub mod errors;
mod frame_buffer;
pub mod ports;
mod state;

pub use config::DisplayConfig;
pub use display_loop::{DisplayLoop, StopHandle};
pub use errors::component::ComponentError;
pub use errors::display::{BackendError, DisplayError};
pub use frame_buffer::FrameBuffer;
pub use ports::component::Component;
pub use ports::error_observer::{ComponentErrorObserver, LogComponentErrors};
pub use ports::window_backend::{PolledInput, WindowBackend, WindowBackendFactory};
pub use state::{LoopExit, LoopState};

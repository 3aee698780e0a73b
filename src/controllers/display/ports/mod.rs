//! Port definitions for the display controller.
//!
//! Traits describing the collaborators the render loop talks to: overlay
//! components, the window system, and the sink for component failures.

pub mod component;
pub mod error_observer;
pub mod window_backend;

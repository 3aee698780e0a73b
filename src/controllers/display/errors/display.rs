use thiserror::Error;

use crate::core::data::errors::InvalidFrameError;

/// Failure reported by a window backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("failed to initialise window system: {0}")]
    Unavailable(String),

    #[error("failed to open window {title:?}: {message}")]
    Open { title: String, message: String },

    #[error("failed to present frame: {0}")]
    Present(String),

    #[error("failed to poll window input: {0}")]
    Poll(String),
}

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("invalid display configuration: {0}")]
    InvalidConfig(#[from] InvalidFrameError),

    #[error("display loop has already been started")]
    AlreadyStarted,

    #[error("display loop has no render thread to join")]
    NotStarted,

    #[error("failed to spawn render thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("window backend failed: {0}")]
    Backend(#[from] BackendError),

    #[error("render thread panicked: {0}")]
    RenderThreadPanicked(String),
}

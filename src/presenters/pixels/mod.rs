mod backend;

pub use backend::{PixelsBackend, PixelsBackendFactory};

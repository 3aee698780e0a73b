mod backend;

pub use backend::{HeadlessBackend, HeadlessStats};

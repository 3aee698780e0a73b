//! Synthetic frame sources for demos and soak runs.

mod paced_producer;
mod test_pattern;

pub use paced_producer::spawn_paced_producer;
pub use test_pattern::{FIGURE_CONNECTIONS, TestPattern, figure_landmarks};

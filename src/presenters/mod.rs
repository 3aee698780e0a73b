//! Window backends the display loop can present through.

pub mod headless;
#[cfg(feature = "gui")]
pub mod pixels;

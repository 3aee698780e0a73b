pub mod component;
pub mod display;

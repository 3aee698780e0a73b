pub mod colour;
pub mod errors;
pub mod frame;
pub mod frame_size;
pub mod point;

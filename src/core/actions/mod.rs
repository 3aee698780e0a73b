pub mod cancellation;
pub mod draw;
pub mod resize_frame;

pub mod fps_meter;

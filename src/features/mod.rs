pub mod camera;
pub mod datetime;
pub mod dimensions;
pub mod gps;
pub mod settings;

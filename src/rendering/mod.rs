pub mod bodies;
pub mod camera;

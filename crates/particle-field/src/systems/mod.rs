pub mod connections;
pub mod physics;
pub mod render;

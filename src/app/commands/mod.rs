pub mod enhance;
pub mod render;

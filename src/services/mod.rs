pub mod render;
pub mod sink;
pub mod validation;

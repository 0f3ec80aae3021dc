pub mod relay;
pub mod render;
pub mod shell;
pub mod styles;

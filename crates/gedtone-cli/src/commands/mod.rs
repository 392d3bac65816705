//! CLI command implementations

pub mod json_output;
pub mod render;
pub mod scale;
pub mod stats;

mod display;

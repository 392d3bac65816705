//! gedtone CLI library.
//!
//! This crate provides the core functionality for the gedtone CLI, including
//! input loading, logging setup, and the render/stats/scale commands.

pub mod commands;
pub mod input;
pub mod logging;

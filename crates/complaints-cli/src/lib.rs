//! CLI library components for the complaints pipeline.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

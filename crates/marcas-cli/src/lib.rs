//! CLI library components for the attendance consolidator.

pub mod cli;
pub mod logging;
pub mod pipeline;
pub mod summary;

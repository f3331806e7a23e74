//! CLI library components for the sweep cleaning tool.

pub mod logging;
pub mod pipeline;
pub mod summary;

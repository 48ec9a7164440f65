//! CLI command implementations.

pub mod generate;
pub mod plan_preview;
pub mod realtime_demo;
pub mod simulate;

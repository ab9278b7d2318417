//! CLI library components for the virtual import board builder.

pub mod logging;
pub mod pipeline;

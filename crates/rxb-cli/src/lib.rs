//! CLI library components for the `rxb` binary.

pub mod commands;
pub mod logging;

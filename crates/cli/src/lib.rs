//! Triage CLI library - commands and logging setup shared with the binary

pub mod commands;
pub mod logging;

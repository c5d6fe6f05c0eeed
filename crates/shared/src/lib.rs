//! # Triage Shared
//!
//! Error and configuration types used by the Triage binaries.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;

//! Domain Services - The verbs of Triage
//!
//! Everything here is pure: no I/O, no clocks, no global mutable state.
//! The allocator is the only stateful piece, and its state lives for one run.

pub mod allocator;
pub mod classifier;
pub mod enricher;
pub mod rationale;
pub mod scoring;
pub mod skill_matcher;

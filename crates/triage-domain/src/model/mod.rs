//! Domain Models - The vocabulary of Triage
//!
//! Tickets and agents come in from the outside world; enriched tickets and
//! assignments are derived here.

pub mod agent;
pub mod assignment;
pub mod dataset;
pub mod enriched;
pub mod severity;
pub mod skill;
pub mod ticket;

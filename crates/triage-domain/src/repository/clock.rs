//! Clock - Where "now" comes from
//!
//! Ticket age is measured against a single snapshot taken before enrichment,
//! so the clock is read once per run.

/// Source of the current time in epoch seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }
}

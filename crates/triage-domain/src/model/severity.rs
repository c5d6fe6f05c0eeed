//! Severity - How urgent a ticket is
//!
//! Four ordered tiers. The numeric tier feeds directly into priority and
//! scoring, so the discriminants are part of the contract.

/// Severity tier, 1 (low) to 4 (critical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

impl Severity {
    /// All tiers, highest first (the order rules are checked in)
    pub const DESCENDING: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Numeric tier in 1..=4
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// Tier as a float, for scoring arithmetic
    pub fn weight(self) -> f64 {
        f64::from(self.tier())
    }

    /// Keywords that put a ticket in this tier.
    ///
    /// `Low` is the fallback and has none.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Severity::Critical => &[
                "critical",
                "down",
                "outage",
                "production",
                "business-critical",
            ],
            Severity::High => &["slow", "performance", "security", "widespread"],
            Severity::Medium => &["unable", "error", "fails"],
            Severity::Low => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

//! EnrichedTicket - A ticket plus the features derived from its text and age
//!
//! Built once per ticket by the enricher and never modified afterwards.

use super::severity::Severity;
use super::skill::MatchedSkills;
use super::ticket::Ticket;

/// Ticket with severity, skill match, priority and age factor attached
#[derive(Debug, Clone)]
pub struct EnrichedTicket {
    ticket: Ticket,
    severity: Severity,
    matched_skills: MatchedSkills,
    priority: f64,
    age_factor: f64,
}

impl EnrichedTicket {
    pub fn new(
        ticket: Ticket,
        severity: Severity,
        matched_skills: MatchedSkills,
        priority: f64,
        age_factor: f64,
    ) -> Self {
        Self {
            ticket,
            severity,
            matched_skills,
            priority,
            age_factor,
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn matched_skills(&self) -> &MatchedSkills {
        &self.matched_skills
    }

    /// Sort key for processing order, higher first
    pub fn priority(&self) -> f64 {
        self.priority
    }

    pub fn age_factor(&self) -> f64 {
        self.age_factor
    }
}

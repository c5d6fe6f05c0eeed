//! triage inspect command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use shared::TriageConfig;
use triage_adapter::{JsonDatasetRepository, SystemClock};
use triage_domain::{Clock, EnrichedTicket, FixedClock, Severity};
use triage_usecase::InspectTicketsUseCase;

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Dataset file (overrides config)
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Current time in epoch seconds
    #[arg(long)]
    pub now: Option<f64>,
}

impl InspectCommand {
    pub fn run(&self, config: &TriageConfig) -> anyhow::Result<()> {
        let dataset = self
            .dataset
            .clone()
            .unwrap_or_else(|| config.dataset_path.clone());
        let clock = FixedClock(self.now.unwrap_or_else(|| SystemClock.now()));

        let enriched = InspectTicketsUseCase::new(JsonDatasetRepository::new(&dataset), clock)
            .execute()
            .with_context(|| format!("failed to inspect {}", dataset.display()))?;

        for ticket in &enriched {
            let severity = match ticket.severity() {
                Severity::Critical => style(ticket.severity()).red().bold(),
                Severity::High => style(ticket.severity()).yellow(),
                Severity::Medium => style(ticket.severity()).cyan(),
                Severity::Low => style(ticket.severity()).dim(),
            };
            println!(
                "{:<12} {:<8} {}",
                ticket.ticket().id().as_str(),
                severity,
                describe(ticket)
            );
        }
        Ok(())
    }
}

/// Priority, age factor and matched skills of one ticket
pub fn describe(ticket: &EnrichedTicket) -> String {
    let skills = if ticket.matched_skills().is_empty() {
        "-".to_string()
    } else {
        ticket
            .matched_skills()
            .iter()
            .map(|(category, weight)| format!("{}={}", category, weight))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "priority {:>6.2}  age {:>5.2}  skills {}",
        ticket.priority(),
        ticket.age_factor(),
        skills
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::{enrich, Ticket, TicketId};

    #[test]
    fn test_describe() {
        let now = 1_700_000_000.0;
        let ticket = enrich(
            &Ticket::new(
                TicketId::new("T1"),
                "VPN",
                "tunnel to office fails",
                now - 12.0 * 3600.0,
            ),
            now,
        );

        assert_eq!(
            describe(&ticket),
            "priority  32.00  age  0.50  skills VPN_Troubleshooting=4, Microsoft_365=2"
        );
    }

    #[test]
    fn test_describe_without_skills() {
        let now = 1_700_000_000.0;
        let ticket = enrich(&Ticket::new(TicketId::new("T2"), "Hello", "", now), now);

        assert!(describe(&ticket).ends_with("skills -"));
    }
}

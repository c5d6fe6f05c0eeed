//! Ticket enrichment - severity, skills, priority and age in one record

use crate::model::enriched::EnrichedTicket;
use crate::model::ticket::Ticket;
use crate::service::classifier::classify;
use crate::service::skill_matcher::match_skills;

/// Age beyond which priority stops growing
pub const PRIORITY_AGE_CAP_HOURS: f64 = 48.0;
/// Upper bound of the age factor
pub const AGE_FACTOR_CAP: f64 = 2.0;

/// Derive the feature record for one ticket.
///
/// Age is not clamped below, so a ticket dated in the future gets a reduced
/// or negative priority and age factor.
pub fn enrich(ticket: &Ticket, now: f64) -> EnrichedTicket {
    let text = ticket.text();
    let severity = classify(&text);
    let age_hours = ticket.age_hours(now);

    let priority = severity.weight() * 10.0 + age_hours.min(PRIORITY_AGE_CAP_HOURS);
    let age_factor = (age_hours / 24.0).min(AGE_FACTOR_CAP);

    EnrichedTicket::new(
        ticket.clone(),
        severity,
        match_skills(&text),
        priority,
        age_factor,
    )
}

/// Enrich a batch of tickets against one `now` snapshot.
///
/// With more than one worker the slice is split into contiguous chunks, each
/// enriched on its own scoped thread. Output order always matches input order.
pub fn enrich_all(tickets: &[Ticket], now: f64, workers: usize) -> Vec<EnrichedTicket> {
    if workers <= 1 || tickets.len() <= 1 {
        return tickets.iter().map(|t| enrich(t, now)).collect();
    }

    let chunk_size = tickets.len().div_ceil(workers);
    std::thread::scope(|scope| {
        let handles: Vec<_> = tickets
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || chunk.iter().map(|t| enrich(t, now)).collect::<Vec<_>>())
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

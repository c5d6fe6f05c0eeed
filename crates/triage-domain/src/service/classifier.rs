//! Severity classification by keyword containment

use crate::model::severity::Severity;

/// Classify ticket text into a severity tier.
///
/// Rules are checked highest tier first and the first hit wins. Matching is
/// substring containment on the lower-cased text, so "downtime" counts as
/// "down".
pub fn classify(text: &str) -> Severity {
    let text = text.to_lowercase();
    Severity::DESCENDING
        .into_iter()
        .find(|severity| severity.keywords().iter().any(|kw| text.contains(kw)))
        .unwrap_or(Severity::Low)
}

//! Agent/ticket suitability score

use crate::model::agent::Agent;
use crate::model::severity::Severity;
use crate::model::skill::MatchedSkills;

/// Penalty per ticket already on the agent's plate
pub const LOAD_PENALTY: f64 = 5.0;

/// Score how well `agent` fits a ticket with these features.
///
/// Agents that are not Available score exactly 0. Otherwise:
///
/// ```text
/// skill   = Σ proficiency(skill) * weight
/// exp     = experience_level * severity / 4
/// urgency = age_factor * severity
/// score   = skill + exp + urgency - current_load * 5
/// ```
///
/// Negative scores are normal for heavily loaded agents.
pub fn score(
    agent: &Agent,
    matched_skills: &MatchedSkills,
    severity: Severity,
    age_factor: f64,
) -> f64 {
    if !agent.is_available() {
        return 0.0;
    }

    let skill_score: f64 = matched_skills
        .iter()
        .map(|(category, weight)| f64::from(agent.proficiency_in(category)) * f64::from(weight))
        .sum();
    let exp_bonus = agent.experience_level() * (severity.weight() / 4.0);
    let load_penalty = f64::from(agent.current_load()) * LOAD_PENALTY;
    let urgency_bonus = age_factor * severity.weight();

    skill_score + exp_bonus + urgency_bonus - load_penalty
}

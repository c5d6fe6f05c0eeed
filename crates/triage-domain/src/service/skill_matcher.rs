//! Skill matching by exact whitespace tokens

use std::collections::HashSet;

use crate::model::skill::{MatchedSkills, SkillCategory};

/// Weight contributed by each keyword hit
pub const KEYWORD_WEIGHT: u32 = 2;

/// Unicode whitespace plus the ASCII separators FS, GS, RS and US.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Match ticket text against the skill catalogue.
///
/// The lower-cased text is split on separators into a token set and each
/// category scores `KEYWORD_WEIGHT` per keyword present as an exact token.
/// Punctuation stays attached to tokens and multi-word keywords never match.
pub fn match_skills(text: &str) -> MatchedSkills {
    let lowered = text.to_lowercase();
    let tokens: HashSet<&str> = lowered
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect();

    SkillCategory::ALL
        .into_iter()
        .map(|category| {
            let hits = category
                .keywords()
                .iter()
                .filter(|kw| tokens.contains(**kw))
                .count() as u32;
            (category, hits * KEYWORD_WEIGHT)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword() {
        let skills = match_skills("VPN not connecting");
        assert_eq!(skills.get(SkillCategory::VpnTroubleshooting), Some(2));
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_multiple_categories() {
        let skills = match_skills("Outlook email broken after laptop reboot");
        assert_eq!(skills.get(SkillCategory::Microsoft365), Some(4));
        assert_eq!(skills.get(SkillCategory::HardwareDiagnostics), Some(2));
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let once = match_skills("sql");
        let repeated = match_skills("sql SQL sql");
        assert_eq!(once, repeated);
    }

    #[test]
    fn test_more_keywords_score_higher() {
        let one = match_skills("database issue");
        let three = match_skills("database backup query issue");
        assert!(
            three.get(SkillCategory::DatabaseSql) > one.get(SkillCategory::DatabaseSql)
        );
        assert_eq!(three.get(SkillCategory::DatabaseSql), Some(6));
    }

    #[test]
    fn test_tokens_must_be_exact() {
        // "vpn," keeps its comma and "networking" is not "network"
        let skills = match_skills("vpn, networking");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_multi_word_keywords_never_match() {
        let skills = match_skills("active directory group policy app service connection dropping");
        assert!(!skills.contains(SkillCategory::ActiveDirectory));
        assert!(!skills.contains(SkillCategory::CloudAzure));
        assert!(!skills.contains(SkillCategory::VpnTroubleshooting));
        // "directory" alone is a Linux keyword
        assert_eq!(skills.get(SkillCategory::LinuxAdministration), Some(2));
    }

    #[test]
    fn test_ascii_separators_split_tokens() {
        let skills = match_skills("vpn\x1ctunnel\x1fdns");
        assert_eq!(skills.get(SkillCategory::VpnTroubleshooting), Some(4));
        assert_eq!(skills.get(SkillCategory::Networking), Some(2));
    }

    #[test]
    fn test_no_skill_match() {
        assert!(match_skills("random unrelated text").is_empty());
        assert!(match_skills("").is_empty());
    }
}

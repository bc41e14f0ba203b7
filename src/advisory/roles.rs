//! Target job title suggestions

use crate::processing::industry::IndustryDetector;
use crate::processing::taxonomy::{IndustryProfile, KeywordTaxonomy};
use std::collections::HashSet;

pub const MAX_TARGET_ROLES: usize = 8;

const BASE_ROLE_COUNT: usize = 3;
const SENIOR_PREFIXES: &[&str] = &["Senior", "Lead", "Principal"];
const MID_PREFIXES: &[&str] = &["Mid-Level", "Experienced"];
const GENERIC_ROLES: &[&str] = &["Professional", "Specialist"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    Entry,
    Mid,
    Senior,
}

impl Seniority {
    pub fn from_experience_score(score: u8) -> Self {
        if score >= 70 {
            Seniority::Senior
        } else if score >= 40 {
            Seniority::Mid
        } else {
            Seniority::Entry
        }
    }

    fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Seniority::Senior => SENIOR_PREFIXES,
            Seniority::Mid => MID_PREFIXES,
            Seniority::Entry => &[],
        }
    }
}

pub struct RoleSuggester<'t> {
    detector: IndustryDetector<'t>,
}

impl<'t> RoleSuggester<'t> {
    pub fn new(taxonomy: &'t KeywordTaxonomy) -> Self {
        Self {
            detector: IndustryDetector::new(taxonomy),
        }
    }

    pub fn suggest(&self, tokens: &[String], experience_score: u8) -> Vec<String> {
        let profile = self.detector.detect(tokens);
        Self::suggest_for(profile, Seniority::from_experience_score(experience_score))
    }

    /// Prefixed base roles of the profile followed by the generic roles,
    /// first occurrence kept, capped at `MAX_TARGET_ROLES`
    pub fn suggest_for(profile: &IndustryProfile, seniority: Seniority) -> Vec<String> {
        let prefixes = seniority.prefixes();

        let mut roles: Vec<String> = profile
            .roles
            .iter()
            .take(BASE_ROLE_COUNT)
            .enumerate()
            .map(|(i, role)| match prefixes.get(i) {
                Some(prefix) => format!("{} {}", prefix, role),
                None => role.clone(),
            })
            .collect();

        roles.extend(GENERIC_ROLES.iter().map(|r| r.to_string()));

        let mut seen = HashSet::new();
        roles.retain(|role| seen.insert(role.clone()));
        roles.truncate(MAX_TARGET_ROLES);
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_senior_prefixes() {
        let suggester = RoleSuggester::new(KeywordTaxonomy::global());
        let roles = suggester.suggest(&tokens(&["softwar", "python"]), 85);

        assert_eq!(
            roles,
            vec![
                "Senior Software Engineer",
                "Lead Full Stack Developer",
                "Principal Cloud Solutions Architect",
                "Professional",
                "Specialist",
            ]
        );
    }

    #[test]
    fn test_mid_prefixes_stop_at_list_length() {
        let suggester = RoleSuggester::new(KeywordTaxonomy::global());
        let roles = suggester.suggest(&tokens(&["softwar"]), 50);

        assert_eq!(roles[0], "Mid-Level Software Engineer");
        assert_eq!(roles[1], "Experienced Full Stack Developer");
        assert_eq!(roles[2], "Cloud Solutions Architect");
    }

    #[test]
    fn test_entry_general_roles() {
        let suggester = RoleSuggester::new(KeywordTaxonomy::global());
        let roles = suggester.suggest(&[], 10);

        assert_eq!(roles[0], "Project Coordinator");
        assert_eq!(roles.last().map(String::as_str), Some("Specialist"));
        assert!(roles.len() <= MAX_TARGET_ROLES);
    }

    #[test]
    fn test_duplicate_roles_keep_first_occurrence() {
        let mut profile = KeywordTaxonomy::global().general.clone();
        profile.roles = vec![
            "Professional".to_string(),
            "Analyst".to_string(),
            "Analyst".to_string(),
            "Coordinator".to_string(),
        ];

        let roles = RoleSuggester::suggest_for(&profile, Seniority::Entry);
        assert_eq!(roles, vec!["Professional", "Analyst", "Specialist"]);
    }

    #[test]
    fn test_prefixed_duplicates_removed() {
        let mut profile = KeywordTaxonomy::global().general.clone();
        profile.roles = vec!["Specialist".to_string(); 3];

        let roles = RoleSuggester::suggest_for(&profile, Seniority::Mid);
        assert_eq!(
            roles,
            vec!["Mid-Level Specialist", "Experienced Specialist", "Specialist", "Professional"]
        );
    }

    #[test]
    fn test_long_role_template_stays_within_cap() {
        let mut profile = KeywordTaxonomy::global().general.clone();
        profile.roles = (0..20).map(|i| format!("Role {}", i)).collect();

        for seniority in [Seniority::Entry, Seniority::Mid, Seniority::Senior] {
            let roles = RoleSuggester::suggest_for(&profile, seniority);
            assert!(roles.len() <= MAX_TARGET_ROLES);
            assert_eq!(roles.len(), 5);
            assert_eq!(&roles[3..], &["Professional", "Specialist"]);
        }
    }

    #[test]
    fn test_seniority_bands() {
        assert_eq!(Seniority::from_experience_score(70), Seniority::Senior);
        assert_eq!(Seniority::from_experience_score(69), Seniority::Mid);
        assert_eq!(Seniority::from_experience_score(40), Seniority::Mid);
        assert_eq!(Seniority::from_experience_score(39), Seniority::Entry);
    }
}

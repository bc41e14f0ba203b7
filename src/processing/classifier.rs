//! Seniority classification from the experience score and stated years

use crate::error::{AssessorError, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const YEARS_PATTERN: &str = r"(?i)\b(\d+)\+?\s*(?:years?|yrs?)\b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceTier {
    #[serde(rename = "Entry Level")]
    Entry,
    #[serde(rename = "Mid Level")]
    Mid,
    #[serde(rename = "Senior Level")]
    Senior,
}

impl ExperienceTier {
    /// Key used for salary band lookup
    pub fn key(&self) -> &'static str {
        match self {
            ExperienceTier::Entry => "entry",
            ExperienceTier::Mid => "mid",
            ExperienceTier::Senior => "senior",
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceTier::Entry => write!(f, "Entry Level"),
            ExperienceTier::Mid => write!(f, "Mid Level"),
            ExperienceTier::Senior => write!(f, "Senior Level"),
        }
    }
}

pub struct ExperienceClassifier {
    years_regex: Regex,
}

impl ExperienceClassifier {
    pub fn new() -> Result<Self> {
        let years_regex = Regex::new(YEARS_PATTERN)
            .map_err(|e| AssessorError::Analysis(format!("Failed to compile years pattern: {}", e)))?;

        Ok(Self { years_regex })
    }

    /// Largest "N years" figure stated in the text, 0 when none parses
    pub fn max_years(&self, raw_text: &str) -> u32 {
        self.years_regex
            .captures_iter(raw_text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }

    pub fn classify(&self, experience_score: u8, raw_text: &str) -> ExperienceTier {
        let years = self.max_years(raw_text);

        let tier = if years >= 5 || experience_score >= 80 {
            ExperienceTier::Senior
        } else if years >= 2 || experience_score >= 60 {
            ExperienceTier::Mid
        } else {
            ExperienceTier::Entry
        };

        debug!(
            "Classified as {} (years: {}, experience score: {})",
            tier, years, experience_score
        );
        tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_take_precedence() {
        let classifier = ExperienceClassifier::new().unwrap();
        assert_eq!(classifier.classify(10, "7 years of experience"), ExperienceTier::Senior);
        assert_eq!(classifier.classify(10, "3 yrs in retail"), ExperienceTier::Mid);
        assert_eq!(classifier.classify(10, "1 year internship"), ExperienceTier::Entry);
    }

    #[test]
    fn test_score_thresholds() {
        let classifier = ExperienceClassifier::new().unwrap();
        assert_eq!(classifier.classify(80, ""), ExperienceTier::Senior);
        assert_eq!(classifier.classify(79, ""), ExperienceTier::Mid);
        assert_eq!(classifier.classify(60, ""), ExperienceTier::Mid);
        assert_eq!(classifier.classify(59, ""), ExperienceTier::Entry);
    }

    #[test]
    fn test_max_years() {
        let classifier = ExperienceClassifier::new().unwrap();
        assert_eq!(classifier.max_years("2 years here, 10+ years total, 4 Yrs there"), 10);
        assert_eq!(classifier.max_years("no numbers"), 0);
        // overflowing figures are skipped
        assert_eq!(classifier.max_years("99999999999999999999 years and 3 years"), 3);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&ExperienceTier::Senior).unwrap(), "\"Senior Level\"");
        assert_eq!(ExperienceTier::Mid.to_string(), "Mid Level");
        assert_eq!(ExperienceTier::Entry.key(), "entry");
    }
}

//! Per-section resume scoring from token mentions and raw-text signals

use crate::config::ScoringConfig;
use crate::error::{AssessorError, Result};
use crate::processing::taxonomy::{count_pattern_tokens, KeywordTaxonomy};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

const BULLET_CHARACTERS: &[&str] = &["•", "◦", "▪", "‣", "●", "■", "-", "*"];

const TIME_EXPRESSION_PATTERN: &str =
    r"(?i)\b(?:(?:19|20)\d{2}|\d+\+?\s*(?:years?|yrs?|months?|mos?)|present|current)\b";
const QUANTIFIED_RESULT_PATTERN: &str = r"(?i)\b\d+(?:\.\d+)?\s*(?:%|k\b|m\b|g\b)|\b(?:increased|decreased|improved|reduced|grew|saved|generated|boosted|exceeded)\b";
const CAPITALIZED_WORD_PATTERN: &str = r"\b[A-Z][a-z]+\b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionScores {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub projects: u8,
    pub achievements: u8,
    pub formatting: u8,
}

impl SectionScores {
    /// Section names paired with their scores, in report order
    pub fn named(&self) -> [(&'static str, u8); 6] {
        [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("projects", self.projects),
            ("achievements", self.achievements),
            ("formatting", self.formatting),
        ]
    }

    /// Weighted combination of the six sections, rounded and clamped to `[0, 100]`
    pub fn overall(&self, weights: &ScoringConfig) -> u8 {
        let weighted = self.skills as f64 * weights.skills_weight
            + self.experience as f64 * weights.experience_weight
            + self.education as f64 * weights.education_weight
            + self.projects as f64 * weights.projects_weight
            + self.achievements as f64 * weights.achievements_weight
            + self.formatting as f64 * weights.formatting_weight;

        if weighted.is_finite() {
            weighted.round().clamp(0.0, 100.0) as u8
        } else {
            0
        }
    }
}

fn clamp_score(raw: usize) -> u8 {
    raw.min(100) as u8
}

pub struct SectionScorer<'t> {
    taxonomy: &'t KeywordTaxonomy,
    time_expressions: Regex,
    quantified_results: Regex,
    capitalized_words: Regex,
    bullet_matcher: AhoCorasick,
}

impl<'t> SectionScorer<'t> {
    pub fn new(taxonomy: &'t KeywordTaxonomy) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| AssessorError::Analysis(format!("Failed to compile scoring pattern: {}", e)))
        };

        let bullet_matcher = AhoCorasick::new(BULLET_CHARACTERS)
            .map_err(|e| AssessorError::Analysis(format!("Failed to build bullet matcher: {}", e)))?;

        Ok(Self {
            taxonomy,
            time_expressions: compile(TIME_EXPRESSION_PATTERN)?,
            quantified_results: compile(QUANTIFIED_RESULT_PATTERN)?,
            capitalized_words: compile(CAPITALIZED_WORD_PATTERN)?,
            bullet_matcher,
        })
    }

    pub fn score(&self, raw_text: &str, tokens: &[String]) -> SectionScores {
        let scores = SectionScores {
            skills: self.score_skills(tokens),
            experience: self.score_experience(raw_text, tokens),
            education: self.score_education(tokens),
            projects: self.score_projects(tokens),
            achievements: self.score_achievements(raw_text, tokens),
            formatting: self.score_formatting(raw_text),
        };

        debug!("Section scores: {:?}", scores);
        scores
    }

    pub fn score_skills(&self, tokens: &[String]) -> u8 {
        let mentions = count_pattern_tokens(tokens, &self.taxonomy.patterns.skills);
        let max_category_matches = self
            .taxonomy
            .technical_categories()
            .map(|category| category.count_containing_tokens(tokens))
            .max()
            .unwrap_or(0);

        clamp_score(mentions * 8 + max_category_matches * 6)
    }

    pub fn score_experience(&self, raw_text: &str, tokens: &[String]) -> u8 {
        let mentions = count_pattern_tokens(tokens, &self.taxonomy.patterns.experience);
        let time_expressions = self.time_expressions.find_iter(raw_text).count();

        clamp_score(mentions * 10 + time_expressions * 5)
    }

    pub fn score_education(&self, tokens: &[String]) -> u8 {
        clamp_score(count_pattern_tokens(tokens, &self.taxonomy.patterns.education) * 15)
    }

    pub fn score_projects(&self, tokens: &[String]) -> u8 {
        clamp_score(count_pattern_tokens(tokens, &self.taxonomy.patterns.projects) * 20)
    }

    pub fn score_achievements(&self, raw_text: &str, tokens: &[String]) -> u8 {
        let mentions = count_pattern_tokens(tokens, &self.taxonomy.patterns.achievements);
        let quantified = self.quantified_results.find_iter(raw_text).count();

        clamp_score(mentions * 10 + quantified * 5)
    }

    pub fn score_formatting(&self, raw_text: &str) -> u8 {
        let newlines = raw_text.matches('\n').count();
        let bullets = self.bullet_matcher.find_iter(raw_text).count();
        let colons = raw_text.matches(':').count();
        let capitalized = self.capitalized_words.find_iter(raw_text).count();

        let mut score = 0;
        score += if newlines > 10 { 25 } else { 10 };
        score += if bullets > 5 { 25 } else { 10 };
        score += if colons > 3 { 20 } else { 5 };
        score += if capitalized > 20 { 20 } else { 10 };

        clamp_score(score)
    }
}

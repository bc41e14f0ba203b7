//! Executive summary, strengths, weaknesses and primary skill ranking

use crate::processing::classifier::ExperienceTier;
use crate::processing::features::FeatureVector;
use crate::processing::section_scorer::SectionScores;
use crate::processing::taxonomy::{Industry, KeywordTaxonomy};
use crate::processing::text_processor::{TextPreprocessor, TokenSequence};
use std::collections::HashSet;

pub const MAX_PRIMARY_SKILLS: usize = 8;

const STRENGTH_THRESHOLD: u8 = 70;
const WEAKNESS_THRESHOLD: u8 = 50;

/// A skill keyword with its stemmed token form
#[derive(Debug, Clone)]
struct StemmedSkill {
    name: String,
    stems: Vec<String>,
}

pub struct SummaryWriter {
    skills: Vec<StemmedSkill>,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl SummaryWriter {
    /// Stem every skill keyword once, in taxonomy order
    pub fn new(taxonomy: &KeywordTaxonomy, preprocessor: &TextPreprocessor) -> Self {
        let mut seen = HashSet::new();
        let skills = taxonomy
            .skill_categories
            .iter()
            .flat_map(|category| category.keywords.iter())
            .filter(|keyword| seen.insert(keyword.to_string()))
            .map(|keyword| StemmedSkill {
                name: keyword.clone(),
                stems: preprocessor.stem_phrase(keyword),
            })
            .filter(|skill| !skill.stems.is_empty())
            .collect();

        Self { skills }
    }

    pub fn strengths(&self, scores: &SectionScores) -> Vec<String> {
        scores
            .named()
            .iter()
            .filter(|(_, score)| *score >= STRENGTH_THRESHOLD)
            .map(|(section, score)| format!("Strong {} section ({}/100)", section, score))
            .collect()
    }

    pub fn weaknesses(&self, scores: &SectionScores) -> Vec<String> {
        scores
            .named()
            .iter()
            .filter(|(_, score)| *score < WEAKNESS_THRESHOLD)
            .map(|(section, score)| {
                format!("{} section needs improvement ({}/100)", capitalize(section), score)
            })
            .collect()
    }

    /// Skill keywords found in the tokens, most frequent first. Ties keep taxonomy order.
    pub fn primary_skills(&self, tokens: &TokenSequence) -> Vec<String> {
        let mut found: Vec<(usize, usize)> = self
            .skills
            .iter()
            .enumerate()
            .map(|(index, skill)| (index, tokens.count_phrase(&skill.stems)))
            .filter(|(_, frequency)| *frequency > 0)
            .collect();

        found.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        found
            .into_iter()
            .take(MAX_PRIMARY_SKILLS)
            .map(|(index, _)| self.skills[index].name.clone())
            .collect()
    }

    pub fn executive_summary(
        &self,
        tier: ExperienceTier,
        overall: u8,
        industry: Industry,
        features: &FeatureVector,
        recommendation_count: usize,
    ) -> String {
        let industry_phrase = match industry {
            Industry::General => "a general professional path".to_string(),
            other => format!("the {} industry", other.to_string().to_lowercase()),
        };

        let skill_sentence = match features.strongest_with_prefix("skills_") {
            Some((key, _)) => format!(
                "Strongest skill area: {}.",
                key.trim_start_matches("skills_").replace('_', " ")
            ),
            None => "No single skill area stands out yet.".to_string(),
        };

        let recommendation_sentence = match recommendation_count {
            0 => "No critical improvements were identified.".to_string(),
            1 => "1 recommendation targets the most impactful improvement.".to_string(),
            n => format!("{} recommendations target the most impactful improvements.", n),
        };

        format!(
            "{} candidate targeting {}, with an overall resume score of {}/100. {} {}",
            tier, industry_phrase, overall, skill_sentence, recommendation_sentence
        )
    }
}

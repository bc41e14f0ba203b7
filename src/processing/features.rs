//! Keyword-density feature extraction over stemmed tokens

use crate::processing::taxonomy::{count_pattern_tokens, KeywordTaxonomy};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const INDUSTRY_GROUP_DENOMINATOR: f64 = 10.0;
const SKILL_CATEGORY_DENOMINATOR: f64 = 5.0;
const EXPERIENCE_DENOMINATOR: f64 = 20.0;
const EDUCATION_DENOMINATOR: f64 = 10.0;
const ACHIEVEMENT_DENOMINATOR: f64 = 5.0;
const QUANTIFICATION_DENOMINATOR: f64 = 10.0;
const PROJECT_DENOMINATOR: f64 = 15.0;

pub const EXPERIENCE_INDICATORS: &str = "experience_indicators";
pub const EDUCATION_INDICATORS: &str = "education_indicators";
pub const ACHIEVEMENT_INDICATORS: &str = "achievement_indicators";
pub const QUANTIFICATION_INDICATORS: &str = "quantification_indicators";
pub const PROJECT_INDICATORS: &str = "project_indicators";

/// Feature key to normalized value in `[0, 1]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(BTreeMap<String, f64>);

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, clamped into `[0, 1]`. NaN is stored as 0.
    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Highest non-zero entry whose key starts with `prefix`. Ties keep the first key in order.
    pub fn strongest_with_prefix(&self, prefix: &str) -> Option<(&str, f64)> {
        self.iter()
            .filter(|(k, v)| k.starts_with(prefix) && *v > 0.0)
            .fold(None, |best: Option<(&str, f64)>, (k, v)| match best {
                Some((_, best_value)) if best_value >= v => best,
                _ => Some((k, v)),
            })
    }
}

fn ratio(count: usize, denominator: f64) -> f64 {
    (count as f64 / denominator).min(1.0)
}

pub struct FeatureExtractor<'t> {
    taxonomy: &'t KeywordTaxonomy,
}

impl<'t> FeatureExtractor<'t> {
    pub fn new(taxonomy: &'t KeywordTaxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn extract(&self, tokens: &[String], raw_text: &str) -> FeatureVector {
        let mut features = FeatureVector::new();

        for group in &self.taxonomy.industry_keywords {
            let count = group.count_matching_tokens(tokens);
            features.set(
                format!("industry_{}", group.name),
                ratio(count, INDUSTRY_GROUP_DENOMINATOR),
            );
        }

        for category in &self.taxonomy.skill_categories {
            let count = category.count_matching_tokens(tokens);
            features.set(
                format!("skills_{}", category.name),
                ratio(count, SKILL_CATEGORY_DENOMINATOR),
            );
        }

        let patterns = &self.taxonomy.patterns;
        let indicator_families = [
            (EXPERIENCE_INDICATORS, &patterns.experience, EXPERIENCE_DENOMINATOR),
            (EDUCATION_INDICATORS, &patterns.education, EDUCATION_DENOMINATOR),
            (ACHIEVEMENT_INDICATORS, &patterns.achievements, ACHIEVEMENT_DENOMINATOR),
            (QUANTIFICATION_INDICATORS, &patterns.quantification, QUANTIFICATION_DENOMINATOR),
            (PROJECT_INDICATORS, &patterns.projects, PROJECT_DENOMINATOR),
        ];
        for (key, family, denominator) in indicator_families {
            features.set(key, ratio(count_pattern_tokens(tokens, family), denominator));
        }

        debug!(
            "Extracted {} features from {} tokens ({} chars of raw text)",
            features.len(),
            tokens.len(),
            raw_text.chars().count()
        );

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_all_declared_keys_present() {
        let taxonomy = KeywordTaxonomy::default();
        let extractor = FeatureExtractor::new(&taxonomy);
        let features = extractor.extract(&[], "");

        for group in &taxonomy.industry_keywords {
            assert!(features.contains_key(&format!("industry_{}", group.name)));
        }
        for category in &taxonomy.skill_categories {
            assert!(features.contains_key(&format!("skills_{}", category.name)));
        }
        for key in [
            EXPERIENCE_INDICATORS,
            EDUCATION_INDICATORS,
            ACHIEVEMENT_INDICATORS,
            QUANTIFICATION_INDICATORS,
            PROJECT_INDICATORS,
        ] {
            assert!(features.contains_key(key));
        }
        assert_eq!(
            features.len(),
            taxonomy.industry_keywords.len() + taxonomy.skill_categories.len() + 5
        );
        assert!(features.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_values_clamped_to_unit_interval() {
        let taxonomy = KeywordTaxonomy::default();
        let extractor = FeatureExtractor::new(&taxonomy);
        let many = tokens(&["python"; 40]);
        let features = extractor.extract(&many, "python");

        assert_eq!(features.get("skills_programming_languages"), 1.0);
        assert!(features.iter().all(|(_, v)| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_bidirectional_false_positive_reproduced() {
        let taxonomy = KeywordTaxonomy::default();
        let extractor = FeatureExtractor::new(&taxonomy);
        // "javascript" contains the backend keyword "java"
        let features = extractor.extract(&tokens(&["javascript"]), "JavaScript");

        assert!(features.get("industry_backend") > 0.0);
        assert!(features.get("industry_frontend") > 0.0);
    }

    #[test]
    fn test_indicator_ratios() {
        let taxonomy = KeywordTaxonomy::default();
        let extractor = FeatureExtractor::new(&taxonomy);
        let features = extractor.extract(&tokens(&["experi", "project", "award"]), "");

        assert!((features.get(EXPERIENCE_INDICATORS) - 1.0 / 20.0).abs() < 1e-9);
        assert!((features.get(PROJECT_INDICATORS) - 1.0 / 15.0).abs() < 1e-9);
        assert!((features.get(ACHIEVEMENT_INDICATORS) - 1.0 / 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_clamps() {
        let mut features = FeatureVector::new();
        features.set("a", 3.5);
        features.set("b", -1.0);
        features.set("c", f64::NAN);

        assert_eq!(features.get("a"), 1.0);
        assert_eq!(features.get("b"), 0.0);
        assert_eq!(features.get("c"), 0.0);
        assert_eq!(features.get("missing"), 0.0);
    }

    #[test]
    fn test_strongest_with_prefix() {
        let mut features = FeatureVector::new();
        features.set("skills_databases", 0.4);
        features.set("skills_cloud_devops", 0.8);
        features.set("industry_devops", 1.0);

        assert_eq!(
            features.strongest_with_prefix("skills_"),
            Some(("skills_cloud_devops", 0.8))
        );
        assert_eq!(features.strongest_with_prefix("missing_"), None);
    }
}

//! Improvement recommendations from section scores and presence checks

use crate::error::{AssessorError, Result};
use crate::processing::section_scorer::SectionScores;
use crate::processing::taxonomy::KeywordTaxonomy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_RECOMMENDATIONS: usize = 6;

const QUANTIFICATION_SIGNAL_PATTERN: &str =
    r"(?i)[\d%$]|\b(?:increased|decreased|improved|reduced|grew|saved|generated|boosted)\b";

/// Keywords taken from each under-covered industry group
const POOLED_KEYWORDS_PER_GROUP: usize = 3;
const MIN_MATCHED_KEYWORDS: usize = 2;
const NAMED_MISSING_KEYWORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub problem: String,
    pub solution: String,
    pub priority: Priority,
    pub expected_impact: String,
}

impl Recommendation {
    fn new(problem: &str, solution: &str, priority: Priority, expected_impact: &str) -> Self {
        Self {
            problem: problem.to_string(),
            solution: solution.to_string(),
            priority,
            expected_impact: expected_impact.to_string(),
        }
    }
}

pub struct RecommendationEngine<'t> {
    taxonomy: &'t KeywordTaxonomy,
    quantification_signal: Regex,
}

impl<'t> RecommendationEngine<'t> {
    pub fn new(taxonomy: &'t KeywordTaxonomy) -> Result<Self> {
        let quantification_signal = Regex::new(QUANTIFICATION_SIGNAL_PATTERN).map_err(|e| {
            AssessorError::Analysis(format!("Failed to compile quantification pattern: {}", e))
        })?;

        Ok(Self {
            taxonomy,
            quantification_signal,
        })
    }

    /// Recommendations in fixed generation order, never sorted by priority
    pub fn generate(
        &self,
        raw_text: &str,
        tokens: &[String],
        scores: &SectionScores,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if !self.quantification_signal.is_match(raw_text) {
            recommendations.push(Recommendation::new(
                "No quantified achievements found in your resume",
                "Add concrete numbers to your accomplishments: percentages, dollar amounts, team sizes or time saved.",
                Priority::High,
                "Quantified results make impact tangible and can significantly raise recruiter interest.",
            ));
        }

        let missing = self.missing_keyword_pool(tokens);
        if !missing.is_empty() {
            let named: Vec<&str> = missing
                .iter()
                .take(NAMED_MISSING_KEYWORDS)
                .map(String::as_str)
                .collect();
            recommendations.push(Recommendation::new(
                "Limited coverage of in-demand industry keywords",
                &format!(
                    "Consider adding relevant keywords where they reflect your real experience, such as: {}.",
                    named.join(", ")
                ),
                Priority::Medium,
                "Better keyword coverage improves how applicant tracking systems rank your resume.",
            ));
        }

        if scores.experience < 60 {
            recommendations.push(Recommendation::new(
                "Experience section lacks depth",
                "Describe each role with responsibilities, dates and the results you delivered.",
                Priority::High,
                "A detailed experience section is the primary signal employers use to judge fit.",
            ));
        }

        if scores.skills < 50 {
            recommendations.push(Recommendation::new(
                "Skills section is underdeveloped",
                "Add a dedicated skills section listing the tools, technologies and competencies you use.",
                Priority::High,
                "A clear skills list helps both recruiters and automated screeners match you to roles.",
            ));
        }

        if scores.achievements < 40 {
            recommendations.push(Recommendation::new(
                "Few measurable achievements",
                "Highlight awards, recognitions and outcomes with the metrics that show their scale.",
                Priority::Medium,
                "Achievements differentiate you from candidates with similar responsibilities.",
            ));
        }

        if scores.formatting < 50 {
            recommendations.push(Recommendation::new(
                "Resume structure is hard to scan",
                "Use clear section headings, bullet points and consistent line breaks.",
                Priority::Medium,
                "Readable formatting keeps reviewers engaged and helps parsers extract your details.",
            ));
        }

        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }

    /// First keywords of every industry group with fewer than two matched keywords.
    /// Duplicates across groups are kept.
    pub fn missing_keyword_pool(&self, tokens: &[String]) -> Vec<String> {
        let mut pool = Vec::new();

        for group in &self.taxonomy.industry_keywords {
            if group.count_matched_keywords(tokens) < MIN_MATCHED_KEYWORDS {
                pool.extend(
                    group
                        .keywords
                        .iter()
                        .take(POOLED_KEYWORDS_PER_GROUP)
                        .cloned(),
                );
            }
        }

        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RecommendationEngine<'static> {
        RecommendationEngine::new(KeywordTaxonomy::global()).unwrap()
    }

    fn strong_scores() -> SectionScores {
        SectionScores {
            skills: 90,
            experience: 90,
            education: 90,
            projects: 90,
            achievements: 90,
            formatting: 90,
        }
    }

    #[test]
    fn test_missing_quantification_comes_first() {
        let recommendations = engine().generate("no metrics here", &[], &SectionScores::default());

        assert_eq!(recommendations[0].priority, Priority::High);
        assert!(recommendations[0].problem.contains("quantified achievements"));
    }

    #[test]
    fn test_quantified_text_skips_metrics_recommendation() {
        let recommendations = engine().generate("Grew revenue by 40%", &[], &strong_scores());
        assert!(!recommendations
            .iter()
            .any(|r| r.problem.contains("quantified achievements")));
    }

    #[test]
    fn test_keyword_pool_names_first_five() {
        let engine = engine();
        let pool = engine.missing_keyword_pool(&[]);

        // every group is under-covered with no tokens
        assert_eq!(pool.len(), 30);
        assert_eq!(&pool[..3], &["react", "javascript", "typescript"]);

        let recommendations = engine.generate("100%", &[], &strong_scores());
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].priority, Priority::Medium);
        assert!(recommendations[0]
            .solution
            .contains("react, javascript, typescript, node.js, python."));
    }

    #[test]
    fn test_generation_order_not_sorted() {
        let weak = SectionScores {
            skills: 10,
            experience: 10,
            education: 10,
            projects: 10,
            achievements: 10,
            formatting: 10,
        };
        let recommendations = engine().generate("plain", &[], &weak);

        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
        let priorities: Vec<Priority> = recommendations.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![
                Priority::High,
                Priority::Medium,
                Priority::High,
                Priority::High,
                Priority::Medium,
                Priority::Medium,
            ]
        );
    }

    #[test]
    fn test_expected_impact_camel_case() {
        let recommendation = Recommendation::new("p", "s", Priority::Low, "impact");
        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["expectedImpact"], "impact");
        assert_eq!(json["priority"], "Low");
    }
}

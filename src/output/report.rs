//! Career assessment report structures

use crate::advisory::recommendations::{Priority, Recommendation};
use crate::advisory::roadmap::RoadmapItem;
use crate::advisory::salary::SalaryExpectation;
use crate::processing::classifier::ExperienceTier;
use crate::processing::section_scorer::SectionScores;
use serde::{Deserialize, Serialize};

/// Root output of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// One-paragraph overview of the assessment
    pub executive_summary: String,

    pub scores: Scores,

    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,

    pub experience_level: ExperienceTier,

    /// Up to 8 skill keywords, most frequent first
    pub primary_skills: Vec<String>,

    /// Up to 6 recommendations in generation order
    pub detailed_recommendations: Vec<Recommendation>,

    /// Up to 6 development steps
    pub roadmap: Vec<RoadmapItem>,

    /// Up to 8 deduplicated job titles
    pub target_roles: Vec<String>,

    pub salary_expectation: SalaryExpectation,
}

/// Overall score plus the six section scores, all in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: u8,
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub projects: u8,
    pub achievements: u8,
    pub formatting: u8,
}

impl Scores {
    pub fn new(overall: u8, sections: &SectionScores) -> Self {
        Self {
            overall,
            skills: sections.skills,
            experience: sections.experience,
            education: sections.education,
            projects: sections.projects,
            achievements: sections.achievements,
            formatting: sections.formatting,
        }
    }

    pub fn sections(&self) -> SectionScores {
        SectionScores {
            skills: self.skills,
            experience: self.experience,
            education: self.education,
            projects: self.projects,
            achievements: self.achievements,
            formatting: self.formatting,
        }
    }
}

impl AnalysisReport {
    /// One-line verdict for the overall score
    pub fn verdict(&self) -> &'static str {
        match self.scores.overall {
            90..=100 => "Excellent resume - ready for competitive applications",
            80..=89 => "Very strong resume - minor polish recommended",
            70..=79 => "Good resume - some targeted improvements recommended",
            60..=69 => "Fair resume - several improvements needed",
            50..=59 => "Below average - significant improvements required",
            _ => "Needs major revision",
        }
    }

    pub fn high_priority_recommendations(&self) -> impl Iterator<Item = &Recommendation> {
        self.detailed_recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::roadmap::RoadmapItemType;

    fn sample_report() -> AnalysisReport {
        let sections = SectionScores {
            skills: 80,
            experience: 75,
            education: 45,
            projects: 60,
            achievements: 30,
            formatting: 70,
        };

        AnalysisReport {
            executive_summary: "Mid Level candidate".to_string(),
            scores: Scores::new(64, &sections),
            strengths: vec!["Strong skills section (80/100)".to_string()],
            weaknesses: vec!["Education section needs improvement (45/100)".to_string()],
            experience_level: ExperienceTier::Mid,
            primary_skills: vec!["python".to_string()],
            detailed_recommendations: vec![],
            roadmap: vec![RoadmapItem::new("Learn", RoadmapItemType::Learn, "desc")],
            target_roles: vec!["Software Engineer".to_string()],
            salary_expectation: SalaryExpectation {
                range: "$63,750 - $106,250".to_string(),
                justification: "test".to_string(),
            },
        }
    }

    #[test]
    fn test_camel_case_output_shape() {
        let json = serde_json::to_value(sample_report()).unwrap();

        for key in [
            "executiveSummary",
            "scores",
            "strengths",
            "weaknesses",
            "experienceLevel",
            "primarySkills",
            "detailedRecommendations",
            "roadmap",
            "targetRoles",
            "salaryExpectation",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["experienceLevel"], "Mid Level");
        assert_eq!(json["scores"]["overall"], 64);
        assert_eq!(json["salaryExpectation"]["range"], "$63,750 - $106,250");
    }

    #[test]
    fn test_scores_round_trip_sections() {
        let report = sample_report();
        assert_eq!(report.scores.sections().education, 45);
        assert_eq!(report.verdict(), "Fair resume - several improvements needed");
    }
}

//! Main analysis engine: validates input, runs the scoring pipeline and assembles the report

use crate::advisory::recommendations::{RecommendationEngine, MAX_RECOMMENDATIONS};
use crate::advisory::roadmap::{RoadmapGenerator, MAX_ROADMAP_ITEMS};
use crate::advisory::roles::{RoleSuggester, MAX_TARGET_ROLES};
use crate::advisory::salary::SalaryEstimator;
use crate::advisory::summary::{SummaryWriter, MAX_PRIMARY_SKILLS};
use crate::config::{Config, ScoringConfig};
use crate::error::{AssessorError, Result};
use crate::output::report::{AnalysisReport, Scores};
use crate::processing::classifier::ExperienceClassifier;
use crate::processing::features::FeatureExtractor;
use crate::processing::industry::IndustryDetector;
use crate::processing::section_scorer::SectionScorer;
use crate::processing::taxonomy::KeywordTaxonomy;
use crate::processing::text_processor::TextPreprocessor;
use log::{debug, info};
use std::time::Instant;

/// Minimum resume length, in characters after trimming
pub const MIN_RESUME_CHARS: usize = 100;

/// Main analysis engine that coordinates all pipeline components.
///
/// Holds only compiled matchers and configuration, so one engine can be shared
/// across threads and reused for any number of `analyze` calls.
pub struct AnalysisEngine {
    preprocessor: TextPreprocessor,
    extractor: FeatureExtractor<'static>,
    scorer: SectionScorer<'static>,
    classifier: ExperienceClassifier,
    detector: IndustryDetector<'static>,
    recommender: RecommendationEngine<'static>,
    roadmap: RoadmapGenerator,
    roles: RoleSuggester<'static>,
    salary: SalaryEstimator,
    summary: SummaryWriter,
    weights: ScoringConfig,
}

impl AnalysisEngine {
    /// Create a new analysis engine with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let taxonomy = KeywordTaxonomy::global();
        let preprocessor = TextPreprocessor::new();
        let summary = SummaryWriter::new(taxonomy, &preprocessor);

        Ok(Self {
            extractor: FeatureExtractor::new(taxonomy),
            scorer: SectionScorer::new(taxonomy)?,
            classifier: ExperienceClassifier::new()?,
            detector: IndustryDetector::new(taxonomy),
            recommender: RecommendationEngine::new(taxonomy)?,
            roadmap: RoadmapGenerator::new(),
            roles: RoleSuggester::new(taxonomy),
            salary: SalaryEstimator::new(&config.salary),
            summary,
            preprocessor,
            weights: config.scoring.clone(),
        })
    }

    /// Analyze one resume. Short or empty input is a `Validation` error;
    /// any other failure is reported as `Analysis`.
    pub fn analyze(&self, raw_text: &str) -> Result<AnalysisReport> {
        Self::validate_input(raw_text)?;

        let start_time = Instant::now();
        let report = self.run_pipeline(raw_text).map_err(AssessorError::into_analysis)?;

        info!(
            "Analysis complete: overall score {}/100 ({}) in {} ms",
            report.scores.overall,
            report.experience_level,
            start_time.elapsed().as_millis()
        );
        Ok(report)
    }

    pub fn validate_input(raw_text: &str) -> Result<()> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(AssessorError::Validation("Resume text is empty".to_string()));
        }

        let length = trimmed.chars().count();
        if length < MIN_RESUME_CHARS {
            return Err(AssessorError::Validation(format!(
                "Resume text is too short ({} characters); at least {} are required",
                length, MIN_RESUME_CHARS
            )));
        }

        Ok(())
    }

    fn run_pipeline(&self, raw_text: &str) -> Result<AnalysisReport> {
        // 1. Normalize once; every stage below reads the same tokens
        let tokens = self.preprocessor.preprocess(raw_text);
        debug!("Preprocessed {} tokens", tokens.len());

        // 2. Features and section scores
        let features = self.extractor.extract(&tokens, raw_text);
        let sections = self.scorer.score(raw_text, &tokens);
        let overall = sections.overall(&self.weights);

        // 3. Classification
        let tier = self.classifier.classify(sections.experience, raw_text);
        let profile = self.detector.detect(&tokens);
        info!("Detected industry: {}", profile.industry);

        // 4. Advisory outputs
        let recommendations = self.recommender.generate(raw_text, &tokens, &sections);
        let roadmap = self.roadmap.generate(profile, &sections);
        let target_roles = self.roles.suggest(&tokens, sections.experience);
        let salary_expectation = self.salary.estimate(overall, tier);

        let executive_summary = self.summary.executive_summary(
            tier,
            overall,
            profile.industry,
            &features,
            recommendations.len(),
        );

        let report = AnalysisReport {
            executive_summary,
            scores: Scores::new(overall, &sections),
            strengths: self.summary.strengths(&sections),
            weaknesses: self.summary.weaknesses(&sections),
            experience_level: tier,
            primary_skills: self.summary.primary_skills(&tokens),
            detailed_recommendations: recommendations,
            roadmap,
            target_roles,
            salary_expectation,
        };

        Self::check_report(&report)?;
        Ok(report)
    }

    /// Reject a report that breaks the output caps or score range
    fn check_report(report: &AnalysisReport) -> Result<()> {
        let caps = [
            ("primary skills", report.primary_skills.len(), MAX_PRIMARY_SKILLS),
            ("recommendations", report.detailed_recommendations.len(), MAX_RECOMMENDATIONS),
            ("roadmap items", report.roadmap.len(), MAX_ROADMAP_ITEMS),
            ("target roles", report.target_roles.len(), MAX_TARGET_ROLES),
        ];
        for (name, len, cap) in caps {
            if len > cap {
                return Err(AssessorError::Analysis(format!(
                    "Report has {} {}, limit is {}",
                    len, name, cap
                )));
            }
        }

        let scores = &report.scores;
        let all_scores = [
            scores.overall,
            scores.skills,
            scores.experience,
            scores.education,
            scores.projects,
            scores.achievements,
            scores.formatting,
        ];
        if all_scores.iter().any(|s| *s > 100) {
            return Err(AssessorError::Analysis(format!(
                "Score out of range: {:?}",
                scores
            )));
        }

        Ok(())
    }
}

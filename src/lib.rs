//! Resume assessor library
//!
//! Scores a resume's sections, classifies experience and industry, and
//! produces recommendations, a career roadmap, target roles and a salary
//! estimate as one [`AnalysisReport`].

pub mod advisory;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AssessorError, Result};
pub use output::report::AnalysisReport;
pub use processing::analyzer::AnalysisEngine;

/// Analyze resume text with the default configuration.
///
/// Builds a fresh engine per call; reuse an [`AnalysisEngine`] when
/// analyzing many resumes.
pub fn analyze(raw_text: &str) -> Result<AnalysisReport> {
    AnalysisEngine::new(&Config::default())?.analyze(raw_text)
}

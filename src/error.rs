//! Error handling for the resume assessor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input the caller can fix (missing or too-short resume text)
    #[error("{0}")]
    Validation(String),

    /// Unexpected failure inside the analysis pipeline
    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl AssessorError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AssessorError::Validation(_))
    }

    /// Wrap any non-validation error as an analysis failure, keeping the cause message
    pub fn into_analysis(self) -> Self {
        match self {
            AssessorError::Validation(_) | AssessorError::Analysis(_) => self,
            other => AssessorError::Analysis(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssessorError>;

//! CLI interface for the resume assessor

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-assessor")]
#[command(about = "Rule-based resume scoring and career guidance")]
#[command(
    long_about = "Score a resume's sections, detect experience level and industry, and suggest improvements, a career roadmap, target roles and a salary range"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assess a resume
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show every recommendation and roadmap detail
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "txt", "md"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &allowed).is_err());
        assert_eq!(
            validate_file_extension(Path::new("resume"), &allowed).unwrap_err(),
            "File has no extension"
        );
    }

    #[test]
    fn test_parse_analyze_command() {
        let cli = Cli::parse_from([
            "resume-assessor",
            "analyze",
            "--resume",
            "cv.md",
            "--output",
            "json",
            "--verbose",
        ]);

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { resume, output, save, detailed } => {
                assert_eq!(resume, PathBuf::from("cv.md"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(save.is_none());
                assert!(!detailed);
            }
            _ => panic!("expected analyze command"),
        }
    }
}

//! Configuration management for the resume assessor

use crate::error::{AssessorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub salary: SalaryConfig,
    pub output: OutputConfig,
}

/// Weights of each section in the overall score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skills_weight: f64,
    pub experience_weight: f64,
    pub education_weight: f64,
    pub projects_weight: f64,
    pub achievements_weight: f64,
    pub formatting_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub min: u64,
    pub max: u64,
}

impl SalaryBand {
    pub const ENTRY: SalaryBand = SalaryBand { min: 45_000, max: 75_000 };
    pub const MID: SalaryBand = SalaryBand { min: 75_000, max: 125_000 };
    pub const SENIOR: SalaryBand = SalaryBand { min: 125_000, max: 185_000 };
}

/// Salary bands keyed by tier (`entry`, `mid`, `senior`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryConfig {
    pub bands: BTreeMap<String, SalaryBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skills_weight: 0.25,
            experience_weight: 0.25,
            education_weight: 0.15,
            projects_weight: 0.15,
            achievements_weight: 0.10,
            formatting_weight: 0.10,
        }
    }
}

impl ScoringConfig {
    fn weights(&self) -> [(&'static str, f64); 6] {
        [
            ("skills_weight", self.skills_weight),
            ("experience_weight", self.experience_weight),
            ("education_weight", self.education_weight),
            ("projects_weight", self.projects_weight),
            ("achievements_weight", self.achievements_weight),
            ("formatting_weight", self.formatting_weight),
        ]
    }
}

impl Default for SalaryConfig {
    fn default() -> Self {
        let mut bands = BTreeMap::new();
        bands.insert("entry".to_string(), SalaryBand::ENTRY);
        bands.insert("mid".to_string(), SalaryBand::MID);
        bands.insert("senior".to_string(), SalaryBand::SENIOR);
        Self { bands }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            salary: SalaryConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load the user config file, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AssessorError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AssessorError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.scoring.weights() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AssessorError::Configuration(format!(
                    "Scoring weight {} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        for (tier, band) in &self.salary.bands {
            if band.min > band.max {
                return Err(AssessorError::Configuration(format!(
                    "Salary band '{}' has min {} above max {}",
                    tier, band.min, band.max
                )));
            }
        }

        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-assessor")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_weights() {
        let scoring = ScoringConfig::default();
        let total: f64 = scoring.weights().iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(scoring.skills_weight, 0.25);
        assert_eq!(scoring.formatting_weight, 0.10);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;
        config.salary.bands.insert("senior".to_string(), SalaryBand { min: 130_000, max: 200_000 });
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let mut config = Config::default();
        config.scoring.projects_weight = -0.1;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AssessorError::Configuration(_)));
        assert!(err.to_string().contains("projects_weight"));
    }

    #[test]
    fn test_validate_rejects_inverted_band() {
        let mut config = Config::default();
        config.salary.bands.insert("mid".to_string(), SalaryBand { min: 90_000, max: 80_000 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_rejects_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scoring = [not valid").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AssessorError::Configuration(_)));
    }
}

//! Salary range estimation from seniority tier and overall score

use crate::config::{SalaryBand, SalaryConfig};
use crate::processing::classifier::ExperienceTier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat buffer added to the score ratio before scaling the band
const SCORE_BUFFER: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryExpectation {
    pub range: String,
    pub justification: String,
}

/// Format a whole-dollar amount as `$125,000`
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${}", grouped)
}

/// Share of the band a given overall score earns, capped at the full band
pub fn score_multiplier(overall: u8) -> f64 {
    (overall as f64 / 100.0 + SCORE_BUFFER).min(1.0)
}

pub struct SalaryEstimator {
    bands: BTreeMap<String, SalaryBand>,
}

impl Default for SalaryEstimator {
    fn default() -> Self {
        Self::new(&SalaryConfig::default())
    }
}

impl SalaryEstimator {
    pub fn new(config: &SalaryConfig) -> Self {
        Self {
            bands: config.bands.clone(),
        }
    }

    /// Band for a tier; missing tiers fall back to the entry band
    pub fn band_for(&self, tier: ExperienceTier) -> SalaryBand {
        self.bands
            .get(tier.key())
            .or_else(|| self.bands.get(ExperienceTier::Entry.key()))
            .copied()
            .unwrap_or(SalaryBand::ENTRY)
    }

    pub fn estimate(&self, overall: u8, tier: ExperienceTier) -> SalaryExpectation {
        let band = self.band_for(tier);
        let multiplier = score_multiplier(overall);

        let low = (band.min as f64 * multiplier).round() as u64;
        let high = (band.max as f64 * multiplier).round() as u64;

        SalaryExpectation {
            range: format!("{} - {}", format_currency(low), format_currency(high)),
            justification: format!(
                "Based on {} classification and an overall score of {}/100, this estimate reflects {:.0}% of the typical {} - {} market band.",
                tier,
                overall,
                multiplier * 100.0,
                format_currency(band.min),
                format_currency(band.max)
            ),
        }
    }
}

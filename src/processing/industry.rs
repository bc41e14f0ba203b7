//! Industry detection by indicator keyword coverage

use crate::processing::taxonomy::{IndustryProfile, KeywordTaxonomy};
use log::debug;

pub struct IndustryDetector<'t> {
    taxonomy: &'t KeywordTaxonomy,
}

impl<'t> IndustryDetector<'t> {
    pub fn new(taxonomy: &'t KeywordTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Pick the profile whose indicators are most covered by the tokens.
    /// Earlier industries win ties; no coverage at all yields the general profile.
    pub fn detect(&self, tokens: &[String]) -> &'t IndustryProfile {
        let mut best: Option<(&'t IndustryProfile, usize)> = None;

        for profile in &self.taxonomy.profiles {
            let matched = profile.indicators.count_matched_keywords(tokens);
            debug!("Industry {}: {} indicators matched", profile.industry, matched);

            let is_better = match best {
                Some((_, best_count)) => matched > best_count,
                None => matched > 0,
            };
            if is_better {
                best = Some((profile, matched));
            }
        }

        best.map(|(profile, _)| profile)
            .unwrap_or(&self.taxonomy.general)
    }
}

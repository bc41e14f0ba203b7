//! Industry learning roadmap generation

use crate::processing::section_scorer::SectionScores;
use crate::processing::taxonomy::IndustryProfile;
use serde::{Deserialize, Serialize};

pub const MAX_ROADMAP_ITEMS: usize = 6;

const LEADERSHIP_EXPERIENCE_THRESHOLD: u8 = 70;
const CERTIFICATION_SKILLS_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapItemType {
    Learn,
    Project,
    Milestone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub title: String,
    #[serde(rename = "type")]
    pub item_type: RoadmapItemType,
    pub description: String,
}

impl RoadmapItem {
    pub fn new(title: &str, item_type: RoadmapItemType, description: &str) -> Self {
        Self {
            title: title.to_string(),
            item_type,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RoadmapGenerator;

impl RoadmapGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Template steps first, then score-driven extras, then the closing step.
    /// Truncation happens last, so a long template crowds out the closing step.
    pub fn generate(&self, profile: &IndustryProfile, scores: &SectionScores) -> Vec<RoadmapItem> {
        let mut roadmap = profile.roadmap.clone();

        if scores.experience > LEADERSHIP_EXPERIENCE_THRESHOLD {
            roadmap.push(RoadmapItem::new(
                "Leadership Development",
                RoadmapItemType::Learn,
                "Build people leadership skills through mentoring, management training or leading a cross-functional initiative.",
            ));
        }

        if scores.skills > CERTIFICATION_SKILLS_THRESHOLD {
            roadmap.push(RoadmapItem::new(
                "Industry Certification",
                RoadmapItemType::Milestone,
                "Validate your expertise with an advanced, industry-recognized certification.",
            ));
        }

        roadmap.push(RoadmapItem::new(
            "Continuous Professional Development",
            RoadmapItemType::Learn,
            "Stay current through courses, conferences and professional communities in your field.",
        ));

        roadmap.truncate(MAX_ROADMAP_ITEMS);
        roadmap
    }
}

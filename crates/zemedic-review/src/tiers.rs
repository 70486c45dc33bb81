//! Confidence tiering for display.

use serde::{Deserialize, Serialize};

/// Display tier for a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// Score above 0.9.
    High,
    /// Score above 0.7, up to 0.9.
    Medium,
    /// Everything else.
    Low,
}

impl ConfidenceTier {
    /// Tier for a score: `> 0.9` high, `> 0.7` medium, else low.
    pub fn for_score(score: f64) -> Self {
        if score > 0.9 {
            ConfidenceTier::High
        } else if score > 0.7 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    /// Accent color the dashboard uses for this tier.
    pub fn color_name(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "green",
            ConfidenceTier::Medium => "yellow",
            ConfidenceTier::Low => "red",
        }
    }
}

/// A score rendered as a whole percentage, for labels and bars.
pub fn percent(score: f64) -> u32 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u32
}

// src/quality/tier.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seven fixed bands over the 0–100 quality score, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    #[serde(rename = "Epic Powder Day!")]
    EpicPowder,
    #[serde(rename = "Excellent Conditions")]
    Excellent,
    #[serde(rename = "Great Day to Ski")]
    Great,
    #[serde(rename = "Good Conditions")]
    Good,
    #[serde(rename = "Decent Skiing")]
    Decent,
    #[serde(rename = "Fair Conditions")]
    Fair,
    #[serde(rename = "Poor Conditions")]
    Poor,
}

impl QualityTier {
    /// All tiers, highest first.
    pub const ALL: [QualityTier; 7] = [
        QualityTier::EpicPowder,
        QualityTier::Excellent,
        QualityTier::Great,
        QualityTier::Good,
        QualityTier::Decent,
        QualityTier::Fair,
        QualityTier::Poor,
    ];

    /// Tier for `score`; anything below 40 (or NaN) is `Poor`.
    pub fn from_score(score: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| score >= t.min_score())
            .unwrap_or(QualityTier::Poor)
    }

    /// Lower bound of the band (inclusive).
    pub fn min_score(self) -> f64 {
        match self {
            QualityTier::EpicPowder => 90.0,
            QualityTier::Excellent => 80.0,
            QualityTier::Great => 70.0,
            QualityTier::Good => 60.0,
            QualityTier::Decent => 50.0,
            QualityTier::Fair => 40.0,
            QualityTier::Poor => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityTier::EpicPowder => "Epic Powder Day!",
            QualityTier::Excellent => "Excellent Conditions",
            QualityTier::Great => "Great Day to Ski",
            QualityTier::Good => "Good Conditions",
            QualityTier::Decent => "Decent Skiing",
            QualityTier::Fair => "Fair Conditions",
            QualityTier::Poor => "Poor Conditions",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Human-readable description for a quality score.
pub fn quality_description(score: f64) -> &'static str {
    QualityTier::from_score(score).label()
}

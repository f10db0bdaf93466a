//! # Snow Quality Scoring
//!
//! Maps a snapshot of conditions onto a 0–100 score and a textual tier.
//!
//! The score is the plain sum of five sub-scores:
//! - new snow (24h)      : up to 30
//! - temperature         : up to 25
//! - wind                : up to 15
//! - days since snowfall : up to 20
//! - humidity            : up to 10
//!
//! Missing inputs add nothing (no imputation). The sum is clamped to [0,100].
//! Every input, including negative or absurd values, yields a score.

pub mod factors;
pub mod tier;

use serde::{Deserialize, Serialize};

pub use factors::{humidity_score, new_snow_score, snow_age_score, temperature_score, wind_score};
pub use tier::{quality_description, QualityTier};

/// Conditions at one resort at one moment. Any field may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowConditions {
    pub new_snow_24h_in: Option<f64>,
    pub temperature_f: Option<f64>,
    pub wind_speed_mph: Option<f64>,
    pub days_since_snow: Option<i64>,
    pub humidity_percent: Option<f64>,
}

impl SnowConditions {
    pub fn with_new_snow(mut self, inches: f64) -> Self {
        self.new_snow_24h_in = Some(inches);
        self
    }

    pub fn with_temperature(mut self, fahrenheit: f64) -> Self {
        self.temperature_f = Some(fahrenheit);
        self
    }

    pub fn with_wind(mut self, mph: f64) -> Self {
        self.wind_speed_mph = Some(mph);
        self
    }

    pub fn with_days_since_snow(mut self, days: i64) -> Self {
        self.days_since_snow = Some(days);
        self
    }

    pub fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity_percent = Some(percent);
        self
    }
}

/// The five sub-scores behind a quality score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub new_snow: f64,
    pub temperature: f64,
    pub wind: f64,
    pub snow_age: f64,
    pub humidity: f64,
}

impl ScoreBreakdown {
    pub fn from_conditions(c: &SnowConditions) -> Self {
        Self {
            new_snow: new_snow_score(c.new_snow_24h_in),
            temperature: temperature_score(c.temperature_f),
            wind: wind_score(c.wind_speed_mph),
            snow_age: snow_age_score(c.days_since_snow),
            humidity: humidity_score(c.humidity_percent),
        }
    }

    /// Un-capped sum.
    pub fn total(&self) -> f64 {
        self.new_snow + self.temperature + self.wind + self.snow_age + self.humidity
    }

    /// Sum clamped to [0,100].
    pub fn clamped(&self) -> f64 {
        self.total().clamp(0.0, 100.0)
    }
}

/// Score, tier and the sub-scores that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub score: f64,
    pub tier: QualityTier,
    pub breakdown: ScoreBreakdown,
}

/// Overall quality score in [0,100].
pub fn quality_score(conditions: &SnowConditions) -> f64 {
    ScoreBreakdown::from_conditions(conditions).clamped()
}

/// `(score, tier)` for a snapshot.
pub fn score(conditions: &SnowConditions) -> (f64, QualityTier) {
    let s = quality_score(conditions);
    (s, QualityTier::from_score(s))
}

/// Full report including the per-factor breakdown.
pub fn evaluate(conditions: &SnowConditions) -> QualityReport {
    let breakdown = ScoreBreakdown::from_conditions(conditions);
    let score = breakdown.clamped();
    QualityReport {
        score,
        tier: QualityTier::from_score(score),
        breakdown,
    }
}

//! # Fusion Engine
//! Pure logic that maps a set of same-quantity readings → one best estimate
//! plus an aggregate confidence. No I/O and no clock reads: `now` is always
//! supplied by the caller, so a call is fully determined by its arguments.
//!
//! Policy: weighted mean with `weight × confidence × decay_rate^age_hours` per
//! reading; readings older than `max_age_hours` are dropped from the mean.
//!
//! Known sharp edge: dropped readings still count toward the confidence
//! denominator, so a stale heavyweight source lowers confidence without moving
//! the estimate.

pub mod decay;
pub mod types;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use decay::{age_factor, age_hours, effective_weight, DECAY_RATE};
pub use types::{create_source, FusionResult, MeasurementSource, SourceReading, Timestamp};

/// Default maximum reading age in hours.
pub const DEFAULT_MAX_AGE_HOURS: u32 = 24;

/// Tuning knobs for [`fuse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionSettings {
    /// Readings strictly older than this are excluded from the estimate.
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: u32,
    /// Per-hour decay factor applied to a reading's weight.
    #[serde(default = "default_decay_rate")]
    pub decay_rate: f64,
}

fn default_max_age_hours() -> u32 {
    DEFAULT_MAX_AGE_HOURS
}

fn default_decay_rate() -> f64 {
    DECAY_RATE
}

impl Default for FusionSettings {
    fn default() -> Self {
        Self {
            max_age_hours: DEFAULT_MAX_AGE_HOURS,
            decay_rate: DECAY_RATE,
        }
    }
}

impl FusionSettings {
    pub fn with_max_age_hours(mut self, hours: u32) -> Self {
        self.max_age_hours = hours;
        self
    }

    pub fn with_decay_rate(mut self, rate: f64) -> Self {
        self.decay_rate = rate;
        self
    }
}

/// Fuse readings into one estimate. `None` when nothing usable survives the
/// age filter or every surviving effective weight is zero.
pub fn fuse(
    sources: &[MeasurementSource],
    settings: &FusionSettings,
    now: impl Into<Timestamp>,
) -> Option<FusionResult> {
    if sources.is_empty() {
        return None;
    }
    let now = now.into();
    let max_age = f64::from(settings.max_age_hours);

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    let mut total_base_weight = 0.0;
    let mut sources_used = 0usize;

    for s in sources {
        // Every reading counts toward the confidence denominator.
        total_base_weight += s.weight();

        let age = age_hours(s.timestamp(), now);
        if age > max_age {
            debug!(
                source = s.source_name(),
                age_hours = age,
                max_age_hours = settings.max_age_hours,
                "fusion: reading too old, excluded"
            );
            continue;
        }

        let w = effective_weight(s.weight(), s.confidence(), age_factor(age, settings.decay_rate));
        trace!(
            source = s.source_name(),
            value = s.value(),
            age_hours = age,
            effective_weight = w,
            "fusion: reading accepted"
        );

        weighted_sum += s.value() * w;
        total_weight += w;
        sources_used += 1;
    }

    if total_weight == 0.0 || sources_used == 0 {
        debug!(total = sources.len(), "fusion: no usable readings");
        return None;
    }

    let best_estimate = weighted_sum / total_weight;
    let confidence = if total_base_weight > 0.0 {
        (total_weight / total_base_weight).min(1.0)
    } else {
        0.0
    };

    Some(FusionResult {
        best_estimate,
        confidence,
        sources_used,
        total_sources: sources.len(),
    })
}

/// `(best_estimate, confidence)` only.
pub fn fuse_simple(
    sources: &[MeasurementSource],
    settings: &FusionSettings,
    now: impl Into<Timestamp>,
) -> Option<(f64, f64)> {
    fuse(sources, settings, now).map(|r| (r.best_estimate, r.confidence))
}

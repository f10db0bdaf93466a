//! Age and weighting helpers used by [`super::fuse`].
//!
//! Exponential decay per hour: `factor = decay_rate ^ age_hours`, with future
//! readings clamped to fully fresh (`1.0`).

use super::types::Timestamp;

/// Default per-hour decay (5% per hour).
pub const DECAY_RATE: f64 = 0.95;

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Hours between `timestamp` and `now`; negative for future readings.
/// Naive values on either side are read as UTC.
pub fn age_hours(timestamp: impl Into<Timestamp>, now: impl Into<Timestamp>) -> f64 {
    let delta = now.into().to_utc() - timestamp.into().to_utc();
    match delta.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_HOUR,
        // microsecond overflow only past ~292k years
        None => delta.num_milliseconds() as f64 / MILLIS_PER_HOUR,
    }
}

/// Decay factor in (0,1]; 1.0 for fresh or future readings.
pub fn age_factor(age_hours: f64, decay_rate: f64) -> f64 {
    if age_hours < 0.0 {
        return 1.0;
    }
    decay_rate.powf(age_hours)
}

/// Base weight discounted by confidence and age.
pub fn effective_weight(base_weight: f64, confidence: f64, age_factor: f64) -> f64 {
    base_weight * confidence * age_factor
}

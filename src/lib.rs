// src/lib.rs
//! SnowSpot engine: multi-source measurement fusion and snow quality scoring.
//!
//! Both engines are pure functions over plain values. Callers own I/O and the
//! wall clock; see [`config`] for the loaders a caller can use at its boundary.

pub mod config;
pub mod fusion;
pub mod quality;
pub mod source_weights;

// ---- Re-exports for stable public API ----
pub use crate::fusion::{
    create_source, fuse, fuse_simple, FusionResult, FusionSettings, MeasurementSource,
    SourceReading, Timestamp,
};
pub use crate::quality::{evaluate, score, QualityReport, QualityTier, ScoreBreakdown, SnowConditions};
pub use crate::source_weights::{default_source_weight, SourceWeights};

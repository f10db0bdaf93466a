//! Runtime configuration for callers of the engine.
//!
//! The engine itself never reads files or env; these loaders exist for the
//! boundary (CLI, services) that builds [`EngineConfig`] once and passes plain
//! values down.

pub mod fusion;

use anyhow::Result;

use crate::fusion::FusionSettings;
use crate::source_weights::SourceWeights;

pub use fusion::{apply_env_overrides, load_fusion_settings_default, load_fusion_settings_from};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub fusion: FusionSettings,
    pub weights: SourceWeights,
}

impl EngineConfig {
    /// Fusion settings and source weights from their default locations.
    pub fn load() -> Result<Self> {
        Ok(Self {
            fusion: load_fusion_settings_default()?,
            weights: SourceWeights::load_default()?,
        })
    }
}

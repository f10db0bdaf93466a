//! # Source Weights
//!
//! Base trust weights per measurement provider (resort feed, SNOTEL station,
//! third-party weather API, ...). A source's base weight is independent of the
//! age or confidence of any single reading; the fusion engine discounts it
//! further per reading.
//!
//! - Built-in table: `resort_official` 0.5, `snotel` 0.4, `weather_api` 0.1.
//! - Unknown names fall back to `default_weight` (0.1).
//! - Optional aliases map provider spellings onto canonical names.
//! - Loads from JSON or TOML; missing fields keep the built-in values.
//!
//! Lookup order: exact match → alias → default.

use anyhow::{anyhow, bail, Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Weight used for source names missing from the table.
pub const DEFAULT_SOURCE_WEIGHT: f64 = 0.1;

const ENV_PATH: &str = "SNOWSPOT_SOURCE_WEIGHTS";

static BUILTIN: Lazy<SourceWeights> = Lazy::new(SourceWeights::builtin);

/// Base weight table, optionally with aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceWeights {
    /// Weight for names with no entry and no alias.
    #[serde(default = "default_default_weight")]
    pub default_weight: f64,
    /// Canonical source name → base weight.
    #[serde(default = "builtin_weights")]
    pub weights: HashMap<String, f64>,
    /// Alternate name → canonical name.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

fn default_default_weight() -> f64 {
    DEFAULT_SOURCE_WEIGHT
}

fn builtin_weights() -> HashMap<String, f64> {
    [
        ("resort_official", 0.5),
        ("snotel", 0.4),
        ("weather_api", 0.1),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SourceWeights {
    fn builtin() -> Self {
        Self {
            default_weight: DEFAULT_SOURCE_WEIGHT,
            weights: builtin_weights(),
            aliases: HashMap::new(),
        }
    }

    /// Base weight for `source`.
    pub fn weight_for(&self, source: &str) -> f64 {
        if let Some(&w) = self.weights.get(source) {
            return w;
        }

        if let Some(canon) = self.aliases.get(source) {
            if let Some(&w) = self.weights.get(canon) {
                return w;
            }
        }

        self.default_weight
    }

    /// Add or replace an alias (builder style).
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), canonical.into());
        self
    }

    /// Load a table from a JSON or TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading source weights from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let table = parse(&content, ext.as_str())
            .with_context(|| format!("parsing source weights in {}", path.display()))?;
        table.validate()?;
        Ok(table)
    }

    /// Load using env var + fallbacks:
    /// 1) $SNOWSPOT_SOURCE_WEIGHTS
    /// 2) config/source_weights.toml
    /// 3) config/source_weights.json
    /// 4) built-in table
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = std::env::var(ENV_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
            return Err(anyhow!("{ENV_PATH} points to non-existent path"));
        }
        for candidate in ["config/source_weights.toml", "config/source_weights.json"] {
            let pb = PathBuf::from(candidate);
            if pb.exists() {
                return Self::load_from(&pb);
            }
        }
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if !self.default_weight.is_finite() || self.default_weight < 0.0 {
            bail!("default_weight must be a finite non-negative number");
        }
        for (name, w) in &self.weights {
            if !w.is_finite() || *w < 0.0 {
                bail!("weight for {name:?} must be a finite non-negative number, got {w}");
            }
        }
        Ok(())
    }
}

/// Base weight for `source_name` from the built-in table.
pub fn default_source_weight(source_name: &str) -> f64 {
    BUILTIN.weight_for(source_name)
}

fn parse(s: &str, hint_ext: &str) -> Result<SourceWeights> {
    match hint_ext {
        "toml" => Ok(toml::from_str(s)?),
        "json" => Ok(serde_json::from_str(s)?),
        _ => serde_json::from_str(s)
            .or_else(|_| toml::from_str(s))
            .map_err(|_| anyhow!("unsupported source weights format")),
    }
}

// src/config/fusion.rs
use anyhow::{anyhow, Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::fusion::{FusionSettings, DECAY_RATE};

pub const ENV_PATH: &str = "SNOWSPOT_FUSION_CONFIG";
pub const ENV_MAX_AGE_HOURS: &str = "SNOWSPOT_MAX_AGE_HOURS";
pub const ENV_DECAY_RATE: &str = "SNOWSPOT_DECAY_RATE";

/// Load settings from an explicit path. Supports TOML or JSON formats.
/// Env overrides are not applied here.
pub fn load_fusion_settings_from(path: &Path) -> Result<FusionSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading fusion settings from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let parsed = parse_settings(&content, ext.as_str())
        .with_context(|| format!("parsing fusion settings in {}", path.display()))?;
    Ok(sanitize(parsed))
}

/// Load settings using env var + fallbacks, then apply env overrides:
/// 1) $SNOWSPOT_FUSION_CONFIG
/// 2) config/fusion.toml
/// 3) config/fusion.json
/// 4) built-in defaults
pub fn load_fusion_settings_default() -> Result<FusionSettings> {
    let base = if let Ok(p) = env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(anyhow!("{ENV_PATH} points to non-existent path"));
        }
        load_fusion_settings_from(&pb)?
    } else {
        let toml_p = PathBuf::from("config/fusion.toml");
        let json_p = PathBuf::from("config/fusion.json");
        if toml_p.exists() {
            load_fusion_settings_from(&toml_p)?
        } else if json_p.exists() {
            load_fusion_settings_from(&json_p)?
        } else {
            FusionSettings::default()
        }
    };
    apply_env_overrides(base)
}

/// `SNOWSPOT_MAX_AGE_HOURS` / `SNOWSPOT_DECAY_RATE` win over file values.
pub fn apply_env_overrides(mut s: FusionSettings) -> Result<FusionSettings> {
    if let Ok(v) = env::var(ENV_MAX_AGE_HOURS) {
        s.max_age_hours = v
            .trim()
            .parse()
            .with_context(|| format!("{ENV_MAX_AGE_HOURS}={v:?} is not a whole number of hours"))?;
    }
    if let Ok(v) = env::var(ENV_DECAY_RATE) {
        s.decay_rate = v
            .trim()
            .parse()
            .with_context(|| format!("{ENV_DECAY_RATE}={v:?} is not a number"))?;
    }
    Ok(sanitize(s))
}

/// Decay rate must lie in (0, 1]; anything else falls back to the default.
pub fn sanitize(mut s: FusionSettings) -> FusionSettings {
    if !(s.decay_rate.is_finite() && s.decay_rate > 0.0 && s.decay_rate <= 1.0) {
        warn!(
            decay_rate = s.decay_rate,
            fallback = DECAY_RATE,
            "config: decay_rate out of range, using default"
        );
        s.decay_rate = DECAY_RATE;
    }
    s
}

fn parse_settings(s: &str, hint_ext: &str) -> Result<FusionSettings> {
    // Files may nest the values under a [fusion] table; when that key is
    // present it is the only shape tried.
    match hint_ext {
        "json" => {
            let mut doc: serde_json::Value = serde_json::from_str(s)?;
            let body = if doc.get("fusion").is_some() {
                doc["fusion"].take()
            } else {
                doc
            };
            serde_json::from_value(body).context("invalid fusion settings")
        }
        "toml" => {
            let mut doc: toml::Table = toml::from_str(s)?;
            let body = match doc.remove("fusion") {
                Some(inner) => inner,
                None => toml::Value::Table(doc),
            };
            body.try_into().context("invalid fusion settings")
        }
        _ => parse_settings(s, "json")
            .or_else(|_| parse_settings(s, "toml"))
            .map_err(|_| anyhow!("unsupported fusion settings format")),
    }
}

//! Command-line caller for the engine.
//!
//!   snow-eval score <conditions.json | ->
//!   snow-eval fuse  <readings.json | -> [--now <rfc3339>]
//!
//! Results go to stdout as JSON; logs go to stderr (RUST_LOG, default info).

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use std::io::Read;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use snowspot_engine::{config::EngineConfig, fuse, quality, SnowConditions, SourceReading, Timestamp};

const USAGE: &str = "usage: snow-eval score <file|-> | snow-eval fuse <file|-> [--now <rfc3339>]";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("snowspot_engine=info,snow_eval=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn read_input(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(arg).with_context(|| format!("reading {arg}"))
}

fn run_score(input: &str) -> Result<()> {
    let conditions: SnowConditions =
        serde_json::from_str(input).context("parsing snow conditions")?;
    let report = quality::evaluate(&conditions);
    info!(score = report.score, tier = %report.tier, "scored conditions");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_fuse(input: &str, now: Option<&str>, cfg: &EngineConfig) -> Result<()> {
    let readings: Vec<SourceReading> =
        serde_json::from_str(input).context("parsing source readings")?;

    // The wall clock is read here, never inside the engine.
    let now: Timestamp = match now {
        Some(s) => DateTime::<FixedOffset>::parse_from_rfc3339(s)
            .with_context(|| format!("--now {s:?} is not RFC 3339"))?
            .into(),
        None => Utc::now().into(),
    };

    let naive = readings.iter().filter(|r| r.timestamp.is_naive()).count();
    if naive > 0 {
        debug!(naive, "readings without a zone offset are taken as UTC");
    }

    let sources: Vec<_> = readings
        .into_iter()
        .map(|r| r.resolve(&cfg.weights))
        .collect();

    match fuse(&sources, &cfg.fusion, now) {
        Some(result) => {
            info!(
                best_estimate = result.best_estimate,
                confidence = result.confidence,
                used = result.sources_used,
                total = result.total_sources,
                all_used = result.used_all_sources(),
                "fused readings"
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        None => {
            warn!(total = sources.len(), "no usable readings to fuse");
            println!("null");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (cmd, path) = match args.as_slice() {
        [cmd, path, ..] => (cmd.as_str(), path.as_str()),
        _ => bail!(USAGE),
    };

    match cmd {
        "score" => run_score(&read_input(path)?),
        "fuse" => {
            let now = match args.get(2..) {
                Some([flag, value, ..]) if flag == "--now" => Some(value.as_str()),
                Some([]) | None => None,
                Some(_) => bail!(USAGE),
            };
            let cfg = EngineConfig::load().context("loading engine config")?;
            run_fuse(&read_input(path)?, now, &cfg)
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }
}

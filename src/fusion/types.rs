// src/fusion/types.rs
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::source_weights::{default_source_weight, SourceWeights};

/// Reading or reference instant, with or without a zone offset.
///
/// Scrapers often hand over naive local-looking datetimes; those are read as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Instant in UTC; naive values are taken as already UTC.
    pub fn to_utc(self) -> DateTime<Utc> {
        match self {
            Timestamp::Zoned(dt) => dt.with_timezone(&Utc),
            Timestamp::Naive(n) => Utc.from_utc_datetime(&n),
        }
    }

    pub fn is_naive(&self) -> bool {
        matches!(self, Timestamp::Naive(_))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Zoned(dt.into())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp::Zoned(dt)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(n: NaiveDateTime) -> Self {
        Timestamp::Naive(n)
    }
}

/// One reading of a quantity from one provider. The base weight is always
/// resolved before construction; use the constructors or [`SourceReading`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementSource {
    source_name: String,
    value: f64,
    timestamp: Timestamp,
    confidence: f64,
    weight: f64,
}

impl MeasurementSource {
    /// Weight taken from the built-in source table.
    pub fn new(
        source_name: impl Into<String>,
        value: f64,
        timestamp: impl Into<Timestamp>,
        confidence: f64,
    ) -> Self {
        let source_name = source_name.into();
        let weight = default_source_weight(&source_name);
        Self::with_weight(source_name, value, timestamp, confidence, weight)
    }

    /// Explicit base weight; the table is not consulted.
    pub fn with_weight(
        source_name: impl Into<String>,
        value: f64,
        timestamp: impl Into<Timestamp>,
        confidence: f64,
        weight: f64,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            value,
            timestamp: timestamp.into(),
            confidence,
            weight,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Provider-reported confidence, nominally in [0,1].
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Resolved base weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Factory mirroring the scraper hand-off: explicit weight wins, otherwise the
/// built-in table decides.
pub fn create_source(
    source_name: impl Into<String>,
    value: f64,
    timestamp: impl Into<Timestamp>,
    confidence: f64,
    weight: Option<f64>,
) -> MeasurementSource {
    match weight {
        Some(w) => MeasurementSource::with_weight(source_name, value, timestamp, confidence, w),
        None => MeasurementSource::new(source_name, value, timestamp, confidence),
    }
}

/// Raw reading as handed over by collaborators, weight optional.
///
/// Timestamps deserialize from strings only (RFC 3339 or a naive ISO datetime),
/// so JSON input works as-is; native TOML datetimes are not accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReading {
    pub source_name: String,
    pub value: f64,
    pub timestamp: Timestamp,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl SourceReading {
    /// Resolve the base weight against `table` and freeze the reading.
    pub fn resolve(self, table: &SourceWeights) -> MeasurementSource {
        let weight = self
            .weight
            .unwrap_or_else(|| table.weight_for(&self.source_name));
        MeasurementSource::with_weight(
            self.source_name,
            self.value,
            self.timestamp,
            self.confidence,
            weight,
        )
    }
}

/// Outcome of one fusion call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    pub best_estimate: f64,
    /// Aggregate confidence, at most 1.0.
    pub confidence: f64,
    /// Readings that passed the age filter.
    pub sources_used: usize,
    /// Size of the input set, excluded readings included.
    pub total_sources: usize,
}

impl FusionResult {
    /// True when every input reading contributed.
    pub fn used_all_sources(&self) -> bool {
        self.sources_used == self.total_sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn new_resolves_weight_from_table() {
        let s = MeasurementSource::new("snotel", 10.0, t0(), 0.9);
        assert_eq!(s.weight(), 0.4);
        let u = MeasurementSource::new("unknown", 10.0, t0(), 0.9);
        assert_eq!(u.weight(), 0.1);
    }

    #[test]
    fn explicit_weight_preserved() {
        let s = MeasurementSource::with_weight("snotel", 10.0, t0(), 0.9, 0.99);
        assert_eq!(s.weight(), 0.99);
    }

    #[test]
    fn create_source_defaults_and_overrides() {
        let d = create_source("resort_official", 12.0, t0(), 0.9, None);
        assert_eq!(d.source_name(), "resort_official");
        assert_eq!(d.value(), 12.0);
        assert_eq!(d.timestamp(), Timestamp::from(t0()));
        assert_eq!(d.confidence(), 0.9);
        assert_eq!(d.weight(), 0.5);

        let o = create_source("resort_official", 12.0, t0(), 0.9, Some(0.8));
        assert_eq!(o.weight(), 0.8);
    }

    #[test]
    fn naive_timestamp_is_utc() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let ts = Timestamp::from(naive);
        assert!(ts.is_naive());
        assert_eq!(ts.to_utc(), t0());
    }

    #[test]
    fn reading_deserializes_both_timestamp_forms() {
        let zoned: SourceReading = serde_json::from_str(
            r#"{"source_name":"snotel","value":11.5,"timestamp":"2024-01-15T13:00:00+01:00","confidence":0.95}"#,
        )
        .unwrap();
        assert!(!zoned.timestamp.is_naive());
        assert_eq!(zoned.timestamp.to_utc(), t0());

        let naive: SourceReading = serde_json::from_str(
            r#"{"source_name":"snotel","value":11.5,"timestamp":"2024-01-15T12:00:00","confidence":0.95,"weight":0.3}"#,
        )
        .unwrap();
        assert!(naive.timestamp.is_naive());
        assert_eq!(naive.weight, Some(0.3));
    }

    #[test]
    fn resolve_uses_table_only_when_weight_missing() {
        let table = SourceWeights::default().with_alias("nrcs", "snotel");
        let r = SourceReading {
            source_name: "nrcs".into(),
            value: 1.0,
            timestamp: t0().into(),
            confidence: 1.0,
            weight: None,
        };
        assert_eq!(r.clone().resolve(&table).weight(), 0.4);

        let explicit = SourceReading {
            weight: Some(0.05),
            ..r
        };
        assert_eq!(explicit.resolve(&table).weight(), 0.05);
    }
}

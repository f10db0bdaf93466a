// tests/quality_properties.rs
use rand::{rngs::StdRng, Rng, SeedableRng};

use snowspot_engine::quality::{
    evaluate, new_snow_score, quality_description, quality_score, score, QualityTier,
    SnowConditions,
};

#[test]
fn new_snow_breakpoints_belong_to_upper_bucket() {
    let cases = [(1.0, 15.0), (3.0, 20.0), (6.0, 25.0), (12.0, 30.0)];
    for (inches, want) in cases {
        assert_eq!(new_snow_score(Some(inches)), want, "{inches} in");
        assert!(new_snow_score(Some(inches - 0.01)) < want);
    }
}

#[test]
fn new_snow_is_non_decreasing() {
    let mut prev = new_snow_score(Some(-10.0));
    let mut x = -10.0;
    while x < 30.0 {
        x += 0.05;
        let s = new_snow_score(Some(x));
        assert!(s >= prev, "dropped at {x}");
        prev = s;
    }
}

#[test]
fn tier_tuple_matches_description() {
    let (s, t) = score(&SnowConditions::default());
    assert_eq!((s, t), (0.0, QualityTier::Poor));
    assert_eq!(quality_description(s), "Poor Conditions");
}

#[test]
fn random_conditions_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let pick = |rng: &mut StdRng, lo: f64, hi: f64| -> Option<f64> {
            rng.random_bool(0.8).then(|| rng.random_range(lo..hi))
        };
        let c = SnowConditions {
            new_snow_24h_in: pick(&mut rng, -20.0, 80.0),
            temperature_f: pick(&mut rng, -60.0, 90.0),
            wind_speed_mph: pick(&mut rng, -20.0, 150.0),
            days_since_snow: rng.random_bool(0.8).then(|| rng.random_range(-5..60)),
            humidity_percent: pick(&mut rng, -10.0, 140.0),
        };

        let report = evaluate(&c);
        assert!((0.0..=100.0).contains(&report.score));
        assert_eq!(report.score, report.breakdown.total());
        assert_eq!(report.score, quality_score(&c));
        assert_eq!(report.tier, QualityTier::from_score(report.score));
        assert_eq!(score(&c), (report.score, report.tier));
    }
}

#[test]
fn report_serializes_for_callers() {
    let c = SnowConditions::default()
        .with_new_snow(14.0)
        .with_temperature(22.0)
        .with_wind(5.0)
        .with_days_since_snow(0)
        .with_humidity(20.0);
    let v = serde_json::to_value(evaluate(&c)).unwrap();
    assert_eq!(v["score"], serde_json::json!(100.0));
    assert_eq!(v["tier"], serde_json::json!("Epic Powder Day!"));
    assert_eq!(v["breakdown"]["new_snow"], serde_json::json!(30.0));
}

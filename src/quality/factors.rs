//! Per-factor sub-scores. Each is total over its input (absent → 0) and has a
//! fixed ceiling; the ceilings add up to exactly 100.

pub const NEW_SNOW_MAX: f64 = 30.0;
pub const TEMPERATURE_MAX: f64 = 25.0;
pub const WIND_MAX: f64 = 15.0;
pub const SNOW_AGE_MAX: f64 = 20.0;
pub const HUMIDITY_MAX: f64 = 10.0;

/// New snow in the last 24h (inches), 0–30.
pub fn new_snow_score(new_snow_inches: Option<f64>) -> f64 {
    let Some(inches) = new_snow_inches else {
        return 0.0;
    };

    if inches >= 12.0 {
        NEW_SNOW_MAX
    } else if inches >= 6.0 {
        25.0
    } else if inches >= 3.0 {
        20.0
    } else if inches >= 1.0 {
        15.0
    } else if inches > 0.0 {
        10.0 // trace
    } else {
        0.0
    }
}

/// Air temperature (°F), 0–25. Powder keeps best between 15 and 28.
pub fn temperature_score(temperature_f: Option<f64>) -> f64 {
    let Some(t) = temperature_f else {
        return 0.0;
    };

    if (15.0..=28.0).contains(&t) {
        TEMPERATURE_MAX
    } else if (10.0..=32.0).contains(&t) {
        20.0
    } else if (5.0..=35.0).contains(&t) {
        15.0
    } else if t < 5.0 {
        10.0 // brittle
    } else {
        5.0 // heavy, wet
    }
}

/// Wind speed (mph), 0–15. Negative readings score nothing.
pub fn wind_score(wind_speed_mph: Option<f64>) -> f64 {
    let Some(w) = wind_speed_mph else {
        return 0.0;
    };

    if w < 0.0 {
        0.0
    } else if w < 10.0 {
        WIND_MAX
    } else if w < 20.0 {
        10.0
    } else if w < 30.0 {
        5.0
    } else {
        0.0
    }
}

/// Days since the last significant snowfall, 0–20.
pub fn snow_age_score(days_since_snow: Option<i64>) -> f64 {
    match days_since_snow {
        Some(0) => SNOW_AGE_MAX,
        Some(1) => 15.0,
        Some(2..=3) => 10.0,
        Some(4..=7) => 5.0,
        _ => 0.0,
    }
}

/// Relative humidity (%), 0–10. Drier air, lighter snow.
pub fn humidity_score(humidity_percent: Option<f64>) -> f64 {
    let Some(h) = humidity_percent else {
        return 0.0;
    };

    if h < 0.0 {
        0.0
    } else if h < 30.0 {
        HUMIDITY_MAX
    } else if h < 50.0 {
        8.0
    } else if h < 70.0 {
        5.0
    } else {
        2.0
    }
}

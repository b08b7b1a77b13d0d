// File: crates/ticker-chart-core/tests/scenarios.rs
// Purpose: End-to-end pipeline runs over representative series shapes.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use ticker_chart_core::{
    generate_chart, interpolate, normalize, ChartConfig, ChartError, InterpolationOptions, Sample, Warning,
};

fn at(day: u32, minutes: i64) -> DateTime<FixedOffset> {
    let est = FixedOffset::west_opt(5 * 3600).expect("offset");
    est.with_ymd_and_hms(2024, 1, day, 9, 30, 0).single().expect("valid time") + Duration::minutes(minutes)
}

#[test]
fn three_sessions_of_rising_prices() {
    let samples: Vec<Sample> = (0..15)
        .map(|i| Sample::new(at(29 + (i / 5) as u32, 5 * (i % 5) as i64), 100.0 + i as f64))
        .collect();

    let indexed = normalize(&samples).expect("normalize");
    let starts: Vec<usize> = indexed.sessions.iter().map(|s| s.position).collect();
    assert_eq!(starts, vec![0, 5, 10]);

    let curve = interpolate(&indexed, &InterpolationOptions::default());
    assert_eq!(curve.len(), 75);
    for i in 0..15 {
        let v = curve.value_at(i as f64).expect("value");
        assert!((v - (100.0 + i as f64)).abs() < 1e-9);
    }

    let chart = generate_chart("abc", &samples, &ChartConfig::default()).expect("chart");
    assert_eq!(chart.layout.tick_positions, vec![2.0, 7.0, 12.0]);
    assert_eq!(chart.layout.tick_labels, vec!["29 Jan", "30 Jan", "31 Jan"]);
    assert_eq!(chart.layout.curve.len(), 75);
    assert!(chart.warnings().is_empty());
}

#[test]
fn two_samples_fall_back_to_raw_points() {
    let samples = vec![Sample::new(at(29, 0), 50.0), Sample::new(at(29, 5), 52.0)];
    let indexed = normalize(&samples).expect("normalize");
    let curve = interpolate(&indexed, &InterpolationOptions::default());
    assert_eq!(curve.points, vec![(0.0, 50.0), (1.0, 52.0)]);
    assert_eq!(indexed.sessions.len(), 1);
    assert_eq!(indexed.sessions[0].position, 0);

    let chart = generate_chart("abc", &samples, &ChartConfig::default()).expect("chart");
    assert_eq!(
        chart.warnings(),
        &[Warning::InsufficientData { samples: 2 }, Warning::DegenerateLayout { sessions: 1 }]
    );
}

#[test]
fn single_day_has_one_label() {
    let samples: Vec<Sample> = (0..20).map(|i| Sample::new(at(30, 5 * i), 10.0 + (i as f64).sin())).collect();
    let chart = generate_chart("abc", &samples, &ChartConfig::default()).expect("chart");
    assert_eq!(chart.sessions, 1);
    assert_eq!(chart.layout.tick_labels, vec!["30 Jan"]);
    assert_eq!(chart.layout.tick_positions, vec![9.5]);
}

#[test]
fn empty_series_produces_nothing() {
    let err = generate_chart("abc", &[], &ChartConfig::default()).expect_err("must fail");
    assert!(matches!(err, ChartError::EmptyInput));
}

#[test]
fn invalid_config_is_rejected_before_any_work() {
    let mut config = ChartConfig::default();
    config.interpolation.density = 0;
    let samples = vec![Sample::new(at(29, 0), 1.0)];
    let err = generate_chart("abc", &samples, &config).expect_err("must fail");
    assert!(matches!(err, ChartError::Config(_)));
}

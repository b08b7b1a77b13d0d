// File: crates/ticker-chart-core/tests/normalize.rs
// Purpose: Dense positions and calendar-day session detection.

use chrono::{DateTime, Duration, FixedOffset, TimeZone};
use proptest::prelude::*;
use ticker_chart_core::{normalize, ChartError, Sample};

fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
    let est = FixedOffset::west_opt(5 * 3600).expect("offset");
    est.with_ymd_and_hms(2024, 1, day, hour, minute, 0).single().expect("valid time")
}

fn session(day: u32, count: usize, first_price: f64) -> Vec<Sample> {
    (0..count)
        .map(|i| Sample::new(at(day, 9, 30) + Duration::minutes(5 * i as i64), first_price + i as f64))
        .collect()
}

#[test]
fn positions_are_dense_regardless_of_elapsed_time() {
    // Friday, then Monday after a weekend, then Tuesday
    let mut samples = session(26, 3, 10.0);
    samples.extend(session(29, 4, 20.0));
    samples.extend(session(30, 2, 30.0));

    let indexed = normalize(&samples).expect("normalize");
    assert_eq!(indexed.position, (0..9).collect::<Vec<_>>());
    assert_eq!(indexed.price.len(), 9);
    assert_eq!(indexed.price[3], 20.0);
}

#[test]
fn one_boundary_per_calendar_day_in_order() {
    let mut samples = session(26, 3, 10.0);
    samples.extend(session(29, 4, 20.0));
    samples.extend(session(30, 2, 30.0));

    let indexed = normalize(&samples).expect("normalize");
    let starts: Vec<usize> = indexed.sessions.iter().map(|s| s.position).collect();
    let labels: Vec<&str> = indexed.sessions.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(starts, vec![0, 3, 7]);
    assert_eq!(labels, vec!["26 Jan", "29 Jan", "30 Jan"]);
}

#[test]
fn session_spans_are_inclusive() {
    let mut samples = session(29, 5, 1.0);
    samples.extend(session(30, 5, 1.0));
    let indexed = normalize(&samples).expect("normalize");
    assert_eq!(indexed.session_span(0), Some((0, 4)));
    assert_eq!(indexed.session_span(1), Some((5, 9)));
    assert_eq!(indexed.session_span(2), None);
}

#[test]
fn duplicate_timestamps_do_not_break_indexing() {
    let t = at(29, 10, 0);
    let samples = vec![Sample::new(t, 1.0), Sample::new(t, 2.0), Sample::new(t + Duration::minutes(5), 3.0)];
    let indexed = normalize(&samples).expect("normalize");
    assert_eq!(indexed.position, vec![0, 1, 2]);
    assert_eq!(indexed.sessions.len(), 1);
}

#[test]
fn calendar_day_follows_the_sample_offset() {
    // 23:30 at -05:00 is already the next day in UTC; it still belongs to the 29th.
    let samples = vec![Sample::new(at(29, 15, 55), 1.0), Sample::new(at(29, 23, 30), 2.0)];
    let indexed = normalize(&samples).expect("normalize");
    assert_eq!(indexed.sessions.len(), 1);
    assert_eq!(indexed.sessions[0].label, "29 Jan");
}

#[test]
fn previous_session_close_is_last_price_before_final_day() {
    let mut samples = session(29, 3, 10.0);
    samples.extend(session(30, 3, 50.0));
    let indexed = normalize(&samples).expect("normalize");
    assert_eq!(indexed.previous_session_close(), Some(12.0));

    let single = normalize(&session(29, 3, 10.0)).expect("normalize");
    assert_eq!(single.previous_session_close(), None);
}

#[test]
fn empty_series_is_rejected() {
    let err = normalize(&[]).expect_err("empty input must fail");
    assert!(matches!(err, ChartError::EmptyInput));
}

/// Sorted samples built from minute steps (0 gives a duplicate timestamp) so
/// sessions of every length, including single samples, come up.
fn stepped_series(steps: &[(i64, f64)]) -> Vec<Sample> {
    let mut t = at(26, 9, 30);
    steps
        .iter()
        .map(|&(step, price)| {
            t += Duration::minutes(step);
            Sample::new(t, price)
        })
        .collect()
}

proptest! {
    #[test]
    fn positions_are_dense_for_any_series(steps in prop::collection::vec((0i64..2_000, -1e6f64..1e6), 1..200)) {
        let samples = stepped_series(&steps);
        let indexed = normalize(&samples).expect("normalize");

        prop_assert_eq!(indexed.position.clone(), (0..samples.len()).collect::<Vec<_>>());
        let prices: Vec<f64> = samples.iter().map(|s| s.price).collect();
        prop_assert_eq!(indexed.price.clone(), prices);
    }

    #[test]
    fn boundaries_mark_exactly_the_date_changes(steps in prop::collection::vec((0i64..2_000, 0.0f64..500.0), 1..200)) {
        let samples = stepped_series(&steps);
        let indexed = normalize(&samples).expect("normalize");

        prop_assert_eq!(indexed.sessions[0].position, 0);
        for pair in indexed.sessions.windows(2) {
            prop_assert!(pair[0].position < pair[1].position);
        }
        let expected: Vec<usize> = (0..samples.len())
            .filter(|&i| i == 0 || samples[i].date() != samples[i - 1].date())
            .collect();
        let got: Vec<usize> = indexed.sessions.iter().map(|b| b.position).collect();
        prop_assert_eq!(got, expected);
        for b in &indexed.sessions {
            prop_assert_eq!(b.date, samples[b.position].date());
        }
    }
}

// File: crates/ticker-chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a chart with the print preset to PNG bytes and checks that two renders match.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the golden comparison to ease first run.

use chrono::{Duration, FixedOffset, TimeZone};
use ticker_chart_core::{generate_chart, ChartConfig, Sample};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn render_bytes() -> Vec<u8> {
    let est = FixedOffset::west_opt(5 * 3600).expect("offset");
    let prices = [
        [101.0, 101.6, 102.4, 102.1, 101.8],
        [101.2, 100.7, 100.9, 101.5, 102.0],
        [102.3, 103.1, 103.4, 102.9, 103.6],
    ];
    let mut samples = Vec::new();
    for (d, day) in prices.iter().enumerate() {
        let open = est.with_ymd_and_hms(2024, 1, 29 + d as u32, 9, 30, 0).unwrap();
        for (i, &p) in day.iter().enumerate() {
            samples.push(Sample::new(open + Duration::minutes(90 * i as i64), p));
        }
    }

    let cfg = ChartConfig::default();
    let chart = generate_chart("snap", &samples, &cfg).expect("generate");
    chart.to_png_bytes(&cfg).expect("render bytes")
}

#[test]
fn golden_three_day_chart() {
    let bytes = render_bytes();

    // Rendering is deterministic, golden file or not.
    let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
    assert_eq!(got_img.dimensions(), (1247, 525));
    let again = image::load_from_memory(&render_bytes()).expect("decode again").to_rgba8();
    assert_eq!(got_img.as_raw(), again.as_raw(), "two renders of the same chart differ");

    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("three_day_chart.png");

    if bless_mode() {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

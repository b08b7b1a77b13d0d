// File: crates/ticker-chart-core/tests/config.rs
// Purpose: TOML configuration defaults, overrides and validation.

use ticker_chart_core::{ChartConfig, ChartError, ChartStyle};

#[test]
fn defaults_match_print_layout() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.interpolation.density, 5);
    assert!(cfg.interpolation.interpolate_across_sessions);
    assert_eq!(cfg.style.theme, "print");
    // 105.6mm x 44.45mm at 300 DPI
    assert_eq!(cfg.style.pixel_size(), (1247, 525));
    assert!((cfg.style.pt(72.0) - 300.0).abs() < 1e-3);
}

#[test]
fn empty_document_is_the_default() {
    let cfg = ChartConfig::from_toml_str("").expect("parse");
    assert_eq!(cfg, ChartConfig::default());
}

#[test]
fn partial_document_overrides_named_keys_only() {
    let cfg = ChartConfig::from_toml_str(
        r#"
        [interpolation]
        density = 8
        interpolate_across_sessions = false

        [style]
        theme = "dark"
        dpi = 150.0

        [style.margins]
        left = 0.1
        "#,
    )
    .expect("parse");

    assert_eq!(cfg.interpolation.density, 8);
    assert!(!cfg.interpolation.interpolate_across_sessions);
    assert_eq!(cfg.style.theme, "dark");
    assert_eq!(cfg.style.dpi, 150.0);
    assert_eq!(cfg.style.margins.left, 0.1);
    assert_eq!(cfg.style.margins.right, ChartStyle::default().margins.right);
    assert_eq!(cfg.style.width_mm, ChartStyle::default().width_mm);
}

#[test]
fn zero_density_is_rejected() {
    let err = ChartConfig::from_toml_str("[interpolation]\ndensity = 0\n").expect_err("invalid");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn unknown_theme_is_rejected() {
    let err = ChartConfig::from_toml_str("[style]\ntheme = \"neon\"\n").expect_err("invalid");
    assert!(matches!(err, ChartError::UnknownTheme(name) if name == "neon"));
}

#[test]
fn theme_lookup_ignores_case() {
    let cfg = ChartConfig::from_toml_str("[style]\ntheme = \"LIGHT\"\n").expect("parse");
    assert_eq!(cfg.style.resolve_theme().expect("theme").name, "light");
}

#[test]
fn unknown_keys_and_bad_margins_are_rejected() {
    assert!(ChartConfig::from_toml_str("[style]\ncolour = \"red\"\n").is_err());
    let err = ChartConfig::from_toml_str("[style.margins]\nleft = 0.99\n").expect_err("invalid");
    assert!(matches!(err, ChartError::Config(_)));
}

use ppcplan_bulksheet::BulksheetConfig;
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn defaults() {
    let config = BulksheetConfig::default();
    assert_eq!(config.headline_template, "Shop {brand} best sellers now!");
    assert_eq!(config.fallback_keyword_bid, 1.0);
    assert_eq!(config.audience_lookback_days, 30);
}

#[test]
fn empty_toml_is_default() {
    assert_eq!(BulksheetConfig::parse("").unwrap(), BulksheetConfig::default());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = BulksheetConfig::parse("audience_lookback_days = 90\n").unwrap();
    assert_eq!(config.audience_lookback_days, 90);
    assert_eq!(config.fallback_keyword_bid, 1.0);
}

#[test]
fn full_toml() {
    let config = BulksheetConfig::parse(
        r#"
headline_template = "Meet {brand}"
fallback_keyword_bid = 0.5
audience_lookback_days = 14
"#,
    )
    .unwrap();
    assert_eq!(config.headline("Kingdom"), "Meet Kingdom");
    assert_eq!(config.fallback_keyword_bid, 0.5);
    assert_eq!(config.audience_lookback_days, 14);
}

#[test]
fn wrongly_typed_field_is_error() {
    let err = BulksheetConfig::parse("audience_lookback_days = \"thirty\"").unwrap_err();
    assert!(format!("{err}").contains("invalid config"));
}

#[test]
fn headline_without_placeholder_is_literal() {
    let config = BulksheetConfig {
        headline_template: "Best sellers".into(),
        ..BulksheetConfig::default()
    };
    assert_eq!(config.headline("Kingdom"), "Best sellers");
}

// ── load_from ────────────────────────────────────────────────────

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = BulksheetConfig::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, BulksheetConfig::default());
}

#[test]
fn load_from_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "fallback_keyword_bid = 0.8").unwrap();
    let config = BulksheetConfig::load_from(file.path());
    assert_eq!(config.fallback_keyword_bid, 0.8);
}

#[test]
fn load_from_unparsable_file_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is = = not toml").unwrap();
    let config = BulksheetConfig::load_from(file.path());
    assert_eq!(config, BulksheetConfig::default());
}

#[test]
fn load_from_directory_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = BulksheetConfig::load_from(dir.path());
    assert_eq!(config, BulksheetConfig::default());
}

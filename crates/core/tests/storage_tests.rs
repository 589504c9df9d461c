// ═══════════════════════════════════════════════════════════════════
// Storage Tests — SettingsStore round trips, version gate,
// load-time validation
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use tempfile::tempdir;

use currency_monitor_core::errors::CoreError;
use currency_monitor_core::models::settings::{Settings, SETTINGS_VERSION};
use currency_monitor_core::storage::store::SettingsStore;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn configured_settings() -> Settings {
    Settings {
        version: SETTINGS_VERSION,
        sale_date: Some(date("2024-01-01")),
        usd_amount: Some(1000.0),
        sale_date_rate: Some(0.92),
        commission: 2.0,
    }
}

#[test]
fn bytes_round_trip_preserves_settings() {
    let settings = configured_settings();
    let bytes = SettingsStore::save_to_bytes(&settings).unwrap();
    let restored = SettingsStore::load_from_bytes(&bytes).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn file_round_trip_preserves_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let path = path.to_str().unwrap();

    let settings = configured_settings();
    SettingsStore::save_to_file(&settings, path).unwrap();
    let restored = SettingsStore::load_from_file(path).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn default_settings_are_unconfigured() {
    let settings = Settings::default();
    assert!(!settings.is_configured());
    assert!(settings.baseline().is_none());
    assert_eq!(settings.commission, 2.0);

    // Defaults survive a round trip
    let bytes = SettingsStore::save_to_bytes(&settings).unwrap();
    let restored = SettingsStore::load_from_bytes(&bytes).unwrap();
    assert!(!restored.is_configured());
}

#[test]
fn configured_settings_project_to_baseline() {
    let baseline = configured_settings().baseline().unwrap();
    assert_eq!(baseline.sale_date, date("2024-01-01"));
    assert_eq!(baseline.usd_amount, 1000.0);
    assert_eq!(baseline.sale_date_rate, 0.92);
    assert_eq!(baseline.commission, 2.0);
}

#[test]
fn load_rejects_newer_version() {
    let mut settings = configured_settings();
    settings.version = SETTINGS_VERSION + 1;
    let bytes = SettingsStore::save_to_bytes(&settings).unwrap();

    match SettingsStore::load_from_bytes(&bytes) {
        Err(CoreError::UnsupportedVersion(v)) => assert_eq!(v, SETTINGS_VERSION + 1),
        other => panic!("expected UnsupportedVersion, got {other:?}"),
    }
}

#[test]
fn load_rejects_malformed_document() {
    assert!(matches!(
        SettingsStore::load_from_bytes(b"not json at all"),
        Err(CoreError::Deserialization(_))
    ));
}

#[test]
fn load_rejects_document_without_version() {
    // No implicit defaults merged in on load — an unversioned document
    // is malformed, not silently patched.
    let raw = br#"{"commission":2.0}"#;
    assert!(matches!(
        SettingsStore::load_from_bytes(raw),
        Err(CoreError::Deserialization(_))
    ));
}

#[test]
fn load_accepts_unconfigured_document() {
    // First-run state: no sale date recorded yet.
    let raw = br#"{"version":1,"commission":2.0,"sale_date":null,"usd_amount":null,"sale_date_rate":null}"#;
    let settings = SettingsStore::load_from_bytes(raw).unwrap();
    assert!(!settings.is_configured());
}

#[test]
fn load_rejects_out_of_range_fields() {
    let mut negative_amount = configured_settings();
    negative_amount.usd_amount = Some(-5.0);
    let bytes = SettingsStore::save_to_bytes(&negative_amount).unwrap();
    assert!(matches!(
        SettingsStore::load_from_bytes(&bytes),
        Err(CoreError::ValidationError(_))
    ));

    let mut bad_commission = configured_settings();
    bad_commission.commission = 120.0;
    let bytes = SettingsStore::save_to_bytes(&bad_commission).unwrap();
    assert!(matches!(
        SettingsStore::load_from_bytes(&bytes),
        Err(CoreError::ValidationError(_))
    ));
}

#[test]
fn load_rejects_full_commission_as_configuration_fault() {
    // 100% commission makes the breakeven rate undefined; a stored
    // document carrying it must not load.
    let mut settings = configured_settings();
    settings.commission = 100.0;
    let bytes = SettingsStore::save_to_bytes(&settings).unwrap();
    assert!(matches!(
        SettingsStore::load_from_bytes(&bytes),
        Err(CoreError::ConfigurationFault(_))
    ));
}

#[test]
fn missing_file_surfaces_as_file_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    assert!(matches!(
        SettingsStore::load_from_file(path.to_str().unwrap()),
        Err(CoreError::FileIO(_))
    ));
}

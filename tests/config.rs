//! config.toml 로드/저장 테스트.
use led_driver_calculator::config::{self, Config, ConfigError, LogLevel};
use led_driver_calculator::units::LengthUnit;
use std::fs;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_or_create(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.defaults.voltage, 12.0);
    assert_eq!(cfg.defaults.density, 60);
    assert_eq!(cfg.log_level, LogLevel::Warn);
}

#[test]
fn saved_config_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "hi".into();
    cfg.defaults.length_unit = LengthUnit::Foot;
    cfg.defaults.pieces = 4;
    cfg.save_to(&path).expect("save");

    let text = fs::read_to_string(&path).expect("read");
    assert!(text.contains("length_unit = \"ft\""), "{text}");
    let loaded = config::load_or_create(&path).expect("reload");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = \"hi\"\nlog_level = \"debug\"\n\n[defaults]\nvoltage = 24.0\n")
        .expect("write");
    let cfg = config::load_or_create(&path).expect("load");
    assert_eq!(cfg.language, "hi");
    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(cfg.defaults.voltage, 24.0);
    assert_eq!(cfg.defaults.density, 60);
    assert_eq!(cfg.defaults.length_unit, LengthUnit::Meter);
}

#[test]
fn broken_file_reports_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [unterminated").expect("write");
    let err = config::load_or_create(&path).expect_err("parse error");
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}

use image_registration::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.toml");

    let config = EngineConfig::new(0.9, 0.7, false).unwrap();
    config.save_to_file(&path, ConfigFormat::Toml).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.min_score, 0.9);
    assert_eq!(loaded.min_inlier_ratio, 0.7);
    assert!(!loaded.enable_fallback);
}

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");

    let config = EngineConfig::default();
    config.save_to_file(&path, ConfigFormat::Json).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.min_score, 0.85);
    assert_eq!(loaded.min_inlier_ratio, 0.6);
    assert!(loaded.enable_fallback);
}

#[test]
fn test_format_detected_by_leading_brace() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config");

    fs::write(
        &path,
        r#"{"min_score": 0.8, "min_inlier_ratio": 0.5, "enable_fallback": true}"#,
    )
    .unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.min_score, 0.8);
}

#[test]
fn test_out_of_range_threshold_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");

    fs::write(
        &path,
        "min_score = 1.5\nmin_inlier_ratio = 0.5\nenable_fallback = true\n",
    )
    .unwrap();

    let err = EngineConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::ScoreThresholdOutOfRange(s) if s == 1.5
    ));
}

#[test]
fn test_unparseable_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.toml");

    fs::write(&path, "not = [valid").unwrap();

    let err = EngineConfig::load_from_file(&path).unwrap_err();
    match err {
        ConfigurationError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = EngineConfig::load_from_file("/nonexistent/engine.toml").unwrap_err();
    assert!(matches!(err, ConfigurationError::Io(_)));
}

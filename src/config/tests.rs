//! Tests for config functionality.

use crate::config::{Config, TargetConfig};
use crate::error::SweepError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.threshold_hours, 72);
    assert_eq!(config.retention_days, 30);
    assert!(config.targets.is_empty());
    assert!(config.trash_dir.is_none());
    assert!(config.log_dir.is_none());
    assert!(config.notify);
    assert!(config.notify_command.is_none());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.threshold_hours, 72);
    assert_eq!(config.retention_days, 30);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
threshold_hours: 48
notify: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.threshold_hours, 48);
    assert!(!config.notify);
    assert_eq!(config.retention_days, 30);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
threshold_hours: 24
retention_days: 7
log_dir: /var/tmp/desksweep-logs
trash_dir: /var/tmp/desksweep-trash
notify: true
notify_command: "notify-send --app-name=desksweep {title} {message}"
targets:
  - label: Downloads
    path: ~/Downloads
  - label: Screenshots
    path: /home/me/Pictures/Screenshots
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.threshold_hours, 24);
    assert_eq!(config.retention_days, 7);
    assert_eq!(config.log_dir, Some(PathBuf::from("/var/tmp/desksweep-logs")));
    assert_eq!(config.trash_dir, Some(PathBuf::from("/var/tmp/desksweep-trash")));
    assert_eq!(
        config.targets,
        vec![
            TargetConfig {
                label: "Downloads".to_string(),
                path: PathBuf::from("~/Downloads"),
            },
            TargetConfig {
                label: "Screenshots".to_string(),
                path: PathBuf::from("/home/me/Pictures/Screenshots"),
            },
        ]
    );
    assert!(config.notify_command.unwrap().starts_with("notify-send"));
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
threshold_hours: 96
unknown_field: "some value"
another_unknown:
  nested: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.threshold_hours, 96);
}

#[test]
fn test_parse_invalid_yaml() {
    let result = Config::from_yaml("threshold_hours: [not, a, number]");
    assert!(matches!(result, Err(SweepError::ConfigError(_))));
}

#[test]
fn test_validate_zero_threshold() {
    let result = Config::from_yaml("threshold_hours: 0");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("threshold_hours"));
}

#[test]
fn test_validate_empty_target_label() {
    let yaml = r#"
targets:
  - label: ""
    path: /tmp/x
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("label must be non-empty"));
}

#[test]
fn test_validate_duplicate_target_labels() {
    let yaml = r#"
targets:
  - label: Desktop
    path: /tmp/a
  - label: Desktop
    path: /tmp/b
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(err.to_string().contains("duplicate target label 'Desktop'"));
}

#[test]
fn test_validate_notify_command_unmatched_quote() {
    let err = Config::from_yaml("notify_command: 'notify-send \"oops'").unwrap_err();
    assert!(err.to_string().contains("notify_command"));
}

#[test]
fn test_validate_notify_command_blank() {
    let err = Config::from_yaml("notify_command: '   '").unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_config_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "retention_days: 3\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.retention_days, 3);
}

#[test]
fn test_config_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let result = Config::load(temp.path().join("missing.yaml"));
    assert!(matches!(result, Err(SweepError::ConfigError(_))));
}

#[test]
fn test_config_load_or_default_missing_file() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_or_default(temp.path().join("missing.yaml")).unwrap();
    assert_eq!(config.threshold_hours, 72);
}

#[test]
fn test_config_load_or_default_reports_bad_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yaml");
    std::fs::write(&path, "threshold_hours: 0\n").unwrap();

    assert!(Config::load_or_default(&path).is_err());
}

//! Tests for settings files.

use std::fs;

use crate::config::{Settings, SettingsError};
use crate::parser::Delimiter;

#[test]
fn defaults() {
    let s = Settings::default();
    assert_eq!(s.separator, Delimiter::Comma);
    assert!(!s.pretty);
    assert_eq!(s.channel_capacity, 1);
}

#[test]
fn json_settings_with_missing_fields() {
    let s = Settings::from_json_str(r#"{"separator": "semicolon"}"#).unwrap();
    assert_eq!(s.separator, Delimiter::Semicolon);
    assert!(!s.pretty);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Settings::from_json_str(r#"{"seperator": "comma"}"#).unwrap_err();
    assert!(matches!(err, SettingsError::Json(_)));
}

#[test]
fn unknown_separator_is_rejected() {
    assert!(Settings::from_json_str(r#"{"separator": "tab"}"#).is_err());
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_settings() {
    let yaml = "separator: semicolon\npretty: true\nchannel_capacity: 8\n";
    let s = Settings::from_yaml_str(yaml).unwrap();

    assert_eq!(
        s,
        Settings {
            separator: Delimiter::Semicolon,
            pretty: true,
            channel_capacity: 8,
        }
    );
}

#[test]
fn from_path_picks_parser_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let json = dir.path().join("settings.json");
    fs::write(&json, r#"{"pretty": true}"#).unwrap();
    assert!(Settings::from_path(&json).unwrap().pretty);

    let toml = dir.path().join("settings.toml");
    fs::write(&toml, "pretty = true").unwrap();
    assert!(matches!(
        Settings::from_path(&toml),
        Err(SettingsError::UnsupportedFormat(ext)) if ext == "toml"
    ));
}

#[cfg(feature = "yaml")]
#[test]
fn from_path_reads_yml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yml");
    fs::write(&path, "separator: semicolon\n").unwrap();

    assert_eq!(
        Settings::from_path(&path).unwrap().separator,
        Delimiter::Semicolon
    );
}

#[test]
fn from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_path(dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, SettingsError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

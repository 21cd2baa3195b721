use super::*;
use crate::align::separator::Gravity;
use crate::services::ports::settings::SeparatorRule;
use std::io::Write;

fn rule(token: &str, gravity: &str) -> SeparatorRule {
    SeparatorRule {
        token: token.to_string(),
        gravity: gravity.to_string(),
    }
}

#[test]
fn config_from_valid_settings() {
    let settings = Settings {
        tab_size: 8,
        separators: vec![rule("=", "right"), rule("//", "left")],
    };
    let config = config_from_settings(&settings).unwrap();
    assert_eq!(config.tab_size, 8);
    assert_eq!(config.separators.len(), 2);
    assert_eq!(config.separators[0].gravity, Gravity::Right);
    assert_eq!(config.separators[1].token, "//");
}

#[test]
fn empty_token_is_rejected_at_load_time() {
    let settings = Settings {
        tab_size: 4,
        separators: vec![rule("", "left")],
    };
    assert_eq!(
        config_from_settings(&settings).unwrap_err(),
        SeparatorError::EmptyToken
    );
}

#[test]
fn unknown_gravity_is_rejected_at_load_time() {
    let settings = Settings {
        tab_size: 4,
        separators: vec![rule("=", "down")],
    };
    assert_eq!(
        config_from_settings(&settings).unwrap_err(),
        SeparatorError::UnknownGravity("down".to_string())
    );
}

#[test]
fn zero_tab_size_is_clamped() {
    let settings = Settings {
        tab_size: 0,
        separators: Vec::new(),
    };
    let config = config_from_settings(&settings).unwrap();
    assert_eq!(config.tab_size, 1);
}

#[test]
fn settings_document_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setting.json");

    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        br#"{ "tab_size": 2, "separators": [{ "token": "=>", "gravity": "right" }] }"#,
    )
    .unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let settings: Settings = serde_json::from_str(&data).unwrap();
    assert_eq!(settings.tab_size, 2);

    let config = config_from_settings(&settings).unwrap();
    assert_eq!(config.separators[0].token, "=>");
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.tab_size, 4);
    assert!(settings.separators.is_empty());
}

#[test]
fn default_settings_validate() {
    let config = config_from_settings(&Settings::default()).unwrap();
    assert_eq!(config.tab_size, 4);
    assert_eq!(config.separators.len(), 2);
}

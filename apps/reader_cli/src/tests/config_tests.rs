use std::{collections::HashMap, path::PathBuf};

use super::{apply_env_overrides, apply_file_settings, parse_flag, Settings};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_use_builtin_catalog_and_persist() {
    let settings = Settings::default();
    assert_eq!(settings.catalog_path, None);
    assert!(settings.persist);
    assert_eq!(settings.log_filter, "info");
    assert!(settings.preferences_path.ends_with("preferences.json"));
}

#[test]
fn file_settings_override_defaults() {
    let mut settings = Settings::default();
    apply_file_settings(
        &mut settings,
        r#"
catalog_path = "./stories.toml"
persist = false
log_filter = "reader_core=debug"
"#,
    )
    .expect("parse");

    assert_eq!(settings.catalog_path, Some(PathBuf::from("./stories.toml")));
    assert!(!settings.persist);
    assert_eq!(settings.log_filter, "reader_core=debug");
    assert_eq!(
        settings.preferences_path,
        Settings::default().preferences_path
    );
}

#[test]
fn malformed_file_settings_are_reported() {
    let mut settings = Settings::default();
    assert!(apply_file_settings(&mut settings, "persist = \"sometimes").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_short_names() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("READER_CATALOG", "./short.toml"),
            ("APP__CATALOG_PATH", "./long.toml"),
            ("READER_PREFERENCES", "./prefs.json"),
            ("APP__PERSIST", "off"),
        ]),
    );

    assert_eq!(settings.catalog_path, Some(PathBuf::from("./long.toml")));
    assert_eq!(settings.preferences_path, PathBuf::from("./prefs.json"));
    assert!(!settings.persist);
}

#[test]
fn blank_or_garbled_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("APP__PREFERENCES_PATH", "   "),
            ("APP__PERSIST", "maybe"),
            ("APP__LOG_FILTER", ""),
        ]),
    );

    assert_eq!(settings, Settings::default());
}

#[test]
fn parses_common_flag_spellings() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag(" 0 "), Some(false));
    assert_eq!(parse_flag("later"), None);
}

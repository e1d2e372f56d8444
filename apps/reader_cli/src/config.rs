use std::{fs, io, path::PathBuf};

use anyhow::Context;
use serde::Deserialize;

const SETTINGS_FILE: &str = "reader.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` uses the built-in story list.
    pub catalog_path: Option<PathBuf>,
    pub preferences_path: PathBuf,
    pub persist: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            preferences_path: default_preferences_path(),
            persist: true,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    catalog_path: Option<PathBuf>,
    preferences_path: Option<PathBuf>,
    persist: Option<bool>,
    log_filter: Option<String>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(SETTINGS_FILE) {
        Ok(raw) => apply_file_settings(&mut settings, &raw)
            .with_context(|| format!("failed to parse settings file '{SETTINGS_FILE}'"))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{SETTINGS_FILE}'"));
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, raw: &str) -> Result<(), toml::de::Error> {
    let file_cfg: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file_cfg.catalog_path {
        settings.catalog_path = Some(v);
    }
    if let Some(v) = file_cfg.preferences_path {
        settings.preferences_path = v;
    }
    if let Some(v) = file_cfg.persist {
        settings.persist = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }

    Ok(())
}

/// Later names win; blank values are ignored.
fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read("READER_CATALOG") {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = read("APP__CATALOG_PATH") {
        settings.catalog_path = Some(PathBuf::from(v));
    }

    if let Some(v) = read("READER_PREFERENCES") {
        settings.preferences_path = PathBuf::from(v);
    }
    if let Some(v) = read("APP__PREFERENCES_PATH") {
        settings.preferences_path = PathBuf::from(v);
    }

    if let Some(v) = read("APP__PERSIST") {
        if let Some(parsed) = parse_flag(&v) {
            settings.persist = parsed;
        }
    }

    if let Some(v) = read("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn default_preferences_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("story_reader"))
        .unwrap_or_else(|| PathBuf::from("./data"))
        .join("preferences.json")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use crate::{PreferenceError, PreferenceStore};

/// Preferences kept as one flat JSON object of strings.
///
/// The whole file is rewritten on every `set`; a missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFilePreferenceStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    /// Starts from an empty map; the first write replaces whatever is on disk.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string_pretty(&self.entries)?;
        let staging = self.path.with_extension("json.tmp");
        let written =
            fs::write(&staging, serialized).and_then(|()| fs::rename(&staging, &self.path));
        if let Err(err) = written {
            if staging.is_file() {
                let _ = fs::remove_file(&staging);
            }
            return Err(err.into());
        }
        tracing::trace!(path = %self.path.display(), "flushed preferences");
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        // Memory only reflects what reached disk, so a failed write is retried
        // by the next identical `set`.
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            match previous {
                Some(previous) => self.entries.insert(key.to_string(), previous),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

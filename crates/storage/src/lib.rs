//! Key-value preference stores used to remember the reader's last choice.
//!
//! Stores are fallible, but callers on the selection path treat every failure
//! as "no saved preference" on read and ignore it on write.

use std::collections::HashMap;

use thiserror::Error;

mod file;

pub use file::JsonFilePreferenceStore;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference store is unavailable")]
    Unavailable,
    #[error("preference store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub trait PreferenceStore {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// Store that remembers nothing. Used when persistence is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPreferenceStore;

impl PreferenceStore for NullPreferenceStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Ok(())
    }
}

/// In-process store. Can be flipped into an unavailable state to mimic a
/// browser with storage disabled.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: HashMap<String, String>,
    unavailable: bool,
    writes: usize,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Reads an entry regardless of availability.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        if self.unavailable {
            return Err(PreferenceError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.unavailable {
            return Err(PreferenceError::Unavailable);
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

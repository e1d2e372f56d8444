//! Selection state machine.
//!
//! Two state variables, two atomic transitions. After any transition the
//! selected language is one the selected story actually offers.

use catalog::Catalog;
use serde::Serialize;
use shared::{
    domain::{Language, StoryId, StoryRecord},
    error::SelectionError,
};
use storage::PreferenceStore;
use tracing::{debug, info, warn};

use crate::view_model::ViewModel;

pub const DEFAULT_STORY_KEY: &str = "owms-story";
pub const DEFAULT_LANGUAGE_KEY: &str = "owms-lang";

/// Preference keys used to remember the last choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    pub story_key: String,
    pub language_key: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            story_key: DEFAULT_STORY_KEY.into(),
            language_key: DEFAULT_LANGUAGE_KEY.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub story_id: StoryId,
    pub language: Language,
}

pub struct SelectionController<S> {
    catalog: Catalog,
    store: S,
    config: ControllerConfig,
    // Index into `catalog`, so the selected story always exists.
    selected: usize,
    language: Language,
}

impl<S: PreferenceStore> SelectionController<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self::with_config(catalog, store, ControllerConfig::default())
    }

    /// Restores the saved selection when it is still valid against `catalog`,
    /// otherwise starts on the first story in English.
    pub fn with_config(catalog: Catalog, store: S, config: ControllerConfig) -> Self {
        let saved_story = read_preference(&store, &config.story_key);
        let saved_language = read_preference(&store, &config.language_key);

        let selected = match saved_story.as_deref() {
            Some(id) => catalog.position(id).unwrap_or_else(|| {
                debug!(story_id = id, "saved story no longer in catalog");
                0
            }),
            None => 0,
        };
        let story = &catalog.list_stories()[selected];
        let language = saved_language
            .as_deref()
            .and_then(Language::from_code)
            .filter(|language| story.has_language(*language))
            .unwrap_or(Language::En);

        if saved_story.is_some() || saved_language.is_some() {
            info!(
                story_id = %story.id,
                language = %language,
                "restored reader selection"
            );
        }

        Self {
            catalog,
            store,
            config,
            selected,
            language,
        }
    }

    pub fn select_story(&mut self, id: &str) -> Result<ViewModel, SelectionError> {
        let Some(index) = self.catalog.position(id) else {
            debug!(story_id = id, "rejected unknown story");
            return Err(SelectionError::UnknownStory(StoryId::new(id)));
        };

        let language = repair_language(&self.catalog.list_stories()[index], self.language);
        Ok(self.commit(index, language))
    }

    pub fn select_language(&mut self, code: &str) -> Result<ViewModel, SelectionError> {
        let language: Language = code.parse().map_err(|err| {
            debug!(code, "rejected unsupported language");
            err
        })?;

        let story = self.story();
        if !story.has_language(language) {
            debug!(story_id = %story.id, language = %language, "rejected unavailable language");
            return Err(SelectionError::LanguageUnavailable {
                story_id: story.id.clone(),
                language,
            });
        }

        Ok(self.commit(self.selected, language))
    }

    pub fn current_view_model(&self) -> ViewModel {
        ViewModel::build(&self.catalog, self.story(), self.language)
    }

    pub fn is_language_available(&self, language: Language) -> bool {
        self.story().has_language(language)
    }

    pub fn state(&self) -> SelectionState {
        SelectionState {
            story_id: self.story().id.clone(),
            language: self.language,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn story(&self) -> &StoryRecord {
        &self.catalog.list_stories()[self.selected]
    }

    fn commit(&mut self, selected: usize, language: Language) -> ViewModel {
        self.selected = selected;
        self.language = language;
        self.persist();
        self.current_view_model()
    }

    fn persist(&mut self) {
        let story_id = self.catalog.list_stories()[self.selected].id.as_str();
        let entries = [
            (self.config.story_key.as_str(), story_id),
            (self.config.language_key.as_str(), self.language.code()),
        ];

        for (key, value) in entries {
            if let Err(err) = self.store.set(key, value) {
                warn!(key, error = %err, "failed to persist reader preference");
            }
        }
    }
}

/// Falls back to English, which every catalog story offers.
fn repair_language(story: &StoryRecord, language: Language) -> Language {
    if story.has_language(language) {
        language
    } else {
        Language::En
    }
}

fn read_preference<S: PreferenceStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "failed to read reader preference");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

//! Immutable story catalog.
//!
//! A [`Catalog`] is validated once at construction and never changes: it holds
//! at least one story, ids are unique and non-blank, and every story offers an
//! English resource. Lookups are side-effect free.

use std::collections::HashSet;

use shared::domain::{Language, LanguageSet, StoryId, StoryRecord};

mod builtin;
pub mod config;
pub mod error;

pub use config::{load_catalog, parse_catalog};
pub use error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    stories: Vec<StoryRecord>,
}

impl Catalog {
    pub fn new(stories: Vec<StoryRecord>) -> Result<Self, CatalogError> {
        if stories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(stories.len());
        for (index, story) in stories.iter().enumerate() {
            if story.id.as_str().trim().is_empty() {
                return Err(CatalogError::BlankId { index });
            }
            if !seen.insert(story.id.as_str()) {
                return Err(CatalogError::DuplicateStory(story.id.clone()));
            }
            if !story.has_language(Language::En) {
                return Err(CatalogError::MissingEnglish(story.id.clone()));
            }
        }

        Ok(Self { stories })
    }

    /// Stories configured for the page, lotus (EN + AR) then tara (EN).
    pub fn builtin() -> Self {
        Self {
            stories: builtin::builtin_stories(),
        }
    }

    pub fn list_stories(&self) -> &[StoryRecord] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Default selection: the first configured story.
    pub fn first(&self) -> &StoryRecord {
        &self.stories[0]
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.stories.iter().position(|story| story.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get_story(&self, id: &str) -> Result<&StoryRecord, CatalogError> {
        self.stories
            .iter()
            .find(|story| story.id.as_str() == id)
            .ok_or_else(|| CatalogError::NotFound(StoryId::new(id)))
    }

    pub fn languages_for(&self, id: &str) -> Result<LanguageSet, CatalogError> {
        self.get_story(id).map(StoryRecord::languages)
    }

    pub fn resource_for(&self, id: &str, language: Language) -> Result<&str, CatalogError> {
        let story = self.get_story(id)?;
        story
            .resource(language)
            .ok_or_else(|| CatalogError::Unavailable {
                story_id: story.id.clone(),
                language,
            })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

use thiserror::Error;

use crate::domain::{Language, StoryId};

/// Rejected selection transition. The controller state is untouched whenever
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown story '{0}'")]
    UnknownStory(StoryId),
    #[error("unsupported language code '{0}'")]
    UnsupportedLanguage(String),
    #[error("language '{language}' is not available for story '{story_id}'")]
    LanguageUnavailable {
        story_id: StoryId,
        language: Language,
    },
}

impl SelectionError {
    pub fn code(&self) -> &'static str {
        match self {
            SelectionError::UnknownStory(_) => "unknown_story",
            SelectionError::UnsupportedLanguage(_) => "unsupported_language",
            SelectionError::LanguageUnavailable { .. } => "language_unavailable",
        }
    }
}

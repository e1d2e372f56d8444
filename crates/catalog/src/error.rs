use std::path::PathBuf;

use shared::domain::{Language, StoryId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("story '{0}' not found in catalog")]
    NotFound(StoryId),
    #[error("story '{story_id}' has no '{language}' resource")]
    Unavailable {
        story_id: StoryId,
        language: Language,
    },
    #[error("catalog contains no stories")]
    Empty,
    #[error("story id at position {index} is blank")]
    BlankId { index: usize },
    #[error("story '{0}' is declared more than once")]
    DuplicateStory(StoryId),
    #[error("story '{0}' has no English resource")]
    MissingEnglish(StoryId),
    #[error("failed to read catalog file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

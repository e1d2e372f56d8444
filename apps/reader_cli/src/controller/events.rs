//! UI events and the token syntax used to replay them.

use reader_core::Section;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    CardClicked { story_id: String },
    CardKey { story_id: String, key: String },
    LanguageChip { section: Section, code: String },
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::CardClicked { .. } => "card_clicked",
            UiEvent::CardKey { .. } => "card_key",
            UiEvent::LanguageChip {
                section: Section::Hero,
                ..
            } => "hero_language",
            UiEvent::LanguageChip {
                section: Section::Reader,
                ..
            } => "reader_language",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventParseError {
    #[error("empty event token")]
    Empty,
    #[error("unknown event '{0}'; expected card:, key:, hero: or reader:")]
    UnknownKind(String),
    #[error("event '{0}' is missing an argument")]
    MissingArgument(String),
}

/// Parses `card:<id>`, `key:<id>:<key>`, `hero:<lang>` or `reader:<lang>`.
pub fn parse_event_token(token: &str) -> Result<UiEvent, EventParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(EventParseError::Empty);
    }

    let (kind, argument) = token.split_once(':').unwrap_or((token, ""));
    let missing = || EventParseError::MissingArgument(token.to_string());

    match kind {
        "card" if !argument.is_empty() => Ok(UiEvent::CardClicked {
            story_id: argument.to_string(),
        }),
        "key" => {
            let (story_id, key) = argument.rsplit_once(':').ok_or_else(missing)?;
            if story_id.is_empty() || key.is_empty() {
                return Err(missing());
            }
            Ok(UiEvent::CardKey {
                story_id: story_id.to_string(),
                key: key.to_string(),
            })
        }
        "hero" if !argument.is_empty() => Ok(UiEvent::LanguageChip {
            section: Section::Hero,
            code: argument.to_string(),
        }),
        "reader" if !argument.is_empty() => Ok(UiEvent::LanguageChip {
            section: Section::Reader,
            code: argument.to_string(),
        }),
        "card" | "hero" | "reader" => Err(missing()),
        other => Err(EventParseError::UnknownKind(other.to_string())),
    }
}

/// Story cards behave like buttons: Enter and Space activate them.
pub fn activates_card(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Space")
}

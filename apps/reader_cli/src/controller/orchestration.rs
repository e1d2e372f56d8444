//! Dispatch from UI events to controller transitions.

use reader_core::{SelectionController, ViewModel};
use shared::error::SelectionError;
use storage::PreferenceStore;

use super::events::{activates_card, UiEvent};

/// Applies `event` and returns the new view model. Rejected events leave the
/// selection untouched, return `None` and describe themselves in `status`.
pub fn dispatch_ui_event<S: PreferenceStore>(
    controller: &mut SelectionController<S>,
    event: UiEvent,
    status: &mut String,
) -> Option<ViewModel> {
    let event_name = event.name();

    let result = match event {
        UiEvent::CardClicked { story_id } => controller.select_story(&story_id),
        UiEvent::CardKey { story_id, key } => {
            if !activates_card(&key) {
                tracing::debug!(event = event_name, key = %key, "ignored card key");
                return None;
            }
            controller.select_story(&story_id)
        }
        UiEvent::LanguageChip { code, .. } => controller.select_language(&code),
    };

    match result {
        Ok(view) => {
            tracing::debug!(
                event = event_name,
                story_id = %view.story_id,
                language = %view.language,
                "applied ui event"
            );
            status.clear();
            Some(view)
        }
        Err(err) => {
            tracing::debug!(event = event_name, reason = err.code(), "rejected ui event");
            *status = rejection_status(&err);
            None
        }
    }
}

pub fn rejection_status(err: &SelectionError) -> String {
    match err {
        SelectionError::UnknownStory(story_id) => {
            format!("No story named '{story_id}'; keeping the current selection")
        }
        SelectionError::UnsupportedLanguage(code) => {
            format!("Language '{code}' is not supported; choose en or ar")
        }
        SelectionError::LanguageUnavailable { story_id, language } => format!(
            "{} is not available for '{story_id}'",
            language.display_name()
        ),
    }
}

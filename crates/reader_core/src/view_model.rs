//! Snapshot of everything the page displays for one selection.

use catalog::Catalog;
use serde::Serialize;
use shared::domain::{Language, StoryId, StoryRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub language: Language,
    pub active: bool,
    pub disabled: bool,
}

/// The EN/AR chip pair. The page shows one pair in the hero and one in the
/// reader; both are derived identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageToggleView {
    pub en: ChipView,
    pub ar: ChipView,
}

impl LanguageToggleView {
    fn for_story(story: &StoryRecord, current: Language) -> Self {
        let chip = |language: Language| ChipView {
            language,
            active: language == current,
            disabled: !story.has_language(language),
        };
        Self {
            en: chip(Language::En),
            ar: chip(Language::Ar),
        }
    }

    pub fn chip(&self, language: Language) -> &ChipView {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryCardView {
    pub id: StoryId,
    pub title: String,
    pub tag: String,
    pub description: String,
    pub pills: Vec<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub story_id: StoryId,
    pub language: Language,
    pub title: String,
    pub subtitle: String,
    /// Locator of the active document. Every link and the embedded viewer
    /// point here.
    pub resource: String,
    pub hero: LanguageToggleView,
    pub reader: LanguageToggleView,
    pub cards: Vec<StoryCardView>,
}

impl ViewModel {
    /// `language` must already be offered by `story`.
    pub(crate) fn build(catalog: &Catalog, story: &StoryRecord, language: Language) -> Self {
        let resource = story
            .resource(language)
            .or_else(|| story.resource(Language::En))
            .unwrap_or_default()
            .to_string();
        let toggle = LanguageToggleView::for_story(story, language);

        let cards = catalog
            .list_stories()
            .iter()
            .map(|record| StoryCardView {
                id: record.id.clone(),
                title: record.title.clone(),
                tag: record.tag.clone(),
                description: record.description.clone(),
                pills: record.pills.clone(),
                selected: record.id == story.id,
            })
            .collect();

        Self {
            story_id: story.id.clone(),
            language,
            title: story.title.clone(),
            subtitle: language.display_name().to_string(),
            resource,
            hero: toggle,
            reader: toggle,
            cards,
        }
    }

    pub fn active_card(&self) -> Option<&StoryCardView> {
        self.cards.iter().find(|card| card.selected)
    }

    pub fn is_language_disabled(&self, language: Language) -> bool {
        self.hero.chip(language).disabled
    }
}

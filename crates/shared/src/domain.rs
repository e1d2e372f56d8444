use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub String);

impl StoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display language of a document resource.
///
/// The set is closed: the page only ever offers an English and an Arabic
/// toggle, and English is the fallback every story must provide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "Arabic",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
            .ok_or_else(|| SelectionError::UnsupportedLanguage(s.trim().to_string()))
    }
}

/// Languages offered by one story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageSet {
    en: bool,
    ar: bool,
}

impl LanguageSet {
    pub fn insert(&mut self, language: Language) {
        match language {
            Language::En => self.en = true,
            Language::Ar => self.ar = true,
        }
    }

    pub fn contains(&self, language: Language) -> bool {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }

    pub fn len(&self) -> usize {
        usize::from(self.en) + usize::from(self.ar)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(move |language| self.contains(*language))
    }
}

impl FromIterator<Language> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
        let mut set = LanguageSet::default();
        for language in iter {
            set.insert(language);
        }
        set
    }
}

/// One selectable story and its per-language document locators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    pub id: StoryId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub pills: Vec<String>,
    pub resources: BTreeMap<Language, String>,
}

impl StoryRecord {
    pub fn languages(&self) -> LanguageSet {
        self.resources.keys().copied().collect()
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.resources.contains_key(&language)
    }

    pub fn resource(&self, language: Language) -> Option<&str> {
        self.resources.get(&language).map(String::as_str)
    }
}

//! Story list shipped with the page.

use std::collections::BTreeMap;

use shared::domain::{Language, StoryId, StoryRecord};

struct BuiltinStory {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    tag: &'static str,
    pills: &'static [&'static str],
    resources: &'static [(Language, &'static str)],
}

const BUILTIN_STORIES: &[BuiltinStory] = &[
    BuiltinStory {
        id: "lotus",
        title: "The Lotus Garden by the Nile",
        description: "A gentle story about growing in your own way, and how one brave flower can inspire everyone.",
        tag: "EN + AR",
        pills: &["Nature", "Self-belief", "Kindness"],
        resources: &[
            (Language::En, "./lotus_en.pdf"),
            (Language::Ar, "./lotus_ar.pdf"),
        ],
    },
    BuiltinStory {
        id: "tara",
        title: "Tara the Brave Turtle",
        description: "A kids-friendly story about courage, trying again, and showing up even when you're scared.",
        tag: "EN",
        pills: &["Courage", "Growth", "Kids"],
        resources: &[(Language::En, "./tara-the-brave-turtle.pdf")],
    },
];

pub(crate) fn builtin_stories() -> Vec<StoryRecord> {
    BUILTIN_STORIES
        .iter()
        .map(|story| StoryRecord {
            id: StoryId::new(story.id),
            title: story.title.to_string(),
            description: story.description.to_string(),
            tag: story.tag.to_string(),
            pills: story.pills.iter().map(|pill| pill.to_string()).collect(),
            resources: story
                .resources
                .iter()
                .map(|(language, path)| (*language, path.to_string()))
                .collect::<BTreeMap<_, _>>(),
        })
        .collect()
}

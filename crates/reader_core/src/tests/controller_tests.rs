use std::collections::BTreeMap;

use storage::MemoryPreferenceStore;

use super::*;

fn story(id: &str, resources: &[(Language, &str)]) -> StoryRecord {
    StoryRecord {
        id: StoryId::new(id),
        title: format!("{id} title"),
        description: String::new(),
        tag: String::new(),
        pills: Vec::new(),
        resources: resources
            .iter()
            .map(|(language, path)| (*language, path.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn lotus_and_tara() -> Catalog {
    Catalog::new(vec![
        story(
            "lotus",
            &[(Language::En, "lotus_en.pdf"), (Language::Ar, "lotus_ar.pdf")],
        ),
        story("tara", &[(Language::En, "tara.pdf")]),
    ])
    .expect("catalog")
}

fn controller() -> SelectionController<MemoryPreferenceStore> {
    SelectionController::new(lotus_and_tara(), MemoryPreferenceStore::new())
}

fn assert_language_is_available(controller: &SelectionController<MemoryPreferenceStore>) {
    let state = controller.state();
    let languages = controller
        .catalog()
        .languages_for(state.story_id.as_str())
        .expect("selected story exists");
    assert!(
        languages.contains(state.language),
        "{} is not offered by {}",
        state.language,
        state.story_id
    );
}

#[test]
fn starts_on_first_story_in_english() {
    let controller = controller();
    let view = controller.current_view_model();

    assert_eq!(
        controller.state(),
        SelectionState {
            story_id: StoryId::new("lotus"),
            language: Language::En,
        }
    );
    assert_eq!(view.resource, "lotus_en.pdf");
    assert_eq!(view.subtitle, "English");
    assert_eq!(controller.store().writes(), 0);
}

#[test]
fn arabic_then_english_only_story_forces_english() {
    let mut controller = controller();

    let view = controller.select_language("ar").expect("lotus offers arabic");
    assert_eq!(view.language, Language::Ar);
    assert_eq!(view.resource, "lotus_ar.pdf");
    assert_eq!(view.subtitle, "Arabic");

    let view = controller.select_story("tara").expect("tara exists");
    assert_eq!(view.story_id.as_str(), "tara");
    assert_eq!(view.language, Language::En);
    assert_eq!(view.resource, "tara.pdf");
    assert!(view.hero.ar.disabled);
    assert!(view.reader.ar.disabled);
    assert!(view.is_language_disabled(Language::Ar));
    assert_eq!(
        view.active_card().map(|card| card.id.as_str()),
        Some("tara")
    );
    assert!(!controller.is_language_available(Language::Ar));
    assert_language_is_available(&controller);
}

#[test]
fn returning_to_bilingual_story_keeps_english_after_repair() {
    let mut controller = controller();
    controller.select_language("ar").expect("arabic");
    controller.select_story("tara").expect("tara");

    let view = controller.select_story("lotus").expect("lotus");
    assert_eq!(view.language, Language::En);
    assert!(!view.hero.ar.disabled);
}

#[test]
fn unavailable_language_is_a_no_op() {
    let mut controller = controller();
    controller.select_story("tara").expect("tara");
    let before = controller.current_view_model();
    let writes = controller.store().writes();

    let err = controller.select_language("ar").expect_err("tara has no arabic");
    assert_eq!(
        err,
        SelectionError::LanguageUnavailable {
            story_id: StoryId::new("tara"),
            language: Language::Ar,
        }
    );
    assert_eq!(controller.current_view_model(), before);
    assert_eq!(controller.store().writes(), writes);
}

#[test]
fn unsupported_language_is_a_no_op() {
    let mut controller = controller();
    let before = controller.state();

    let err = controller.select_language("fr").expect_err("fr unsupported");
    assert_eq!(err, SelectionError::UnsupportedLanguage("fr".to_string()));
    assert_eq!(err.code(), "unsupported_language");
    assert_eq!(controller.state(), before);
}

#[test]
fn unknown_story_is_a_no_op() {
    let mut controller = controller();
    controller.select_language("ar").expect("arabic");
    let before = controller.state();

    let err = controller
        .select_story("does-not-exist")
        .expect_err("unknown story");
    assert_eq!(err, SelectionError::UnknownStory(StoryId::new("does-not-exist")));
    assert_eq!(controller.state(), before);
}

#[test]
fn repeated_transitions_are_idempotent() {
    let mut controller = controller();

    let once = controller.select_story("tara").expect("tara");
    let twice = controller.select_story("tara").expect("tara again");
    assert_eq!(once, twice);

    controller.select_story("lotus").expect("lotus");
    let once = controller.select_language("ar").expect("ar");
    let twice = controller.select_language("ar").expect("ar again");
    assert_eq!(once, twice);
}

#[test]
fn transitions_persist_story_and_language() {
    let mut controller = controller();
    controller.select_language("ar").expect("arabic");

    let store = controller.store();
    assert_eq!(store.peek(DEFAULT_STORY_KEY), Some("lotus"));
    assert_eq!(store.peek(DEFAULT_LANGUAGE_KEY), Some("ar"));

    controller.select_story("tara").expect("tara");
    let store = controller.store();
    assert_eq!(store.peek(DEFAULT_STORY_KEY), Some("tara"));
    assert_eq!(store.peek(DEFAULT_LANGUAGE_KEY), Some("en"));
}

#[test]
fn persistence_failure_does_not_fail_transitions() {
    let mut controller =
        SelectionController::new(lotus_and_tara(), MemoryPreferenceStore::unavailable());

    let view = controller.select_language("ar").expect("transition succeeds");
    assert_eq!(view.resource, "lotus_ar.pdf");

    let view = controller.select_story("tara").expect("transition succeeds");
    assert_eq!(view.language, Language::En);
    assert_eq!(controller.store().writes(), 0);
}

#[test]
fn restores_valid_saved_selection() {
    let store = MemoryPreferenceStore::with_entries([
        (DEFAULT_STORY_KEY, "lotus"),
        (DEFAULT_LANGUAGE_KEY, "ar"),
    ]);
    let controller = SelectionController::new(lotus_and_tara(), store);

    assert_eq!(controller.current_view_model().resource, "lotus_ar.pdf");
}

#[test]
fn saved_language_is_repaired_against_saved_story() {
    let store = MemoryPreferenceStore::with_entries([
        (DEFAULT_STORY_KEY, "tara"),
        (DEFAULT_LANGUAGE_KEY, "ar"),
    ]);
    let controller = SelectionController::new(lotus_and_tara(), store);

    assert_eq!(
        controller.state(),
        SelectionState {
            story_id: StoryId::new("tara"),
            language: Language::En,
        }
    );
}

#[test]
fn stale_or_garbled_preferences_fall_back_to_defaults() {
    let store = MemoryPreferenceStore::with_entries([
        (DEFAULT_STORY_KEY, "retired-story"),
        (DEFAULT_LANGUAGE_KEY, "klingon"),
    ]);
    let controller = SelectionController::new(lotus_and_tara(), store);
    assert_eq!(controller.state().story_id.as_str(), "lotus");
    assert_eq!(controller.state().language, Language::En);

    let controller =
        SelectionController::new(lotus_and_tara(), MemoryPreferenceStore::unavailable());
    assert_eq!(controller.state().story_id.as_str(), "lotus");
}

#[test]
fn saved_language_applies_to_default_story_when_saved_story_is_gone() {
    let store = MemoryPreferenceStore::with_entries([
        (DEFAULT_STORY_KEY, "retired-story"),
        (DEFAULT_LANGUAGE_KEY, "ar"),
    ]);
    let controller = SelectionController::new(lotus_and_tara(), store);

    assert_eq!(controller.state().story_id.as_str(), "lotus");
    assert_eq!(controller.state().language, Language::Ar);
}

#[test]
fn custom_preference_keys_are_honoured() {
    let config = ControllerConfig {
        story_key: "story".to_string(),
        language_key: "lang".to_string(),
    };
    let store = MemoryPreferenceStore::with_entries([("story", "tara")]);
    let mut controller = SelectionController::with_config(lotus_and_tara(), store, config);
    assert_eq!(controller.state().story_id.as_str(), "tara");

    controller.select_story("lotus").expect("lotus");
    let store = controller.into_store();
    assert_eq!(store.peek("story"), Some("lotus"));
    assert_eq!(store.peek("lang"), Some("en"));
    assert_eq!(store.peek(DEFAULT_STORY_KEY), None);
}

#[test]
fn invariant_holds_across_every_transition_sequence() {
    let stories = ["lotus", "tara", "missing"];
    let languages = ["en", "ar", "fr"];
    let mut controller = controller();

    for first in stories {
        for code in languages {
            for second in stories {
                let _ = controller.select_story(first);
                assert_language_is_available(&controller);
                let _ = controller.select_language(code);
                assert_language_is_available(&controller);
                let _ = controller.select_story(second);
                assert_language_is_available(&controller);
            }
        }
    }
}

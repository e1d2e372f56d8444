//! Selection-and-synchronization core of the story reader page.
//!
//! [`SelectionController`] owns the selected story and language, repairs the
//! language whenever a transition would leave it unavailable, and hands back
//! a fresh [`ViewModel`] after every change. [`render::apply_view_model`]
//! writes that snapshot into any [`render::PageSurface`].

pub mod controller;
pub mod render;
mod serialized;
pub mod view_model;

pub use controller::{
    ControllerConfig, SelectionController, SelectionState, DEFAULT_LANGUAGE_KEY,
    DEFAULT_STORY_KEY,
};
pub use render::{apply_view_model, PageElement, PageSurface, Section};
pub use serialized::SharedController;
pub use view_model::{ChipView, LanguageToggleView, StoryCardView, ViewModel};

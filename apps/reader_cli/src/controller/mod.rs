//! Controller layer: UI events mapped onto selection transitions.

pub mod events;
pub mod orchestration;

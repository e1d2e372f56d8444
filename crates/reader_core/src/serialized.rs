use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shared::{domain::Language, error::SelectionError};
use storage::PreferenceStore;

use crate::{
    controller::{SelectionController, SelectionState},
    view_model::ViewModel,
};

/// Cloneable handle that serializes transitions from several callers.
///
/// Each operation holds the lock for the whole transition, so no caller can
/// observe a story paired with a language it does not offer.
pub struct SharedController<S> {
    inner: Arc<Mutex<SelectionController<S>>>,
}

impl<S> Clone for SharedController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: PreferenceStore> SharedController<S> {
    pub fn new(controller: SelectionController<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    // The state is valid between transitions, so a poisoned lock is still safe
    // to reuse.
    fn lock(&self) -> MutexGuard<'_, SelectionController<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn select_story(&self, id: &str) -> Result<ViewModel, SelectionError> {
        self.lock().select_story(id)
    }

    pub fn select_language(&self, code: &str) -> Result<ViewModel, SelectionError> {
        self.lock().select_language(code)
    }

    pub fn current_view_model(&self) -> ViewModel {
        self.lock().current_view_model()
    }

    pub fn is_language_available(&self, language: Language) -> bool {
        self.lock().is_language_available(language)
    }

    pub fn state(&self) -> SelectionState {
        self.lock().state()
    }

    /// Runs `f` with exclusive access, e.g. to apply the current view model
    /// to a surface without another transition interleaving.
    pub fn with_controller<R>(&self, f: impl FnOnce(&mut SelectionController<S>) -> R) -> R {
        f(&mut self.lock())
    }
}

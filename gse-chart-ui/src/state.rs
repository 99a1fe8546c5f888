//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the page-wide signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Hover state is not in here: every chart owns its own.

use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;
use gse_data::Dataset;
use gse_viz::NarrativeController;

/// Number of chapters in the story panel.
pub const CHAPTER_COUNT: usize = 6;

/// Shared application state for the report page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parsed dataset (None until loaded)
    pub dataset: Signal<Option<Rc<Dataset>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Active story chapter
    pub narrative: Signal<NarrativeController>,
    /// Fraction of the page scrolled, 0 to 1
    pub page_progress: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            narrative: Signal::new(NarrativeController::new(CHAPTER_COUNT)),
            page_progress: Signal::new(0.0),
        }
    }
}

/// Read-only value handed down as a prop.
///
/// Compares by pointer, so a parent re-render never walks the value to
/// decide whether children need to re-render.
#[derive(Debug)]
pub struct Shared<T>(Rc<T>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Shared(Rc::new(value))
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

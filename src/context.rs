//! Application Context
//!
//! UI-only signals provided via Leptos Context API.

use ingredient_ledger::ImageUpload;
use leptos::prelude::*;

use crate::models::SearchMode;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Image or text search - read
    pub search_mode: ReadSignal<SearchMode>,
    /// Image or text search - write
    set_search_mode: WriteSignal<SearchMode>,
    /// Picked image, already read as a data URL - read
    pub selected_image: ReadSignal<Option<ImageUpload>>,
    /// Picked image - write
    set_selected_image: WriteSignal<Option<ImageUpload>>,
}

impl AppContext {
    pub fn new(
        search_mode: (ReadSignal<SearchMode>, WriteSignal<SearchMode>),
        selected_image: (ReadSignal<Option<ImageUpload>>, WriteSignal<Option<ImageUpload>>),
    ) -> Self {
        Self {
            search_mode: search_mode.0,
            set_search_mode: search_mode.1,
            selected_image: selected_image.0,
            set_selected_image: selected_image.1,
        }
    }

    pub fn set_search_mode(&self, mode: SearchMode) {
        self.set_search_mode.set(mode);
    }

    /// Replace the picked image (None clears the preview)
    pub fn select_image(&self, image: Option<ImageUpload>) {
        self.set_selected_image.set(image);
    }
}

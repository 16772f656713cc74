//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The ledger in here is the single source of truth for the table.

use ingredient_ledger::{ExtractionResponse, Ledger, LedgerAction, RecipeResponse};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::RequestStatus;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ingredient rows of the last extraction
    pub ledger: Ledger,
    /// Last extraction request
    pub extraction: RequestStatus<()>,
    /// Whether the three recipe version buttons are shown
    pub recipe_options_open: bool,
    /// Last recipe request
    pub recipe: RequestStatus<RecipeResponse>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show the "in progress" placeholder for an extraction
pub fn store_begin_extraction(store: &AppStore) {
    store.extraction().set(RequestStatus::Pending);
}

/// Replace the table wholesale; the recipe panel starts over
pub fn store_load_extraction(store: &AppStore, response: ExtractionResponse) {
    store.ledger().write().load(&response);
    store.recipe_options_open().set(false);
    store.recipe().set(RequestStatus::Idle);
    store.extraction().set(RequestStatus::Ready(()));
}

pub fn store_fail_extraction(store: &AppStore, message: String) {
    store.extraction().set(RequestStatus::Failed(message));
}

/// Route a row action to the ledger
pub fn store_dispatch(store: &AppStore, action: LedgerAction) {
    store.ledger().write().dispatch(action);
}

pub fn store_show_recipe_options(store: &AppStore) {
    store.recipe_options_open().set(true);
}

pub fn store_begin_recipe(store: &AppStore) {
    store.recipe().set(RequestStatus::Pending);
}

pub fn store_finish_recipe(store: &AppStore, recipe: RecipeResponse) {
    store.recipe().set(RequestStatus::Ready(recipe));
}

pub fn store_fail_recipe(store: &AppStore, message: String) {
    store.recipe().set(RequestStatus::Failed(message));
}

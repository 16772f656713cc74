//! Recipe Ledger Frontend App
//!
//! Upload form on top, ingredient ledger and recipe panel below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{IngredientTable, RecipePanel, SearchModeTabs, UploadForm};
use crate::context::AppContext;
use crate::models::{RequestStatus, SearchMode};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let search_mode = signal(SearchMode::default());
    let selected_image = signal(None);
    provide_context(AppContext::new(search_mode, selected_image));

    // Where requests go, shown in the footer
    let (endpoint, set_endpoint) = signal(String::new());
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::service_endpoint().await {
                Ok(url) => set_endpoint.set(url),
                Err(e) => web_sys::console::error_1(&format!("[APP] No service endpoint: {}", e).into()),
            }
        });
    });

    view! {
        <div class="container">
            <h1>"Recipe Ledger"</h1>
            <SearchModeTabs />
            <UploadForm />

            <div id="result">
                {move || match store.extraction().get() {
                    RequestStatus::Idle => ().into_any(),
                    RequestStatus::Pending => view! { <p>"Preparing recipe items..."</p> }.into_any(),
                    RequestStatus::Failed(_) => view! { <p>"Error fetching data"</p> }.into_any(),
                    RequestStatus::Ready(()) => view! {
                        <IngredientTable />
                        <RecipePanel />
                    }.into_any(),
                }}
            </div>

            <footer class="service-footer">
                <Show when=move || !endpoint.get().is_empty()>
                    <span>"Service: " {move || endpoint.get()}</span>
                </Show>
            </footer>
        </div>
    }
}

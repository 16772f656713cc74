//! Search Mode Tabs
//!
//! Switches the upload form between image and text search.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::SearchMode;

#[component]
pub fn SearchModeTabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="search-options">
            {SearchMode::ALL.iter().map(|mode| {
                let mode = *mode;
                let tab_class = move || {
                    if ctx.search_mode.get() == mode { "option-btn active" } else { "option-btn" }
                };
                view! {
                    <button
                        type="button"
                        class=tab_class
                        on:click=move |_| ctx.set_search_mode(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

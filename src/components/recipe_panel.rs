//! Recipe Panel Component
//!
//! Offers recipe generation for the loaded dish and shows the steps.

use ingredient_ledger::RecipeVersion;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::markdown;
use crate::models::RequestStatus;
use crate::store::{
    store_begin_recipe, store_fail_recipe, store_finish_recipe, store_show_recipe_options,
    use_app_store, AppStateStoreFields,
};

#[component]
pub fn RecipePanel() -> impl IntoView {
    let store = use_app_store();

    let food_name = move || {
        store.ledger().read().dish().map(|dish| dish.food_name.clone()).unwrap_or_default()
    };

    let request_recipe = move |version: RecipeVersion| {
        let name = food_name();
        store_begin_recipe(&store);
        spawn_local(async move {
            match commands::generate_recipe(&name, version).await {
                Ok(recipe) => store_finish_recipe(&store, recipe),
                Err(e) => {
                    web_sys::console::error_1(&format!("Recipe generation failed: {}", e).into());
                    store_fail_recipe(&store, e);
                }
            }
        });
    };

    view! {
        <div class="recipe-section">
            <h3>"Would you like to see the recipe for this?"</h3>
            <button type="button" on:click=move |_| store_show_recipe_options(&store)>
                "Yes, Show Recipes"
            </button>

            <Show when=move || store.recipe_options_open().get()>
                <div class="recipe-options">
                    {RecipeVersion::ALL.iter().map(|version| {
                        let version = *version;
                        view! {
                            <button type="button" on:click=move |_| request_recipe(version)>
                                {version.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>

            <div id="recipe-output">
                {move || match store.recipe().get() {
                    RequestStatus::Idle => ().into_any(),
                    RequestStatus::Pending => view! { <p>"Preparing recipe..."</p> }.into_any(),
                    RequestStatus::Failed(_) => view! { <p>"Error generating recipe."</p> }.into_any(),
                    RequestStatus::Ready(recipe) => view! {
                        <h3>{format!("{} - {}", recipe.food_name, recipe.version)}</h3>
                        <ol>
                            {recipe.steps.iter().map(|step| view! {
                                <li inner_html=markdown::render_step(step)></li>
                            }).collect_view()}
                        </ol>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

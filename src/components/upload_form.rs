//! Upload Form Component
//!
//! Dish name or image plus a person count. Submitting replaces the table.

use ingredient_ledger::ExtractionQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ImagePreview;
use crate::context::AppContext;
use crate::models::SearchMode;
use crate::store::{store_begin_extraction, store_fail_extraction, store_load_extraction, use_app_store};

/// Person count as typed; blank or non-numeric means "not given"
fn parse_persons(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (dish_name, set_dish_name) = signal(String::new());
    let (persons, set_persons) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = match ctx.search_mode.get() {
            SearchMode::Image => ExtractionQuery {
                dish_name: String::new(),
                persons: parse_persons(&persons.get()),
                image: ctx.selected_image.get(),
            },
            SearchMode::Text => ExtractionQuery {
                dish_name: dish_name.get(),
                persons: parse_persons(&persons.get()),
                image: None,
            },
        };

        store_begin_extraction(&store);
        spawn_local(async move {
            match commands::extract_ingredients(&query).await {
                Ok(response) => {
                    web_sys::console::log_1(
                        &format!("Loaded {} ingredients", response.ingredients.len()).into(),
                    );
                    store_load_extraction(&store, response);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Extraction failed: {}", e).into());
                    store_fail_extraction(&store, e);
                }
            }
        });
    };

    view! {
        <form id="upload-form" on:submit=submit>
            <Show when=move || ctx.search_mode.get() == SearchMode::Image>
                <ImagePreview />
            </Show>
            <Show when=move || ctx.search_mode.get() == SearchMode::Text>
                <input
                    type="text"
                    name="dishName"
                    placeholder="Enter dish name"
                    prop:value=move || dish_name.get()
                    on:input=move |ev| set_dish_name.set(event_target_value(&ev))
                />
            </Show>
            <input
                type="number"
                name="persons"
                min="1"
                placeholder="Number of persons"
                prop:value=move || persons.get()
                on:input=move |ev| set_persons.set(event_target_value(&ev))
            />
            <button type="submit">"Get Ingredients"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_persons() {
        assert_eq!(parse_persons("4"), Some(4));
        assert_eq!(parse_persons(" 2 "), Some(2));
        assert_eq!(parse_persons(""), None);
        assert_eq!(parse_persons("0"), None);
        assert_eq!(parse_persons("two"), None);
    }
}

//! Quantity Stepper Component
//!
//! `-` / typed value / `+` for one ledger row.
//! Buttons clamp at the minimum; typed values are taken as entered.

use ingredient_ledger::{ItemId, LedgerAction, Step, MIN_QUANTITY};
use leptos::prelude::*;

use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn QuantityStepper(
    id: ItemId,
    #[prop(into)] quantity: Signal<String>,
    #[prop(into)] unit: Signal<String>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="qty-wrapper">
            <button
                type="button"
                class="qty-btn"
                on:click=move |_| store_dispatch(&store, LedgerAction::Adjust(id, Step::Decrement))
            >
                "-"
            </button>
            <input
                type="number"
                class="qty-input"
                min=MIN_QUANTITY.to_string()
                step="0.1"
                prop:value=move || quantity.get()
                on:change=move |ev| {
                    store_dispatch(&store, LedgerAction::SetQuantity(id, event_target_value(&ev)))
                }
            />
            <button
                type="button"
                class="qty-btn"
                on:click=move |_| store_dispatch(&store, LedgerAction::Adjust(id, Step::Increment))
            >
                "+"
            </button>
            <span class="qty-unit">{move || unit.get()}</span>
        </div>
    }
}

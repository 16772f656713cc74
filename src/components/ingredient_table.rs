//! Ingredient Table Component
//!
//! Renders the ledger projection: one row per item plus the total.
//! Every cell reads from the store; nothing is parsed back from the DOM.

use ingredient_ledger::{ItemId, LedgerAction};
use leptos::prelude::*;

use crate::components::QuantityStepper;
use crate::store::{store_dispatch, use_app_store, AppStateStoreFields};

/// One ledger row, looked up by id on every change
#[component]
fn IngredientRow(id: ItemId) -> impl IntoView {
    let store = use_app_store();
    let row = Memo::new(move |_| store.ledger().read().row(id));

    let quantity = Signal::derive(move || row.get().map(|r| r.quantity).unwrap_or_default());
    let unit = Signal::derive(move || row.get().map(|r| r.unit).unwrap_or_default());

    view! {
        <Show when=move || row.get().is_some()>
            <tr>
                <td>{move || row.get().map(|r| r.name).unwrap_or_default()}</td>
                <td>
                    <QuantityStepper id=id quantity=quantity unit=unit />
                </td>
                <td>{move || row.get().map(|r| r.allergen).unwrap_or_default()}</td>
                <td class="price">{move || row.get().map(|r| r.price).unwrap_or_default()}</td>
                <td>
                    <button
                        type="button"
                        class="remove-btn"
                        on:click=move |_| store_dispatch(&store, LedgerAction::Remove(id))
                    >
                        "Remove"
                    </button>
                </td>
            </tr>
        </Show>
    }
}

#[component]
pub fn IngredientTable() -> impl IntoView {
    let store = use_app_store();

    let headline = move || {
        store.ledger().read().dish().map(|dish| dish.headline()).unwrap_or_default()
    };
    let ids = move || store.ledger().read().items().iter().map(|item| item.id()).collect::<Vec<_>>();
    let total = move || store.ledger().read().formatted_total();

    view! {
        <div class="ingredient-ledger">
            <h2>{headline}</h2>
            <table>
                <thead>
                    <tr>
                        <th>"Item"</th>
                        <th>"Quantity"</th>
                        <th>"Allergen"</th>
                        <th>"Price"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=ids
                        key=|id| *id
                        children=move |id| view! { <IngredientRow id=id /> }
                    />
                    <tr class="total-row">
                        <td colspan="3">"Total"</td>
                        <td class="price" id="total-price">{total}</td>
                        <td></td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

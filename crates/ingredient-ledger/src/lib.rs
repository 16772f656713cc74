//! Ingredient Ledger
//!
//! Editable ingredient price table shared by the frontend and the Tauri backend.
//! - ledger: line items, quantity edits, derived prices and totals
//! - wire: payloads exchanged with the extraction and recipe services
//! - coerce: lenient number handling for generated service output

mod coerce;
mod ledger;
mod wire;

pub use coerce::{number_or, parse_typed_number, to_number};
pub use ledger::{
    format_price, Allergen, DishSummary, ItemId, Ledger, LedgerAction, LedgerRow, LineItem, Step,
    DEFAULT_QUANTITY, DEFAULT_UNIT_PRICE, MIN_QUANTITY, STEP,
};
pub use wire::{
    ExtractionQuery, ExtractionResponse, ImageUpload, RawIngredient, RecipeRequest,
    RecipeResponse, RecipeVersion,
};

//! UI Components
//!
//! Reusable Leptos components.

mod search_mode_tabs;
mod upload_form;
mod image_preview;
mod ingredient_table;
mod quantity_stepper;
mod recipe_panel;

pub use search_mode_tabs::SearchModeTabs;
pub use upload_form::UploadForm;
pub use image_preview::ImagePreview;
pub use ingredient_table::IngredientTable;
pub use quantity_stepper::QuantityStepper;
pub use recipe_panel::RecipePanel;

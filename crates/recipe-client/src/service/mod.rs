//! Service Layer
//!
//! `RecipeService` abstracts the two remote calls; `HttpRecipeService` is
//! the reqwest implementation used by the app.

mod http;
mod traits;

pub use http::{HttpRecipeService, EXTRACT_PATH, RECIPE_PATH};
pub use traits::RecipeService;

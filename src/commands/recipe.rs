//! Recipe Commands
//!
//! Frontend bindings for recipe generation.

use ingredient_ledger::{RecipeResponse, RecipeVersion};
use serde::Serialize;

use super::{invoke, js_error};

#[derive(Serialize)]
struct GenerateRecipeArgs<'a> {
    #[serde(rename = "foodName")]
    food_name: &'a str,
    version: RecipeVersion,
}

pub async fn generate_recipe(food_name: &str, version: RecipeVersion) -> Result<RecipeResponse, String> {
    let js_args = serde_wasm_bindgen::to_value(&GenerateRecipeArgs { food_name, version })
        .map_err(|e| e.to_string())?;
    let result = invoke("generate_recipe", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

//! Recipe Commands

use ingredient_ledger::{RecipeResponse, RecipeVersion};
use tauri::State;

use crate::AppState;

/// Ask `/generate/recipe` for steps in the chosen style
#[tauri::command]
pub async fn generate_recipe(
    state: State<'_, AppState>,
    food_name: String,
    version: RecipeVersion,
) -> Result<RecipeResponse, String> {
    recipe_client::generate_recipe(state.service.as_ref(), &food_name, version)
        .await
        .map_err(|e| e.to_string())
}

//! Extraction Commands

use ingredient_ledger::{ExtractionQuery, ExtractionResponse};
use tauri::State;

use crate::AppState;

/// Send the upload form to `/extract/ingredients`
#[tauri::command]
pub async fn extract_ingredients(
    state: State<'_, AppState>,
    query: ExtractionQuery,
) -> Result<ExtractionResponse, String> {
    recipe_client::extract_ingredients(state.service.as_ref(), &query)
        .await
        .map_err(|e| e.to_string())
}

/// Base URL requests actually go to, shown in the footer
#[tauri::command]
pub fn service_endpoint(state: State<'_, AppState>) -> String {
    state.service.endpoint()
}

//! Extraction Commands
//!
//! Frontend bindings for the ingredient extraction command.

use ingredient_ledger::{ExtractionQuery, ExtractionResponse};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke, js_error};

#[derive(Serialize)]
struct ExtractArgs<'a> {
    query: &'a ExtractionQuery,
}

pub async fn extract_ingredients(query: &ExtractionQuery) -> Result<ExtractionResponse, String> {
    let js_args = serde_wasm_bindgen::to_value(&ExtractArgs { query }).map_err(|e| e.to_string())?;
    let result = invoke("extract_ingredients", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn service_endpoint() -> Result<String, String> {
    let result = invoke("service_endpoint", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

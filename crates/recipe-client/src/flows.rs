//! User Actions
//!
//! The two requests a user can trigger. Each is validated, sent once and
//! logged; there is no sequencing between concurrent calls, so the caller
//! simply shows whichever result arrives last.

use ingredient_ledger::{
    ExtractionQuery, ExtractionResponse, ImageUpload, RecipeRequest, RecipeResponse, RecipeVersion,
};
use log::{info, warn};

use crate::domain::{ServiceError, ServiceResult};
use crate::service::RecipeService;

/// Identify the dish and price its ingredients.
///
/// Needs a dish name, an image, or both.
pub async fn extract_ingredients(
    service: &dyn RecipeService,
    query: &ExtractionQuery,
) -> ServiceResult<ExtractionResponse> {
    if query.dish_name.trim().is_empty() && query.image.is_none() {
        return Err(ServiceError::InvalidInput(
            "Enter a dish name or pick an image".to_string(),
        ));
    }
    if let Some(image) = &query.image {
        if !ImageUpload::is_image_type(&image.mime_type) {
            return Err(ServiceError::InvalidInput(format!(
                "{} is not an image",
                image.file_name
            )));
        }
    }

    info!(
        "Extracting ingredients: dish={:?} persons={:?} image={}",
        query.dish_name.trim(),
        query.persons,
        query.image.as_ref().map(|i| i.file_name.as_str()).unwrap_or("-")
    );
    match service.extract_ingredients(query).await {
        Ok(response) => {
            info!(
                "Extraction returned {:?} with {} ingredients",
                response.food_name,
                response.ingredients.len()
            );
            Ok(response)
        }
        Err(e) => {
            warn!("Extraction failed via {}: {}", service.endpoint(), e);
            Err(e)
        }
    }
}

/// Generate recipe steps for the dish on screen.
pub async fn generate_recipe(
    service: &dyn RecipeService,
    food_name: &str,
    version: RecipeVersion,
) -> ServiceResult<RecipeResponse> {
    let food_name = food_name.trim();
    if food_name.is_empty() {
        return Err(ServiceError::InvalidInput("No dish to generate a recipe for".to_string()));
    }

    let request = RecipeRequest {
        food_name: food_name.to_string(),
        version,
    };
    info!("Generating {} recipe for {:?}", version, food_name);
    match service.generate_recipe(&request).await {
        Ok(recipe) => {
            info!("Recipe for {:?} has {} steps", recipe.food_name, recipe.steps.len());
            Ok(recipe)
        }
        Err(e) => {
            warn!("Recipe generation failed via {}: {}", service.endpoint(), e);
            Err(e)
        }
    }
}

//! Recipe Service Client
//!
//! Bridge from the desktop app to the remote ingredient extraction and
//! recipe generation services.
//!
//! Layered architecture:
//! - domain: errors and decoded image uploads
//! - service: the `RecipeService` abstraction and its HTTP implementation
//! - flows: the two user actions, validated and logged
//! - config: service endpoint settings

mod config;
mod domain;
mod flows;
mod service;

pub use config::ServiceConfig;
pub use domain::{decode_image, DecodedImage, ServiceError, ServiceResult};
pub use flows::{extract_ingredients, generate_recipe};
pub use service::{HttpRecipeService, RecipeService, EXTRACT_PATH, RECIPE_PATH};

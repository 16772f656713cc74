//! Service Layer - Core Trait
//!
//! Implementations can talk HTTP, or return canned data in tests.

use async_trait::async_trait;
use ingredient_ledger::{ExtractionQuery, ExtractionResponse, RecipeRequest, RecipeResponse};

use crate::domain::ServiceResult;

/// The remote extraction and recipe generation API
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// Identify a dish and its priced ingredients from an image and/or a dish name
    async fn extract_ingredients(&self, query: &ExtractionQuery) -> ServiceResult<ExtractionResponse>;

    /// Generate cooking steps for a dish in one of the fixed styles
    async fn generate_recipe(&self, request: &RecipeRequest) -> ServiceResult<RecipeResponse>;

    /// Base address, for diagnostics
    fn endpoint(&self) -> String;
}

//! Service Payloads
//!
//! Shapes exchanged with the ingredient extraction and recipe generation
//! services, plus the query the frontend hands to the backend.
//! Field names are camelCase on the wire.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coerce::to_number;

/// One ingredient as returned by the extraction service.
///
/// `qty`, `unit_price` and `allergen` stay raw so a single malformed field
/// never rejects the whole response; the ledger coerces them on load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIngredient {
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_name: String,
    #[serde(default)]
    pub qty: Value,
    #[serde(default)]
    pub unit_price: Value,
    #[serde(default, deserialize_with = "lenient_string")]
    pub unit: String,
    #[serde(default)]
    pub allergen: Value,
}

/// Extraction service response: `{ foodName, noOfPersons, ingredients }`.
///
/// `ingredients` is required; a response without it is malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub food_name: String,
    #[serde(default)]
    pub no_of_persons: Value,
    pub ingredients: Vec<RawIngredient>,
}

impl ExtractionResponse {
    /// Person count, if the service sent anything numeric.
    pub fn persons(&self) -> Option<f64> {
        if self.no_of_persons.is_null() {
            return None;
        }
        Some(to_number(&self.no_of_persons)).filter(|n| n.is_finite())
    }
}

/// The three fixed recipe styles the generator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipeVersion {
    #[serde(rename = "Home Style")]
    HomeStyle,
    #[serde(rename = "Restaurant Style")]
    RestaurantStyle,
    #[serde(rename = "Healthy Version")]
    HealthyVersion,
}

impl RecipeVersion {
    /// All versions in display order
    pub const ALL: [RecipeVersion; 3] = [
        RecipeVersion::HomeStyle,
        RecipeVersion::RestaurantStyle,
        RecipeVersion::HealthyVersion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecipeVersion::HomeStyle => "Home Style",
            RecipeVersion::RestaurantStyle => "Restaurant Style",
            RecipeVersion::HealthyVersion => "Healthy Version",
        }
    }
}

impl fmt::Display for RecipeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of `POST /generate/recipe`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    pub food_name: String,
    pub version: RecipeVersion,
}

/// Recipe service response. `steps` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub food_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
    #[serde(deserialize_with = "lenient_strings")]
    pub steps: Vec<String>,
}

/// Image picked in the upload form, read locally as a data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
}

impl ImageUpload {
    /// Only declared image types are accepted for preview and upload.
    pub fn is_image_type(mime_type: &str) -> bool {
        mime_type.starts_with("image/")
    }
}

/// What the user submitted: a dish name and/or an image, plus a person count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionQuery {
    pub dish_name: String,
    pub persons: Option<u32>,
    pub image: Option<ImageUpload>,
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_string)
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.into_iter().map(value_to_string).collect())
}

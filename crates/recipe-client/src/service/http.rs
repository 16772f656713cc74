//! HTTP Recipe Service
//!
//! `POST /extract/ingredients` (multipart) and `POST /generate/recipe` (JSON).
//! One attempt per call: no retries.

use async_trait::async_trait;
use ingredient_ledger::{ExtractionQuery, ExtractionResponse, RecipeRequest, RecipeResponse};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::traits::RecipeService;
use crate::config::ServiceConfig;
use crate::domain::{decode_image, DecodedImage, ServiceError, ServiceResult};

pub const EXTRACT_PATH: &str = "/extract/ingredients";
pub const RECIPE_PATH: &str = "/generate/recipe";

/// Error bodies are cut to this many characters before they reach the UI or logs
const MAX_ERROR_BODY: usize = 200;

pub struct HttpRecipeService {
    client: Client,
    base_url: String,
}

impl HttpRecipeService {
    pub fn new(config: &ServiceConfig) -> ServiceResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Field values of the extraction form, before they become multipart parts
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExtractionForm {
    pub dish_name: String,
    pub persons: String,
    pub image: Option<DecodedImage>,
}

impl ExtractionForm {
    pub fn from_query(query: &ExtractionQuery) -> ServiceResult<Self> {
        let image = query.image.as_ref().map(decode_image).transpose()?;
        Ok(Self {
            dish_name: query.dish_name.trim().to_string(),
            persons: query.persons.map(|p| p.to_string()).unwrap_or_default(),
            image,
        })
    }

    /// Multipart body: `dishName`, `persons` and, if picked, the `image` file.
    pub fn into_multipart(self) -> ServiceResult<Form> {
        let mut form = Form::new()
            .text("dishName", self.dish_name)
            .text("persons", self.persons);

        if let Some(image) = self.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)
                .map_err(|e| ServiceError::InvalidInput(format!("Bad image type: {}", e)))?;
            form = form.part("image", part);
        }
        Ok(form)
    }
}

pub(crate) fn build_form(query: &ExtractionQuery) -> ServiceResult<Form> {
    ExtractionForm::from_query(query)?.into_multipart()
}

/// Map status + body to a typed payload.
pub(crate) fn interpret<T: DeserializeOwned>(status: StatusCode, body: &str) -> ServiceResult<T> {
    if !status.is_success() {
        return Err(ServiceError::Status {
            code: status.as_u16(),
            body: truncate(body.trim()),
        });
    }
    serde_json::from_str(strip_code_fence(body))
        .map_err(|e| ServiceError::MalformedResponse(e.to_string()))
}

/// Generated JSON sometimes comes wrapped in a Markdown code fence.
fn strip_code_fence(body: &str) -> &str {
    let trimmed = body.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[async_trait]
impl RecipeService for HttpRecipeService {
    async fn extract_ingredients(&self, query: &ExtractionQuery) -> ServiceResult<ExtractionResponse> {
        let form = build_form(query)?;
        let response = self.client.post(self.url(EXTRACT_PATH)).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;
        interpret(status, &body)
    }

    async fn generate_recipe(&self, request: &RecipeRequest) -> ServiceResult<RecipeResponse> {
        let response = self.client.post(self.url(RECIPE_PATH)).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        interpret(status, &body)
    }

    fn endpoint(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ingredient_ledger::ImageUpload;
    use std::time::Duration;

    fn service(base_url: &str) -> HttpRecipeService {
        HttpRecipeService::new(&ServiceConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
        })
        .expect("client builds")
    }

    #[test]
    fn test_urls_join_without_double_slash() {
        let svc = service("http://127.0.0.1:5000/");
        assert_eq!(svc.url(EXTRACT_PATH), "http://127.0.0.1:5000/extract/ingredients");
        assert_eq!(svc.url(RECIPE_PATH), "http://127.0.0.1:5000/generate/recipe");
        assert_eq!(svc.endpoint(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_urls_and_endpoint_share_the_normalized_base() {
        let svc = service("http://recipes.local:8080//");
        assert_eq!(svc.endpoint(), "http://recipes.local:8080");
        assert!(svc.url(EXTRACT_PATH).starts_with(&svc.endpoint()));
    }

    #[test]
    fn test_build_form_text_only() {
        let query = ExtractionQuery {
            dish_name: " Paneer 65 ".to_string(),
            persons: Some(3),
            image: None,
        };
        let fields = ExtractionForm::from_query(&query).unwrap();
        assert_eq!(fields.dish_name, "Paneer 65");
        assert_eq!(fields.persons, "3");
        assert_eq!(fields.image, None);
        assert!(build_form(&query).is_ok());
    }

    #[test]
    fn test_build_form_with_image() {
        let query = ExtractionQuery {
            dish_name: String::new(),
            persons: None,
            image: Some(ImageUpload {
                file_name: "dish.png".to_string(),
                mime_type: String::new(),
                data_url: "data:image/png;base64,aGVsbG8=".to_string(),
            }),
        };
        let fields = ExtractionForm::from_query(&query).unwrap();
        assert_eq!(fields.dish_name, "");
        assert_eq!(fields.persons, "");
        let image = fields.image.clone().unwrap();
        assert_eq!(image.file_name, "dish.png");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, b"hello".to_vec());
        assert!(fields.into_multipart().is_ok());
    }

    #[test]
    fn test_build_form_rejects_bad_image() {
        let query = ExtractionQuery {
            dish_name: String::new(),
            persons: None,
            image: Some(ImageUpload {
                file_name: "notes.txt".to_string(),
                mime_type: "text/plain".to_string(),
                data_url: "data:text/plain;base64,aGVsbG8=".to_string(),
            }),
        };
        assert!(matches!(build_form(&query), Err(ServiceError::InvalidInput(_))));
    }

    #[test]
    fn test_interpret_success_and_fenced_json() {
        let plain: RecipeResponse = interpret(
            StatusCode::OK,
            r#"{"foodName":"Dal","version":"Home Style","steps":["Rinse lentils"]}"#,
        )
        .unwrap();
        assert_eq!(plain.steps, vec!["Rinse lentils".to_string()]);

        let fenced: RecipeResponse = interpret(
            StatusCode::OK,
            "```json\n{\"foodName\":\"Dal\",\"version\":\"Home Style\",\"steps\":[]}\n```",
        )
        .unwrap();
        assert_eq!(fenced.food_name, "Dal");
    }

    #[test]
    fn test_interpret_status_and_shape_errors() {
        let status = interpret::<RecipeResponse>(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(
            status,
            Err(ServiceError::Status { code: 500, body: "boom".to_string() })
        );

        let shape = interpret::<ExtractionResponse>(StatusCode::OK, r#"{"foodName":"Tea"}"#);
        assert!(matches!(shape, Err(ServiceError::MalformedResponse(_))));

        let not_json = interpret::<ExtractionResponse>(StatusCode::OK, "Not a food item");
        assert!(matches!(not_json, Err(ServiceError::MalformedResponse(_))));
    }

    #[test]
    fn test_error_bodies_are_truncated() {
        let long = "x".repeat(500);
        match interpret::<RecipeResponse>(StatusCode::BAD_GATEWAY, &long) {
            Err(ServiceError::Status { body, .. }) => assert_eq!(body.len(), MAX_ERROR_BODY + 3),
            other => panic!("unexpected: {:?}", other),
        }
    }
}

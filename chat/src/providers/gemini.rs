use async_trait::async_trait;
use gemini_request::GenerateContentRequest;
use gemini_response::{ApiErrorResponse, GenerateContentResponse};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::providers::GenerateContentProvider;
use crate::{Generation, GenerationError};

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the `generateContent` method of one Gemini model.
///
/// Built once at startup and shared by every request; the inner
/// `reqwest::Client` pools connections.
pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>, model: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.to_string(),
            base_url: GEMINI_API_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl GenerateContentProvider for GeminiProvider {
    async fn generate_content(
        &self,
        prompt: Option<&str>,
    ) -> Result<Generation, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let request = GenerateContentRequest::from_prompt(prompt);

        debug!(
            "Sending generateContent request to Gemini API for model: {}",
            self.model
        );
        let response = self
            .client
            .post(self.generate_content_url())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!("Gemini API response status: {}", status);

        let body = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ApiErrorResponse>(&body) {
                Ok(api_error) => api_error.error.message,
                Err(_) => String::from_utf8_lossy(&body).into_owned(),
            };
            error!("Gemini API error: {} - {}", status, message);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse =
            serde_json::from_slice(&body).map_err(GenerationError::Decode)?;
        let text = response.text()?;
        info!("Generated content: {}", text);

        Ok(Generation {
            text,
            usage: response.usage_metadata,
        })
    }
}

//! Google Gemini client for grounded review retrieval.
//!
//! One endpoint (`models/<model>:generateContent`), one authentication method
//! (API key from process-wide configuration), plus the grounding-metadata
//! plumbing the reviews pipeline needs to attribute what the model found.

use crate::config::GeminiConfig;
use crate::error::{ConfigError, ReviewError};
use crate::llm::{build_provider_client, sanitize_api_error};
use reqwest::Client;

mod types;
pub use types::{GroundingChunk, GroundingSource};
use types::{
    Content, GeminiTool, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Where review attribution points when grounding metadata gives us nothing.
pub const DEFAULT_MAPS_URL: &str = "https://www.google.com/maps";

const MAX_OUTPUT_TOKENS: u32 = 8192;
const TEMPERATURE: f64 = 0.4;

/// Free text plus whatever grounding references came back with it.
#[derive(Debug)]
pub struct GroundedCompletion {
    pub text: String,
    pub grounding: Vec<GroundingChunk>,
}

pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    /// Build a client from configuration. A missing or blank credential is a
    /// synchronous [`ConfigError::MissingApiKey`]; callers degrade from there.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self::with_base_url(
            api_key,
            &config.model,
            config.base_url.as_deref(),
        ))
    }

    pub fn with_base_url(api_key: &str, model: &str, base_url: Option<&str>) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            model: model.to_string(),
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            client: build_provider_client(),
        }
    }

    /// Plain completion, no tools.
    pub async fn generate(&self, prompt: &str) -> Result<String, ReviewError> {
        let request = Self::build_request(prompt, None);
        let response = self.call_api(&request).await?;
        Ok(Self::extract_text(&response))
    }

    /// One completion with grounded Maps search enabled. Returns the raw text
    /// (empty string when the model produced none) and the grounding chunks
    /// of the first candidate.
    pub async fn generate_grounded(&self, prompt: &str) -> Result<GroundedCompletion, ReviewError> {
        let request = Self::build_request(prompt, Some(vec![GeminiTool::google_maps()]));
        let response = self.call_api(&request).await?;

        let grounding = response
            .candidates
            .as_ref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|metadata| metadata.grounding_chunks.clone())
            .unwrap_or_default();

        Ok(GroundedCompletion {
            text: Self::extract_text(&response),
            grounding,
        })
    }

    fn build_request(prompt: &str, tools: Option<Vec<GeminiTool>>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            tools,
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/{}:generateContent?key={}",
            self.base_url,
            Self::model_name(&self.model),
            self.api_key
        )
    }

    async fn call_api(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ReviewError> {
        let response = self
            .client
            .post(self.generate_url())
            .json(request)
            .send()
            .await
            .map_err(|e| ReviewError::Request(sanitize_api_error(&e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ReviewError::Api {
                status: status.as_u16(),
                message: sanitize_api_error(&error_text),
            });
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ReviewError::Request(sanitize_api_error(&e.to_string())))?;

        if let Some(err) = result.error {
            return Err(ReviewError::Api {
                status: err.code.unwrap_or(0),
                message: sanitize_api_error(&err.message),
            });
        }

        Ok(result)
    }

    /// Joined text parts of the first candidate; empty string when absent.
    fn extract_text(response: &GenerateContentResponse) -> String {
        response
            .candidates
            .as_ref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                let mut out = String::new();
                for part in &content.parts {
                    if let Some(text) = &part.text {
                        if !out.is_empty() {
                            out.push('\n');
                        }
                        out.push_str(text);
                    }
                }
                out
            })
            .unwrap_or_default()
    }
}

/// Pick one attribution URL from grounding references: the first maps URI
/// anywhere in the list wins, then the first web URI, then the generic
/// Maps landing page.
pub fn resolve_attribution_url(chunks: &[GroundingChunk]) -> String {
    chunks
        .iter()
        .find_map(|chunk| chunk.maps.as_ref().and_then(|source| source.uri.clone()))
        .or_else(|| {
            chunks
                .iter()
                .find_map(|chunk| chunk.web.as_ref().and_then(|source| source.uri.clone()))
        })
        .unwrap_or_else(|| DEFAULT_MAPS_URL.to_string())
}

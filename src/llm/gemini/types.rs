//! Wire types for the `generateContent` endpoint, limited to the fields this
//! crate sends and reads. Unknown response fields are ignored by serde.

use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GeminiTool>>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// Tool activation flags. Only grounded Maps search is used here; the API
/// expects an empty object as the flag value.
#[derive(Debug, Serialize)]
pub struct GeminiTool {
    #[serde(rename = "googleMaps", skip_serializing_if = "Option::is_none")]
    pub google_maps: Option<EmptyToolConfig>,
}

#[derive(Debug, Serialize)]
pub struct EmptyToolConfig {}

impl GeminiTool {
    pub fn google_maps() -> Self {
        Self {
            google_maps: Some(EmptyToolConfig {}),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

// ─── Response ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounding reference. A chunk may expose a maps-specific URI, a generic
/// web URI, both, or neither.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    pub maps: Option<GroundingSource>,
    pub web: Option<GroundingSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroundingSource {
    pub uri: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: Option<u16>,
    pub message: String,
}

use super::extract::extract_reviews;
use super::model::{AiReviewAnalysis, Review};
use crate::config::GeminiConfig;
use crate::error::ReviewError;
use crate::llm::gemini::{GeminiClient, resolve_attribution_url};

/// The fixed instruction sent on every fetch. The bracketed block format is
/// the contract `extract_reviews` parses against.
const REVIEW_PROMPT: &str = "\
Using Google Maps, find a top-rated relationship counsellor or marriage therapist in San Francisco.
Select one with good ratings.
Retrieve 3 to 4 patient reviews for this practice.

For each review, extract the Author Name, Rating, Date, and Review Text.

Output the reviews in this EXACT format:

START_REVIEW
Author: [Author Name]
Rating: [Rating Number]
Date: [Date]
Text: [Review Text]
END_REVIEW

Do not add any introductory or concluding text. Just the reviews.";

const ANALYSIS_PROMPT: &str = "\
You are given patient reviews of a therapy practice, one per line.
Respond with ONLY a JSON object, no prose and no code fences, shaped exactly like:
{\"sentimentScore\": 0.0, \"summary\": [\"sentence\"], \"keyThemes\": [{\"theme\": \"label\", \"count\": 1}]}
sentimentScore is the overall sentiment from 0.0 (negative) to 1.0 (positive).

Reviews:";

/// Fetches live reviews. Non-throwing by contract: every failure mode
/// collapses to an empty list, which callers read as "keep the fallback
/// data". Each invocation builds its records fresh; nothing is cached.
pub struct ReviewService {
    config: GeminiConfig,
}

impl ReviewService {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    /// One adapter invocation: grounded completion, attribution resolution,
    /// extraction. Configuration, transport, API and parse failures are all
    /// logged and converted to an empty list here, never propagated.
    pub async fn fetch_reviews(&self) -> Vec<Review> {
        let client = match GeminiClient::from_config(&self.config) {
            Ok(client) => client,
            Err(err) => {
                tracing::warn!("live reviews disabled: {err}");
                return Vec::new();
            }
        };

        match self.fetch_live(&client).await {
            Ok(reviews) => reviews,
            Err(err) => {
                tracing::error!("live review fetch failed: {err}");
                Vec::new()
            }
        }
    }

    async fn fetch_live(&self, client: &GeminiClient) -> Result<Vec<Review>, ReviewError> {
        let completion = client.generate_grounded(REVIEW_PROMPT).await?;
        let attribution_url = resolve_attribution_url(&completion.grounding);

        let reviews = extract_reviews(&completion.text, &attribution_url);
        if reviews.is_empty() {
            tracing::warn!(raw = %completion.text, "model output contained no parseable review blocks");
        }
        Ok(reviews)
    }

    /// Best-effort digest of `reviews`; `None` on any failure.
    pub async fn analyze_reviews(&self, reviews: &[Review]) -> Option<AiReviewAnalysis> {
        let client = match GeminiClient::from_config(&self.config) {
            Ok(client) => client,
            Err(err) => {
                tracing::debug!("review analysis unavailable: {err}");
                return None;
            }
        };

        let corpus = reviews
            .iter()
            .map(|review| format!("- ({}/5) {}", review.rating, review.text))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = format!("{ANALYSIS_PROMPT}\n{corpus}");

        let text = match client.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("review analysis failed: {err}");
                return None;
            }
        };

        match serde_json::from_str(strip_code_fences(&text)) {
            Ok(analysis) => Some(analysis),
            Err(err) => {
                tracing::warn!(raw = %text, "analysis output was not valid JSON: {err}");
                None
            }
        }
    }
}

/// Models fence JSON despite instructions often enough to be worth tolerating.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

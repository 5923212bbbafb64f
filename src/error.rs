use thiserror::Error;

/// Structured errors for the two subsystems that can actually fail.
///
/// Library callers can match on these to decide recovery strategy; internal
/// code continues to use `anyhow::Result` for ad-hoc context chains. Every
/// failure in the review-fetch flow is caught at the service boundary and
/// collapsed to an empty result, so none of these ever reaches a visitor.

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    /// No Gemini credential in config or environment. Raised synchronously
    /// when the review adapter is constructed; the service layer treats it
    /// like any other fetch failure and falls back to the mock dataset.
    #[error("gemini api key not configured (set GEMINI_API_KEY or [gemini] api_key)")]
    MissingApiKey,

    #[error("failed to load config: {0}")]
    Load(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Review pipeline errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ReviewError {
    /// Transport-level failure. The message is pre-scrubbed: reqwest errors
    /// print the request URL, and ours carries the key as a query parameter.
    #[error("gemini request failed: {0}")]
    Request(String),

    #[error("gemini api error ({status}): {message}")]
    Api { status: u16, message: String },
}

// ── Infrastructure ───────────────────────────────────────────────────────────
pub mod http_client;
pub mod scrub;

// ── Provider implementation ──────────────────────────────────────────────────
pub mod gemini;

pub use http_client::{build_provider_client, build_provider_client_with_timeout};
pub use scrub::sanitize_api_error;

pub use gemini::{GeminiClient, GroundedCompletion, resolve_attribution_url};

use serde::{Deserialize, Serialize};

/// Process-wide configuration, read once at startup from a TOML file and
/// environment overrides, then passed explicitly to whatever needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default page language (`en` or `zh`); visitors can switch per request.
    pub locale: String,

    pub server: ServerConfig,

    pub gemini: GeminiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".into(),
            server: ServerConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Access credential for the Gemini API. Usually left out of the file and
    /// supplied via `GEMINI_API_KEY` / `GOOGLE_API_KEY`.
    pub api_key: Option<String>,

    pub model: String,

    /// Override for tests and self-hosted proxies.
    pub base_url: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".into(),
            base_url: None,
        }
    }
}

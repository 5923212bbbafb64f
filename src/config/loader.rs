use super::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "serenity.toml";

impl Config {
    /// Load configuration from `path`, from `SERENITY_CONFIG`, or from
    /// `./serenity.toml` when present. A missing default file is not an
    /// error; the site runs fine on built-in defaults plus env overrides.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let explicit = path
            .map(String::from)
            .or_else(|| std::env::var("SERENITY_CONFIG").ok().filter(|p| !p.is_empty()));

        if let Some(raw_path) = explicit {
            let expanded = shellexpand::tilde(&raw_path);
            return Self::load_file(Path::new(expanded.as_ref()));
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::load_file(default_path)
        } else {
            Ok(Self::default())
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("GOOGLE_API_KEY"))
            && !key.is_empty()
        {
            self.gemini.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("SERENITY_MODEL")
            && !model.is_empty()
        {
            self.gemini.model = model;
        }

        if let Ok(host) = std::env::var("SERENITY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.server.host = host;
        }

        if let Ok(port_str) = std::env::var("SERENITY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.server.port = port;
        }
    }

    /// Detect locale from `SERENITY_LANG` env -> config -> system `LANG`,
    /// then set `rust_i18n::set_locale`.
    pub fn apply_locale(&self) {
        let locale = detect_locale(&self.locale);
        rust_i18n::set_locale(&locale);
    }
}

fn detect_system_locale() -> Option<String> {
    std::env::var("LANG")
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .ok()
        .map(|lang| lang.trim().to_lowercase())
        .filter(|lang| !lang.is_empty())
}

fn detect_locale(config_locale: &str) -> String {
    if let Ok(lang) = std::env::var("SERENITY_LANG") {
        let lang = lang.trim().to_lowercase();
        if !lang.is_empty() {
            return normalise_locale(&lang);
        }
    }

    if config_locale != "en" && !config_locale.is_empty() {
        return normalise_locale(config_locale);
    }

    if let Some(system_locale) = detect_system_locale() {
        return normalise_locale(&system_locale);
    }

    "en".into()
}

/// Normalise `"zh_CN.UTF-8"` -> `"zh"`, `"en_US"` -> `"en"`, passthrough `"zh"`.
fn normalise_locale(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split('_').next().unwrap_or(base);
    lang.to_string()
}

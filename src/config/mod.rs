mod loader;
mod schema;

pub use schema::{Config, GeminiConfig, ServerConfig};

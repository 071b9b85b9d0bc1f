use ::config::{Config, ConfigError, Environment};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("Failed to load config: {}", e)));

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub server: ServerConfig,
    pub quiz: QuizConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub page_size: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuizConfig {
    pub max_turns: usize,
}

impl AppConfig {
    /// Reads `TRIVIA__*` environment variables on top of the defaults,
    /// e.g. `TRIVIA__SERVER__PORT=8080`.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.page_size", 10)?
            .set_default("server.log_level", "debug")?
            .set_default("quiz.max_turns", 5)?
            .add_source(
                Environment::with_prefix("TRIVIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

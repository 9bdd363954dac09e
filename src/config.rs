use secrecy::SecretString;
use std::env;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_base_url: Option<String>,
    pub openai_model: String,
    pub quiz_max_tokens: u32,
    pub tournament_max_tokens: u32,
    pub temperature: f32,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_default(),
            ),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-3.5-turbo".to_string()),
            quiz_max_tokens: env::var("QUIZ_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(3000),
            tournament_max_tokens: env::var("TOURNAMENT_MAX_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(2000),
            temperature: env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that the settings required to reach the model service are present
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::ConfigError(format!(
                "OPENAI_TEMPERATURE must be between 0 and 2, got {}",
                self.temperature
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_base_url: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            quiz_max_tokens: 3000,
            tournament_max_tokens: 2000,
            temperature: 0.7,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

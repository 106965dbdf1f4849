use std::env;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!(
                "GEMINI_API_KEY is not set; generation requests will fail until it is provided"
            );
            String::new()
        });

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());

        let gemini_api_base = env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        Ok(Self {
            server_port,
            gemini_api_key,
            gemini_model,
            gemini_api_base,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
}

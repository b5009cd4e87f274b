use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base: String,
    pub auth_token: String,
    pub event_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let api_base = env::var("VIGIL_API_BASE")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string());

        let auth_token = env::var("VIGIL_AUTH_TOKEN").map_err(|_| ConfigError::MissingAuthToken)?;

        let event_capacity = env::var("VIGIL_EVENT_CAPACITY")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .unwrap_or(1000);

        Ok(Config {
            api_base,
            auth_token,
            event_capacity,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("VIGIL_AUTH_TOKEN environment variable not set")]
    MissingAuthToken,
}

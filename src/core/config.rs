use std::env;

/// Process configuration, read once at startup and passed into components
/// at construction. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_api_url: String,
    pub discord_bot_token: String,
    pub openai_api_url: String,
    pub openai_api_key: String,
    pub openai_assistant_id: String,
    pub registry_path: String,
    pub bind_addr: String,
    /// Optional bound on the run poll loop, in seconds. Unset means the
    /// faithful default: poll until the run reaches a terminal state.
    pub poll_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns a message naming the first missing or malformed variable.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            discord_api_url: env::var("DISCORD_API_URL")
                .map_err(|e| format!("DISCORD_API_URL: {}", e))?,
            discord_bot_token: env::var("DISCORD_BOT_TOKEN")
                .map_err(|e| format!("DISCORD_BOT_TOKEN: {}", e))?,
            openai_api_url: env::var("OPENAI_API_URL")
                .map_err(|e| format!("OPENAI_API_URL: {}", e))?,
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_assistant_id: env::var("OPENAI_ASSISTANT_ID")
                .map_err(|e| format!("OPENAI_ASSISTANT_ID: {}", e))?,
            registry_path: env::var("REGISTRY_DB_PATH").unwrap_or_else(|_| "recap.db".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            poll_timeout_secs: env::var("RUN_POLL_TIMEOUT_SECS")
                .ok()
                .map(|raw| {
                    raw.parse()
                        .map_err(|e| format!("RUN_POLL_TIMEOUT_SECS: {}", e))
                })
                .transpose()?,
        })
    }
}

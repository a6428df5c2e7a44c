//! Minimal runtime config: token, API URL, log path. Loaded from env vars
//! BOT_TOKEN, TELEGRAM_API_URL, LOG_FILE.

use anyhow::Result;
use std::env;

/// Env-driven bot configuration (BOT_TOKEN required, the rest optional).
pub struct BotConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl BotConfig {
    /// Loads from env. A token passed on the command line overrides BOT_TOKEN.
    pub fn load(token_override: Option<String>) -> Result<Self> {
        let bot_token = match token_override {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds a config with the given token and no overrides.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }
}

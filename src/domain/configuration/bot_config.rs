//! Bot configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

pub const MAX_SELECTION_ATTEMPTS: u32 = 10;

/// Configuration loaded from `memebot.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Structured-generation endpoint settings.
    #[serde(default)]
    pub oracle: OracleConfig,
    /// Caption selection settings.
    #[serde(default)]
    pub selector: SelectorConfig,
    /// Chat trigger and history settings.
    #[serde(default)]
    pub chat: ChatConfig,
}

impl BotConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.oracle.validate()?;
        self.selector.validate()?;
        self.chat.validate()?;
        Ok(())
    }
}

/// OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OracleConfig {
    /// Full chat completions URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model name sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            temperature: default_temperature(),
        }
    }
}

impl OracleConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("oracle.model must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig(
                "oracle.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::InvalidConfig(
                "oracle.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_temperature() -> f32 {
    0.9
}

/// Caption selection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    /// Oracle calls made before falling back.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { max_attempts: default_max_attempts() }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_attempts == 0 || self.max_attempts > MAX_SELECTION_ATTEMPTS {
            return Err(AppError::InvalidConfig(format!(
                "selector.max_attempts must be between 1 and {}",
                MAX_SELECTION_ATTEMPTS
            )));
        }
        Ok(())
    }
}

fn default_max_attempts() -> u32 {
    3
}

/// Chat glue settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Recent messages included in the transcript.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Phrase that triggers a meme without a mention.
    #[serde(default = "default_trigger_phrase")]
    pub trigger_phrase: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { history_limit: default_history_limit(), trigger_phrase: default_trigger_phrase() }
    }
}

impl ChatConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.history_limit == 0 {
            return Err(AppError::InvalidConfig(
                "chat.history_limit must be greater than 0".to_string(),
            ));
        }
        if self.trigger_phrase.trim().is_empty() {
            return Err(AppError::InvalidConfig("chat.trigger_phrase must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_history_limit() -> usize {
    5
}

fn default_trigger_phrase() -> String {
    "meme this".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_config_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.oracle.model, "gpt-4o-mini");
        assert_eq!(config.oracle.api_url.as_str(), "https://api.openai.com/v1/chat/completions");
        assert_eq!(config.selector.max_attempts, 3);
        assert_eq!(config.chat.history_limit, 5);
        assert_eq!(config.chat.trigger_phrase, "meme this");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_oracle_config_invalid_timeout() {
        let config = OracleConfig { timeout_secs: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_oracle_config_temperature_range() {
        let config = OracleConfig { temperature: 2.5, ..Default::default() };
        assert!(config.validate().is_err());
        let config = OracleConfig { temperature: 0.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_selector_attempt_bounds() {
        assert!(SelectorConfig { max_attempts: 0 }.validate().is_err());
        assert!(SelectorConfig { max_attempts: 11 }.validate().is_err());
        assert!(SelectorConfig { max_attempts: 1 }.validate().is_ok());
    }

    #[test]
    fn validate_chat_config() {
        let config = ChatConfig { history_limit: 0, ..Default::default() };
        assert!(config.validate().is_err());
        let config = ChatConfig { trigger_phrase: " ".to_string(), ..Default::default() };
        assert!(config.validate().is_err());
    }
}

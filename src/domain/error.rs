use std::io;

use thiserror::Error;

/// Failure of a single structured-generation call.
///
/// Every variant counts as a failed attempt; none of them is fatal to the
/// caption selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// Transport failure before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The request exceeded the configured timeout.
    #[error("Oracle request timed out")]
    Timeout,

    /// The provider rejected the request with 429.
    #[error("Rate limited (429)")]
    RateLimited,

    /// The provider answered with a 5xx status.
    #[error("Server error ({status})")]
    Server { status: u16 },

    /// Any other non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body or its structured content did not parse.
    #[error("Malformed structured output: {0}")]
    MalformedResponse(String),

    /// The response carried no message content.
    #[error("Oracle returned no content")]
    EmptyResponse,
}

/// Library-wide error type for memebot operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Environment or client setup issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values are out of range.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Template id is not part of the catalog.
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    /// Caption count does not match the template's slots.
    #[error("Template '{template}' takes {expected} captions, got {actual}")]
    SlotCountMismatch { template: String, expected: usize, actual: usize },

    /// The structured-generation call failed.
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// Every selection attempt failed.
    #[error("No valid caption set after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },

    /// Prompt template rendering failed.
    #[error("Prompt assembly failed: {0}")]
    PromptAssembly(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the error came from an untrusted caption set rather than the environment.
    pub fn is_caption_rejection(&self) -> bool {
        matches!(self, AppError::UnknownTemplate(_) | AppError::SlotCountMismatch { .. })
    }
}

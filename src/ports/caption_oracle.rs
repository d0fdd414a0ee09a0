//! Structured-generation oracle port definition.

use crate::domain::{CaptionDraft, OracleError};

/// One structured-generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct OracleRequest {
    /// Selection guidance built from the template catalog.
    pub system_prompt: String,
    /// The conversation to make a meme about.
    pub user_prompt: String,
    /// JSON schema the response must follow.
    pub schema: serde_json::Value,
}

/// Port for the external text-generation service that picks a template and captions.
///
/// Implementations make exactly one call per invocation; retrying is the
/// caller's job.
pub trait CaptionOracle {
    fn generate(&self, request: &OracleRequest) -> Result<CaptionDraft, OracleError>;
}

impl<T: CaptionOracle + ?Sized> CaptionOracle for &T {
    fn generate(&self, request: &OracleRequest) -> Result<CaptionDraft, OracleError> {
        (**self).generate(request)
    }
}

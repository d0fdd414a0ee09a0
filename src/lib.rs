//! memebot: pick a meme template and captions for a conversation and build its memegen.link URL.

pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::CaptionSelector;
use domain::TemplateDescriptor;
use domain::configuration::load_config;
use services::HttpCaptionOracle;

pub use app::MemeResponder;
pub use domain::{
    AppError, CaptionDraft, CaptionSet, ChatMessage, FALLBACK_URL, OracleError, TemplateId,
};
pub use ports::{CaptionOracle, OracleRequest};

/// Encode captions for a template into a memegen.link URL.
///
/// Fails with `UnknownTemplate` or `SlotCountMismatch`.
pub fn encode<S: AsRef<str>>(template_id: &str, captions: &[S]) -> Result<String, AppError> {
    domain::encode(template_id, captions)
}

/// The supported template catalog.
pub fn templates() -> &'static [TemplateDescriptor] {
    domain::catalog()
}

/// Generate a meme URL for a transcript using the configured HTTP oracle.
///
/// Only setup problems (config, missing `OPENAI_API_KEY`) are errors; oracle
/// failures end in [`FALLBACK_URL`].
pub fn generate(transcript: &str, config_path: Option<&Path>) -> Result<String, AppError> {
    let config = load_config(config_path)?;
    let oracle = HttpCaptionOracle::from_env_with_config(&config.oracle)?;
    let selector = CaptionSelector::new(oracle, config.selector)?;
    Ok(selector.select_and_encode(transcript))
}

/// What the oracle is shown, without calling it.
#[derive(Debug, Clone)]
pub struct PromptPreview {
    pub system_prompt: String,
    pub schema: serde_json::Value,
}

pub fn prompt_preview() -> Result<PromptPreview, AppError> {
    let templates = domain::catalog();
    Ok(PromptPreview {
        system_prompt: services::render_system_prompt(templates)?,
        schema: services::caption_schema(templates),
    })
}

//! Caption selection: transcript in, meme URL out.

use crate::domain::{
    AppError, CaptionSet, FALLBACK_URL, SelectorConfig, TemplateDescriptor, TemplateId, catalog,
};
use crate::ports::{CaptionOracle, OracleRequest};
use crate::services::{caption_schema, render_system_prompt, render_user_prompt};

/// Picks a template and captions for a transcript via a [`CaptionOracle`].
///
/// Attempts run sequentially, without backoff, until one yields a caption set
/// whose template was offered and whose captions fill every slot.
#[derive(Debug)]
pub struct CaptionSelector<O: CaptionOracle> {
    oracle: O,
    config: SelectorConfig,
    offered: Vec<TemplateId>,
    system_prompt: String,
    schema: serde_json::Value,
}

impl<O: CaptionOracle> CaptionSelector<O> {
    /// Create a selector offering the full template catalog.
    pub fn new(oracle: O, config: SelectorConfig) -> Result<Self, AppError> {
        Self::with_templates(oracle, config, catalog())
    }

    /// Create a selector offering only `templates`.
    pub fn with_templates(
        oracle: O,
        config: SelectorConfig,
        templates: &[TemplateDescriptor],
    ) -> Result<Self, AppError> {
        config.validate()?;
        if templates.is_empty() {
            return Err(AppError::config_error("Caption selector needs at least one template"));
        }

        Ok(Self {
            oracle,
            config,
            offered: templates.iter().map(|t| t.id).collect(),
            system_prompt: render_system_prompt(templates)?,
            schema: caption_schema(templates),
        })
    }

    /// Build the request sent to the oracle for `transcript`.
    pub fn request_for(&self, transcript: &str) -> Result<OracleRequest, AppError> {
        Ok(OracleRequest {
            system_prompt: self.system_prompt.clone(),
            user_prompt: render_user_prompt(transcript)?,
            schema: self.schema.clone(),
        })
    }

    /// Ask the oracle for a valid caption set.
    ///
    /// Fails with `ExhaustedRetries` once every attempt has failed.
    pub fn select(&self, transcript: &str) -> Result<CaptionSet, AppError> {
        let request = self.request_for(transcript)?;
        let attempts = self.config.max_attempts;

        for attempt in 1..=attempts {
            match self.attempt(&request) {
                Ok(captions) => {
                    tracing::info!(
                        template = %captions.template(),
                        attempt,
                        "caption set accepted"
                    );
                    return Ok(captions);
                }
                Err(err) if err.is_caption_rejection() => {
                    tracing::warn!(
                        attempt,
                        max_attempts = attempts,
                        error = %err,
                        "caption set rejected"
                    );
                }
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        max_attempts = attempts,
                        error = %err,
                        "caption attempt failed"
                    );
                }
            }
        }

        Err(AppError::ExhaustedRetries { attempts })
    }

    /// Turn a transcript into a meme URL, falling back to [`FALLBACK_URL`].
    pub fn select_and_encode(&self, transcript: &str) -> String {
        match self.select(transcript) {
            Ok(captions) => captions.to_url(),
            Err(err) => {
                tracing::warn!(error = %err, "using fallback meme");
                FALLBACK_URL.to_string()
            }
        }
    }

    fn attempt(&self, request: &OracleRequest) -> Result<CaptionSet, AppError> {
        let draft = self.oracle.generate(request)?;
        tracing::debug!(template = %draft.template, captions = ?draft.captions, "oracle draft");
        let captions = CaptionSet::try_from(draft)?;
        if !self.offered.contains(&captions.template()) {
            return Err(AppError::UnknownTemplate(captions.template().to_string()));
        }
        Ok(captions)
    }
}

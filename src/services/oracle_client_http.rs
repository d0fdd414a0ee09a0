//! OpenAI-compatible caption oracle using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, CaptionDraft, OracleConfig, OracleError};
use crate::ports::{CaptionOracle, OracleRequest};

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const SCHEMA_NAME: &str = "caption_set";

/// HTTP client for an OpenAI-compatible chat completions endpoint.
///
/// The caption set is requested through a `json_schema` response format and
/// read from the message content. Fenced or prose-wrapped JSON is tolerated
/// for servers that only loosely honour the format.
#[derive(Clone)]
pub struct HttpCaptionOracle {
    api_key: String,
    api_url: Url,
    model: String,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for HttpCaptionOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCaptionOracle")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCaptionOracle {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &OracleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("memebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Create from `OPENAI_API_KEY` with the given configuration.
    pub fn from_env_with_config(config: &OracleConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(format!("{} environment variable not set", API_KEY_ENV))
            })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'static str,
    schema: &'a serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CaptionOracle for HttpCaptionOracle {
    fn generate(&self, request: &OracleRequest) -> Result<CaptionDraft, OracleError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: &request.system_prompt },
                ChatMessage { role: "user", content: &request.user_prompt },
            ],
            temperature: self.temperature,
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat { name: SCHEMA_NAME, schema: &request.schema },
            },
        };

        tracing::debug!(model = %self.model, url = %self.api_url, "requesting caption set");
        let response = self.send_request(&body)?;
        parse_caption_draft(response)
    }
}

impl HttpCaptionOracle {
    fn send_request(&self, body: &ChatRequest<'_>) -> Result<ChatResponse, OracleError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| {
                if e.is_timeout() { OracleError::Timeout } else { OracleError::Http(e.to_string()) }
            })?;

        let status = response.status();

        if status.is_success() {
            response.json().map_err(|e| {
                OracleError::MalformedResponse(format!("Failed to parse response: {}", e))
            })
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Err(OracleError::RateLimited)
        } else if status.is_server_error() {
            Err(OracleError::Server { status: status.as_u16() })
        } else {
            let text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(OracleError::Api { status: status.as_u16(), message: api_error_message(&text) })
        }
    }
}

fn parse_caption_draft(response: ChatResponse) -> Result<CaptionDraft, OracleError> {
    let message =
        response.choices.into_iter().next().map(|c| c.message).ok_or(OracleError::EmptyResponse)?;

    let raw = message
        .content
        .filter(|content| !content.trim().is_empty())
        .ok_or(OracleError::EmptyResponse)?;

    serde_json::from_str(&unwrap_json_object(&raw))
        .map_err(|e| OracleError::MalformedResponse(format!("{}: {}", e, raw)))
}

/// Cut surrounding prose or code fences from a JSON object.
fn unwrap_json_object(raw: &str) -> String {
    let trimmed = raw.trim();
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}'))
        && start < end
    {
        return trimmed[start..=end].to_string();
    }
    trimmed.to_string()
}

/// Prefer the provider's `error.message` over the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_string())
}

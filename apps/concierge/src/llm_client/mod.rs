//! LLM Client — the single point of entry for all text-generation calls.
//!
//! No other module talks to Bedrock. The concierge builds a prompt, this
//! module turns it into a Titan request body and pulls the answer back out.
//!
//! Model: amazon.titan-text-express-v1 (hardcoded, along with the sampling config)
use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConciergeError;

pub mod prompts;

/// The model used for every generation call.
pub const MODEL: &str = "amazon.titan-text-express-v1";
const CONTENT_TYPE: &str = "application/json";

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

/// Sampling options sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_token_count: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_token_count: 300,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanRequest<'a> {
    input_text: &'a str,
    text_generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResponse {
    pub results: Vec<TitanResult>,
    pub input_text_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanResult {
    pub output_text: String,
    pub token_count: Option<u32>,
    pub completion_reason: Option<String>,
}

/// Serializes the request body for `prompt` with the fixed sampling config.
pub fn build_request_body(prompt: &str) -> Result<Vec<u8>, ConciergeError> {
    let request = TitanRequest {
        input_text: prompt,
        text_generation_config: GenerationConfig::default(),
    };
    Ok(serde_json::to_vec(&request)?)
}

/// Extracts the first result's text, trimmed.
/// Anything other than a well-formed body with at least one result is an error.
pub fn parse_output_text(body: &[u8]) -> Result<String, ConciergeError> {
    let response: TitanResponse = serde_json::from_slice(body)
        .map_err(|e| ConciergeError::MalformedResponse(e.to_string()))?;

    let first = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| ConciergeError::MalformedResponse("results list is empty".to_string()))?;

    debug!(
        "Generation finished: input_tokens={:?}, output_tokens={:?}, reason={:?}",
        response.input_text_token_count, first.token_count, first.completion_reason
    );

    Ok(first.output_text.trim().to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Raw model invocation: serialized body in, serialized body out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, ConciergeError>;
}

/// Bedrock Runtime `InvokeModel`. One attempt per call; SDK defaults
/// govern timeouts.
#[derive(Clone)]
pub struct BedrockGenerator {
    client: Client,
}

impl BedrockGenerator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, ConciergeError> {
        debug!("Invoking model {model_id} ({} byte body)", body.len());

        let output = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(CONTENT_TYPE)
            .accept(CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| ConciergeError::Generation(DisplayErrorContext(e).to_string()))?;

        Ok(output.body.into_inner())
    }
}

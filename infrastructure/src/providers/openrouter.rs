//! OpenRouter chat-completions gateway adapter.
//!
//! Speaks the OpenAI-compatible chat-completions dialect that OpenRouter
//! (and most hosted providers) expose. The adapter never trusts the
//! response shape: whatever fields it recognizes go into
//! [`GenerationOutput`]'s typed slots, and the complete payload rides
//! along as `raw` so the domain extraction chain can dig further.

use async_trait::async_trait;
use insight_application::{GatewayError, TextGenerator};
use insight_domain::{GenerationOutput, Message};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Default public OpenRouter endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Generation bounds for interview questions and simulated answers.
const MAX_TOKENS: u32 = 300;
const TEMPERATURE: f64 = 0.7;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Gateway adapter for an OpenRouter-compatible chat-completions API.
pub struct OpenRouterGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenRouterGateway {
    /// Build a gateway with a per-request timeout baked into the client.
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl TextGenerator for OpenRouterGateway {
    async fn generate(
        &self,
        system_prompt: &str,
        transcript: &[Message],
    ) -> Result<GenerationOutput, GatewayError> {
        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(WireMessage {
            role: "system",
            content: system_prompt,
        });
        messages.extend(transcript.iter().map(|m| WireMessage {
            role: m.role.as_str(),
            content: &m.content,
        }));

        let request = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!(model = %self.model, turns = transcript.len(), "requesting generation");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::Connection(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(output_from_payload(payload))
    }
}

/// Map a chat-completions payload into the engine's generation shape.
///
/// Recognizes `choices[0].message.content` and, for reasoning models,
/// `choices[0].message.reasoning` / `reasoning_content`. Anything else is
/// left for the extraction chain to find in `raw`.
pub fn output_from_payload(payload: serde_json::Value) -> GenerationOutput {
    let message = &payload["choices"][0]["message"];

    let content = message["content"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let reasoning = message["reasoning"]
        .as_str()
        .or_else(|| message["reasoning_content"].as_str())
        .map(str::to_string);

    GenerationOutput {
        content,
        reasoning,
        raw: payload,
    }
}

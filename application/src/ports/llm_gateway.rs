//! Text-generation gateway port
//!
//! Defines the interface for the external text-generation service. The
//! service is assumed to be slow and unreliable: calls carry their own
//! bounded timeout at the call site, and the result shape is modeled as
//! [`GenerationOutput`] precisely because providers do not agree on one.

use async_trait::async_trait;
use insight_domain::{GenerationOutput, Message};
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for text generation.
///
/// Stateless: implementations may be called concurrently from every
/// simulation unit without additional locking. Adapters live in the
/// infrastructure layer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given system prompt and conversation
    /// transcript. The raw result shape is provider-specific; callers run
    /// it through the domain extraction chain.
    async fn generate(
        &self,
        system_prompt: &str,
        transcript: &[Message],
    ) -> Result<GenerationOutput, GatewayError>;
}

//! Raw text-generation results.
//!
//! Gateways do not guarantee a clean text field: some models put the
//! answer in the primary content slot, some bury it in a reasoning field,
//! and some return shapes the adapter has never seen. [`GenerationOutput`]
//! keeps whatever was recognizable plus the full raw payload, and leaves
//! making sense of it to [`extraction`](crate::generation::extraction).

use serde::{Deserialize, Serialize};

/// The result of one generation call, in whatever shape the provider chose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutput {
    /// Primary content field, when the provider exposed one.
    pub content: Option<String>,
    /// Secondary reasoning/commentary field, when present.
    pub reasoning: Option<String>,
    /// The complete raw response payload.
    pub raw: serde_json::Value,
}

impl GenerationOutput {
    /// A well-formed output carrying plain text content.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            raw: serde_json::json!({ "content": text }),
            content: Some(text),
            reasoning: None,
        }
    }

    /// An output where the model produced only reasoning commentary.
    pub fn from_reasoning(reasoning: impl Into<String>) -> Self {
        let reasoning = reasoning.into();
        Self {
            raw: serde_json::json!({ "reasoning": reasoning }),
            content: None,
            reasoning: Some(reasoning),
        }
    }

    /// An output the adapter could not pick any field out of.
    pub fn opaque(raw: serde_json::Value) -> Self {
        Self {
            content: None,
            reasoning: None,
            raw,
        }
    }
}

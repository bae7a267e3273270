//! Helpers shared by the engine use cases.

use crate::ports::llm_gateway::{GatewayError, TextGenerator};
use crate::ports::store::{InterviewStore, StoreError};
use insight_domain::{DomainError, Exchange, GenerationOutput, InterviewId, Message};
use std::time::Duration;
use thiserror::Error;

/// Errors raised by the interview engine (sequencer, synthesizer, driver).
///
/// `Generation` is deliberately distinct from the rest so callers can tell
/// "the model didn't cooperate" apart from a data bug.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Generation failed: {0}")]
    Generation(String),
}

/// Load an interview's history with every response's question resolved.
///
/// A response pointing at a question that no longer exists is a data
/// inconsistency, not a missing-entity lookup, and fails the whole unit of
/// work rather than being skipped.
pub(crate) async fn load_history<S: InterviewStore>(
    store: &S,
    interview_id: InterviewId,
) -> Result<Vec<Exchange>, EngineError> {
    let responses = store.list_responses(interview_id).await?;
    let mut history = Vec::with_capacity(responses.len());
    for response in responses {
        let question = match store.get_question(response.question_id).await {
            Ok(question) => question,
            Err(StoreError::NotFound { .. }) => {
                return Err(DomainError::InconsistentState(format!(
                    "response in interview {interview_id} references missing question {}",
                    response.question_id
                ))
                .into());
            }
            Err(e) => return Err(e.into()),
        };
        history.push(Exchange::new(question, response));
    }
    Ok(history)
}

/// Run one gateway call under its own bounded timeout.
///
/// The bound is independent of any simulation-wide deadline; a hung call
/// fails this unit only.
pub(crate) async fn bounded_generate<G: TextGenerator>(
    gateway: &G,
    timeout: Duration,
    system_prompt: &str,
    transcript: &[Message],
) -> Result<GenerationOutput, EngineError> {
    match tokio::time::timeout(timeout, gateway.generate(system_prompt, transcript)).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(EngineError::Generation(e.to_string())),
        Err(_) => Err(EngineError::Generation(GatewayError::Timeout.to_string())),
    }
}

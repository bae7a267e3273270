//! Follow-up question synthesis
//!
//! Turns an interview's history into a conversation transcript, asks the
//! gateway for one more question, and slots the result into the parent
//! base question's reserved order-index range.
//!
//! Parsing policy: if the extraction chain finds no usable question text,
//! the call fails with a generation error. No generic substitute question
//! is ever fabricated — a made-up question stored alongside real ones
//! would poison the transcript for every downstream reader, while an error
//! is visible and retryable.

use crate::ports::llm_gateway::TextGenerator;
use crate::ports::store::InterviewStore;
use crate::use_cases::shared::{EngineError, bounded_generate};
use insight_domain::{
    Exchange, Interview, InterviewPrompt, Question, extract_question, follow_up_request,
    follow_up_slot,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Service that generates and persists follow-up questions.
///
/// Stateless; construct one per call scope and let it go.
pub struct FollowUpSynthesizer<S, G> {
    store: S,
    gateway: Arc<G>,
    gateway_timeout: Duration,
}

impl<S, G> FollowUpSynthesizer<S, G>
where
    S: InterviewStore,
    G: TextGenerator,
{
    pub fn new(store: S, gateway: Arc<G>, gateway_timeout: Duration) -> Self {
        Self {
            store,
            gateway,
            gateway_timeout,
        }
    }

    /// Produce follow-up number `ordinal` to `parent` for this interview.
    ///
    /// Idempotent: if the slot already holds a question generated for this
    /// interview, that question is returned and nothing new is created.
    /// Gateway failures and unparsable output surface as errors; retrying
    /// is the caller's decision.
    pub async fn synthesize(
        &self,
        interview: &Interview,
        history: &[Exchange],
        base_questions: &[Question],
        parent: &Question,
        ordinal: u8,
    ) -> Result<Question, EngineError> {
        let slot = follow_up_slot(base_questions, parent, ordinal)?;

        if let Some(existing) = self.store.find_follow_up(interview.id, slot).await? {
            debug!(
                interview = %interview.id,
                slot,
                question = %existing.id,
                "reusing already-generated follow-up"
            );
            return Ok(existing);
        }

        let transcript = follow_up_request(history, ordinal);
        let output = bounded_generate(
            self.gateway.as_ref(),
            self.gateway_timeout,
            InterviewPrompt::interviewer_system(),
            &transcript,
        )
        .await?;

        let text = extract_question(&output).ok_or_else(|| {
            EngineError::Generation(
                "no usable question text in generation output".to_string(),
            )
        })?;

        let question = Question::follow_up(interview.business_id, interview.id, text, slot);
        self.store.create_question(question.clone()).await?;

        debug!(
            interview = %interview.id,
            slot,
            question = %question.id,
            "generated follow-up question"
        );
        Ok(question)
    }
}

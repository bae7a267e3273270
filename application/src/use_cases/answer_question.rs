//! Answer Question use case

use crate::ports::store::InterviewStore;
use crate::use_cases::shared::EngineError;
use insight_domain::{DomainError, InterviewId, QuestionId, QuestionResponse};
use tracing::debug;

/// Use case for recording an answer during an interview.
///
/// This is the live-interview write path: the answer text comes from
/// outside the engine (a human, or the simulation driver).
pub struct AnswerQuestionUseCase<S> {
    store: S,
}

impl<S: InterviewStore> AnswerQuestionUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate interview and question, then persist the response.
    ///
    /// Re-answering a question overwrites the earlier response (store
    /// contract) instead of appending a duplicate.
    pub async fn execute(
        &self,
        interview_id: InterviewId,
        question_id: QuestionId,
        content: impl Into<String>,
    ) -> Result<QuestionResponse, EngineError> {
        let interview = self.store.get_interview(interview_id).await?;
        let question = self.store.get_question(question_id).await?;

        if question.business_id != interview.business_id {
            return Err(DomainError::InconsistentState(format!(
                "question {question_id} does not belong to the interview's business"
            ))
            .into());
        }

        let response = QuestionResponse::new(
            interview_id,
            interview.employee_id,
            question_id,
            content,
        );
        self.store.create_response(response.clone()).await?;

        debug!(interview = %interview_id, question = %question_id, "recorded answer");
        Ok(response)
    }
}

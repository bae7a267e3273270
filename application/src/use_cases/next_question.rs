//! Next Question use case
//!
//! The inbound "what do I ask now?" operation. Reads the interview's full
//! state, runs the pure sequencing decision, and — when the decision calls
//! for a follow-up — delegates generation to the synthesizer.

use crate::params::EngineParams;
use crate::ports::llm_gateway::TextGenerator;
use crate::ports::store::InterviewStore;
use crate::use_cases::shared::{EngineError, load_history};
use crate::use_cases::synthesize_follow_up::FollowUpSynthesizer;
use insight_domain::{InterviewId, NextStep, Question, plan_next, sort_base_questions};
use std::sync::Arc;

/// Outcome of a next-question request.
#[derive(Debug, Clone)]
pub enum NextQuestion {
    /// Ask this question next.
    Ask(Question),
    /// All base questions and follow-ups have been answered.
    Complete,
}

impl NextQuestion {
    pub fn is_complete(&self) -> bool {
        matches!(self, NextQuestion::Complete)
    }
}

/// Use case computing the next question of an interview.
pub struct NextQuestionUseCase<S, G> {
    store: S,
    synthesizer: FollowUpSynthesizer<S, G>,
}

impl<S, G> NextQuestionUseCase<S, G>
where
    S: InterviewStore + Clone,
    G: TextGenerator,
{
    pub fn new(store: S, gateway: Arc<G>, params: &EngineParams) -> Self {
        let synthesizer =
            FollowUpSynthesizer::new(store.clone(), gateway, params.gateway_timeout);
        Self { store, synthesizer }
    }

    /// Decide and, if needed, generate the interview's next question.
    ///
    /// Repeated calls without an intervening answer return the same
    /// question: base questions are pre-authored, and follow-up slots are
    /// looked up before anything is generated.
    pub async fn execute(&self, interview_id: InterviewId) -> Result<NextQuestion, EngineError> {
        let interview = self.store.get_interview(interview_id).await?;
        let base_questions =
            sort_base_questions(self.store.list_base_questions(interview.business_id).await?);
        let history = load_history(&self.store, interview_id).await?;

        match plan_next(&base_questions, &history)? {
            NextStep::Complete => Ok(NextQuestion::Complete),
            NextStep::AskBase(question) => Ok(NextQuestion::Ask(question)),
            NextStep::FollowUp { ordinal, parent } => {
                let question = self
                    .synthesizer
                    .synthesize(&interview, &history, &base_questions, &parent, ordinal)
                    .await?;
                Ok(NextQuestion::Ask(question))
            }
        }
    }
}

//! Single-Interview Driver
//!
//! Drives one interview from its current state to completion: ask the
//! sequencer for the next question, synthesize the employee's answer,
//! persist it, repeat. A safety cap bounds the loop so a sequencing or
//! data bug can never spin forever; hitting the cap is reported as an
//! incomplete run, not an error.

use crate::params::EngineParams;
use crate::ports::interview_logger::{InterviewEvent, InterviewLogger, NoInterviewLogger};
use crate::ports::llm_gateway::TextGenerator;
use crate::ports::store::InterviewStore;
use crate::use_cases::next_question::{NextQuestion, NextQuestionUseCase};
use crate::use_cases::shared::{EngineError, bounded_generate, load_history};
use insight_domain::{
    Employee, InterviewId, InterviewPrompt, Question, QuestionId, QuestionResponse,
    answer_request, extract_answer,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// One question/answer pair produced while driving an interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub question_id: QuestionId,
    pub question_content: String,
    pub is_follow_up: bool,
    pub answer: String,
}

/// The result of driving one interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewRun {
    pub interview_id: InterviewId,
    pub exchanges: Vec<ExchangeRecord>,
    /// False when the safety cap stopped the loop before the sequencer
    /// declared completion. Callers must check this.
    pub completed: bool,
}

/// Use case that runs a whole interview with simulated answers.
pub struct RunInterviewUseCase<S, G> {
    store: S,
    gateway: Arc<G>,
    params: EngineParams,
    logger: Arc<dyn InterviewLogger>,
}

impl<S, G> RunInterviewUseCase<S, G>
where
    S: InterviewStore + Clone,
    G: TextGenerator,
{
    pub fn new(store: S, gateway: Arc<G>, params: EngineParams) -> Self {
        Self {
            store,
            gateway,
            params,
            logger: Arc::new(NoInterviewLogger),
        }
    }

    /// Attach a transcript logger.
    pub fn with_logger(mut self, logger: Arc<dyn InterviewLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Drive the interview until the sequencer declares completion or the
    /// safety cap is hit.
    pub async fn execute(&self, interview_id: InterviewId) -> Result<InterviewRun, EngineError> {
        let interview = self.store.get_interview(interview_id).await?;
        let employee = self.store.get_employee(interview.employee_id).await?;

        self.logger
            .log(InterviewEvent::interview_started(&interview, &employee));

        let next_question = NextQuestionUseCase::new(
            self.store.clone(),
            Arc::clone(&self.gateway),
            &self.params,
        );

        let mut exchanges = Vec::new();
        let mut completed = false;

        for _ in 0..self.params.max_steps {
            let question = match next_question.execute(interview_id).await? {
                NextQuestion::Complete => {
                    completed = true;
                    break;
                }
                NextQuestion::Ask(question) => question,
            };
            self.logger
                .log(InterviewEvent::question_asked(&interview, &question));

            let answer = self.simulate_answer(&employee, interview_id, &question).await?;

            let response = QuestionResponse::new(
                interview_id,
                employee.id,
                question.id,
                answer.clone(),
            );
            self.store.create_response(response).await?;
            self.logger
                .log(InterviewEvent::answer_recorded(&interview, &question, &answer));

            debug!(
                interview = %interview_id,
                question = %question.id,
                follow_up = question.is_follow_up,
                "recorded simulated answer"
            );

            exchanges.push(ExchangeRecord {
                question_id: question.id,
                question_content: question.content,
                is_follow_up: question.is_follow_up,
                answer,
            });
        }

        if !completed {
            warn!(
                interview = %interview_id,
                steps = self.params.max_steps,
                "interview stopped at the safety cap before completing"
            );
        }

        self.logger.log(InterviewEvent::interview_finished(
            &interview,
            completed,
            exchanges.len(),
        ));

        Ok(InterviewRun {
            interview_id,
            exchanges,
            completed,
        })
    }

    /// Generate the employee's answer to one question from their persona
    /// and the conversation so far.
    async fn simulate_answer(
        &self,
        employee: &Employee,
        interview_id: InterviewId,
        question: &Question,
    ) -> Result<String, EngineError> {
        let history = load_history(&self.store, interview_id).await?;
        let transcript = answer_request(&history, question);
        let system_prompt = InterviewPrompt::respondent_system(employee);

        let output = bounded_generate(
            self.gateway.as_ref(),
            self.params.gateway_timeout,
            &system_prompt,
            &transcript,
        )
        .await?;

        extract_answer(&output).ok_or_else(|| {
            EngineError::Generation("no usable answer text in generation output".to_string())
        })
    }
}

//! Application layer for deep-insight
//!
//! This crate contains use cases, port definitions, and engine parameters.
//! It depends only on the domain layer.

pub mod params;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use params::EngineParams;
pub use ports::{
    interview_logger::{InterviewEvent, InterviewLogger, NoInterviewLogger},
    llm_gateway::{GatewayError, TextGenerator},
    progress::{NoProgress, SimulationProgress},
    store::{InterviewStore, StoreError},
};
pub use use_cases::EngineError;
pub use use_cases::answer_question::AnswerQuestionUseCase;
pub use use_cases::next_question::{NextQuestion, NextQuestionUseCase};
pub use use_cases::run_interview::{ExchangeRecord, InterviewRun, RunInterviewUseCase};
pub use use_cases::simulate_interviews::{
    BusinessSimulation, EmployeeOutcome, EmployeeSimulation, SimulateError,
    SimulateInterviewsUseCase,
};
pub use use_cases::start_interview::StartInterviewUseCase;
pub use use_cases::synthesize_follow_up::FollowUpSynthesizer;

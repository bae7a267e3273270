//! Domain layer for deep-insight
//!
//! This crate contains the core interview logic, entities, and value
//! objects. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Interview progression
//!
//! An interview walks a business's scripted base questions in order. Every
//! base answer is probed by exactly two generated follow-up questions
//! before the next base question comes up, so a finished interview with N
//! base questions holds 3N answers in the pattern (base, follow-up,
//! follow-up).
//!
//! ## Slots
//!
//! Base questions sit on order indices spaced by a stride of three,
//! leaving two reserved slots after each one. A follow-up's index is its
//! parent's index plus its ordinal (1 or 2), which keeps it strictly
//! between its parent and the next base question.

pub mod core;
pub mod generation;
pub mod interview;
pub mod prompt;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use crate::core::id::{BusinessId, EmployeeId, InterviewId, QuestionId};
pub use generation::extraction::{extract_answer, extract_question};
pub use generation::message::{Message, Role};
pub use generation::output::GenerationOutput;
pub use interview::entities::{
    BASE_QUESTION_STRIDE, Business, Employee, Exchange, FOLLOW_UPS_PER_BASE, Interview, Question,
    QuestionResponse,
};
pub use interview::sequencer::{NextStep, follow_up_slot, plan_next, sort_base_questions};
pub use interview::transcript::{
    answer_request, follow_up_request, interviewer_view, respondent_view,
};
pub use prompt::template::InterviewPrompt;

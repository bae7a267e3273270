//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod next_question;
pub mod run_interview;
pub mod simulate_interviews;
pub mod start_interview;
pub mod synthesize_follow_up;
pub(crate) mod shared;

pub use shared::EngineError;

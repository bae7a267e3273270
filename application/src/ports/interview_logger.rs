//! Port for structured interview-event logging.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the interview
//! transcript itself in a machine-readable format (one event per question
//! asked and answer recorded).

use insight_domain::{Employee, Interview, Question};
use serde_json::{Value, json};

/// A structured interview event for logging.
pub struct InterviewEvent {
    /// Event type identifier (e.g. "question_asked").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl InterviewEvent {
    pub fn interview_started(interview: &Interview, employee: &Employee) -> Self {
        Self {
            event_type: "interview_started",
            payload: json!({
                "interview_id": interview.id,
                "business_id": interview.business_id,
                "employee": employee.email,
            }),
        }
    }

    pub fn question_asked(interview: &Interview, question: &Question) -> Self {
        Self {
            event_type: "question_asked",
            payload: json!({
                "interview_id": interview.id,
                "question_id": question.id,
                "content": question.content,
                "is_follow_up": question.is_follow_up,
                "order_index": question.order_index,
            }),
        }
    }

    pub fn answer_recorded(interview: &Interview, question: &Question, answer: &str) -> Self {
        Self {
            event_type: "answer_recorded",
            payload: json!({
                "interview_id": interview.id,
                "question_id": question.id,
                "answer": answer,
            }),
        }
    }

    pub fn interview_finished(interview: &Interview, completed: bool, exchanges: usize) -> Self {
        Self {
            event_type: "interview_finished",
            payload: json!({
                "interview_id": interview.id,
                "completed": completed,
                "exchanges": exchanges,
            }),
        }
    }
}

/// Port for recording interview events to a structured log.
///
/// `log` is intentionally synchronous and non-fallible so a logging
/// problem can never disturb an interview in flight; implementations
/// swallow their own I/O errors.
pub trait InterviewLogger: Send + Sync {
    fn log(&self, event: InterviewEvent);
}

/// No-op implementation for tests and when transcript logging is off.
pub struct NoInterviewLogger;

impl InterviewLogger for NoInterviewLogger {
    fn log(&self, _event: InterviewEvent) {}
}

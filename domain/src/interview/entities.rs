//! Interview domain entities
//!
//! A business owns a fixed set of scripted base questions, spaced on a
//! stride that leaves two open order-index slots after each one. During an
//! interview the engine fills those slots with generated follow-ups, so the
//! answered sequence always reads base, follow-up, follow-up.

use crate::core::id::{BusinessId, EmployeeId, InterviewId, QuestionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order-index spacing between consecutive base questions.
///
/// Each base question reserves the two indices after its own for the
/// follow-ups generated while it is being discussed.
pub const BASE_QUESTION_STRIDE: i32 = 3;

/// Number of generated follow-ups per base question.
pub const FOLLOW_UPS_PER_BASE: usize = 2;

/// Tenant boundary. Owns questions, employees, and interviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
}

impl Business {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BusinessId::generate(),
            name: name.into(),
        }
    }
}

/// An employee of a business. Immutable once seeded; the biography is the
/// context for simulated answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub business_id: BusinessId,
    pub email: String,
    pub bio: Option<String>,
}

impl Employee {
    pub fn new(business_id: BusinessId, email: impl Into<String>, bio: Option<String>) -> Self {
        Self {
            id: EmployeeId::generate(),
            business_id,
            email: email.into(),
            bio,
        }
    }
}

/// A question belonging to one business.
///
/// Base questions are authored ahead of time and carry a fixed order index.
/// Follow-ups are generated at runtime; `origin_interview` records which
/// interview they were generated for, which is what makes repeated
/// "next question" calls return the already-generated question instead of
/// minting a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub business_id: BusinessId,
    pub content: String,
    pub is_follow_up: bool,
    pub order_index: Option<i32>,
    pub origin_interview: Option<InterviewId>,
}

impl Question {
    /// A scripted base question with a fixed position in the order.
    pub fn base(business_id: BusinessId, content: impl Into<String>, order_index: i32) -> Self {
        Self {
            id: QuestionId::generate(),
            business_id,
            content: content.into(),
            is_follow_up: false,
            order_index: Some(order_index),
            origin_interview: None,
        }
    }

    /// A generated follow-up, slotted inside its parent's reserved range.
    pub fn follow_up(
        business_id: BusinessId,
        origin_interview: InterviewId,
        content: impl Into<String>,
        order_index: i32,
    ) -> Self {
        Self {
            id: QuestionId::generate(),
            business_id,
            content: content.into(),
            is_follow_up: true,
            order_index: Some(order_index),
            origin_interview: Some(origin_interview),
        }
    }
}

/// One employee's run through the question sequence of their business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub business_id: BusinessId,
    pub employee_id: EmployeeId,
    pub started_at: DateTime<Utc>,
}

impl Interview {
    pub fn new(business_id: BusinessId, employee_id: EmployeeId) -> Self {
        Self {
            id: InterviewId::generate(),
            business_id,
            employee_id,
            started_at: Utc::now(),
        }
    }
}

/// An answer to one question within one interview.
///
/// At most one exists per (interview, question); re-answering overwrites
/// the content but keeps the original chronological position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub interview_id: InterviewId,
    pub employee_id: EmployeeId,
    pub question_id: QuestionId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl QuestionResponse {
    pub fn new(
        interview_id: InterviewId,
        employee_id: EmployeeId,
        question_id: QuestionId,
        content: impl Into<String>,
    ) -> Self {
        Self {
            interview_id,
            employee_id,
            question_id,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// A response paired with its resolved question, in chronological order.
///
/// The sequencer and the transcript builders work on these; resolving the
/// question id is the caller's job so that a dangling reference can be
/// surfaced as an error instead of skipped.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub question: Question,
    pub response: QuestionResponse,
}

impl Exchange {
    pub fn new(question: Question, response: QuestionResponse) -> Self {
        Self { question, response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_question_has_index_and_no_origin() {
        let business = Business::new("Acme");
        let q = Question::base(business.id, "Tell me about your role.", 0);
        assert!(!q.is_follow_up);
        assert_eq!(q.order_index, Some(0));
        assert!(q.origin_interview.is_none());
    }

    #[test]
    fn follow_up_records_origin_interview() {
        let business = Business::new("Acme");
        let employee = Employee::new(business.id, "a@acme.test", None);
        let interview = Interview::new(business.id, employee.id);
        let q = Question::follow_up(business.id, interview.id, "Why?", 1);
        assert!(q.is_follow_up);
        assert_eq!(q.order_index, Some(1));
        assert_eq!(q.origin_interview, Some(interview.id));
    }
}

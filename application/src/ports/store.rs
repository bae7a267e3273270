//! Storage port
//!
//! Narrow repository-style interface over whatever holds businesses,
//! employees, questions, interviews, and responses. The engine is
//! indifferent to the backing store as long as two contracts hold:
//!
//! - **Read-your-writes** within one logical unit of work: a follow-up
//!   question created by the synthesizer must be visible to the next
//!   sequencer call in the same driver loop.
//! - **Clone isolation**: a clone of a store handle is an independent
//!   handle onto the same durable state. The simulation orchestrator gives
//!   every concurrent interview its own clone; implementations must not
//!   share per-handle mutable state between clones.

use async_trait::async_trait;
use insight_domain::{
    Business, BusinessId, Employee, EmployeeId, Interview, InterviewId, Question, QuestionId,
    QuestionResponse,
};
use thiserror::Error;

/// Errors surfaced by storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Repository interface the interview engine runs against.
#[async_trait]
pub trait InterviewStore: Send + Sync {
    async fn get_business(&self, id: BusinessId) -> Result<Business, StoreError>;

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, StoreError>;

    async fn get_question(&self, id: QuestionId) -> Result<Question, StoreError>;

    async fn get_interview(&self, id: InterviewId) -> Result<Interview, StoreError>;

    /// All employees of a business, in seed order.
    async fn list_employees(&self, business_id: BusinessId) -> Result<Vec<Employee>, StoreError>;

    /// Base (non-follow-up) questions of a business, ordered by order
    /// index with indexless questions last.
    async fn list_base_questions(
        &self,
        business_id: BusinessId,
    ) -> Result<Vec<Question>, StoreError>;

    /// All responses of an interview in creation order.
    async fn list_responses(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<QuestionResponse>, StoreError>;

    /// The follow-up question already generated for this interview at this
    /// order index, if any. This is what keeps "next question" idempotent
    /// while no answer arrives.
    async fn find_follow_up(
        &self,
        interview_id: InterviewId,
        order_index: i32,
    ) -> Result<Option<Question>, StoreError>;

    async fn create_business(&self, business: Business) -> Result<(), StoreError>;

    async fn create_employee(&self, employee: Employee) -> Result<(), StoreError>;

    async fn create_question(&self, question: Question) -> Result<(), StoreError>;

    async fn create_interview(&self, interview: Interview) -> Result<(), StoreError>;

    /// Persist a response. A second response to the same (interview,
    /// question) pair overwrites the content of the first in place rather
    /// than appending a duplicate.
    async fn create_response(&self, response: QuestionResponse) -> Result<(), StoreError>;
}

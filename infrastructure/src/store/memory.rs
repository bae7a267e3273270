//! In-memory interview store.
//!
//! Backs the engine with plain maps and vectors behind an `RwLock`.
//! Cloning a `MemoryStore` yields an independent handle onto the same
//! shared state, which is exactly the isolation contract the simulation
//! orchestrator needs: one handle per concurrent unit, no per-handle
//! mutable state. Reads see every earlier write through any handle, so
//! read-your-writes holds trivially.

use async_trait::async_trait;
use insight_application::{InterviewStore, StoreError};
use insight_domain::{
    Business, BusinessId, Employee, EmployeeId, Interview, InterviewId, Question, QuestionId,
    QuestionResponse, sort_base_questions,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    businesses: HashMap<BusinessId, Business>,
    /// Seed order preserved; list_employees filters this.
    employees: Vec<Employee>,
    /// All questions of all businesses, in creation order.
    questions: Vec<Question>,
    interviews: HashMap<InterviewId, Interview>,
    /// Responses per interview, in creation order.
    responses: HashMap<InterviewId, Vec<QuestionResponse>>,
}

/// Shared in-memory store. Cheap to clone; all clones see the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InterviewStore for MemoryStore {
    async fn get_business(&self, id: BusinessId) -> Result<Business, StoreError> {
        let inner = self.inner.read().await;
        inner
            .businesses
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("business", id))
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, StoreError> {
        let inner = self.inner.read().await;
        inner
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("employee", id))
    }

    async fn get_question(&self, id: QuestionId) -> Result<Question, StoreError> {
        let inner = self.inner.read().await;
        inner
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("question", id))
    }

    async fn get_interview(&self, id: InterviewId) -> Result<Interview, StoreError> {
        let inner = self.inner.read().await;
        inner
            .interviews
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("interview", id))
    }

    async fn list_employees(&self, business_id: BusinessId) -> Result<Vec<Employee>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .employees
            .iter()
            .filter(|e| e.business_id == business_id)
            .cloned()
            .collect())
    }

    async fn list_base_questions(
        &self,
        business_id: BusinessId,
    ) -> Result<Vec<Question>, StoreError> {
        let inner = self.inner.read().await;
        let base: Vec<Question> = inner
            .questions
            .iter()
            .filter(|q| q.business_id == business_id && !q.is_follow_up)
            .cloned()
            .collect();
        Ok(sort_base_questions(base))
    }

    async fn list_responses(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<QuestionResponse>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .responses
            .get(&interview_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_follow_up(
        &self,
        interview_id: InterviewId,
        order_index: i32,
    ) -> Result<Option<Question>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .questions
            .iter()
            .find(|q| {
                q.is_follow_up
                    && q.origin_interview == Some(interview_id)
                    && q.order_index == Some(order_index)
            })
            .cloned())
    }

    async fn create_business(&self, business: Business) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.businesses.insert(business.id, business);
        Ok(())
    }

    async fn create_employee(&self, employee: Employee) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.businesses.contains_key(&employee.business_id) {
            return Err(StoreError::not_found("business", employee.business_id));
        }
        inner.employees.push(employee);
        Ok(())
    }

    async fn create_question(&self, question: Question) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.businesses.contains_key(&question.business_id) {
            return Err(StoreError::not_found("business", question.business_id));
        }
        inner.questions.push(question);
        Ok(())
    }

    async fn create_interview(&self, interview: Interview) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.businesses.contains_key(&interview.business_id) {
            return Err(StoreError::not_found("business", interview.business_id));
        }
        inner.interviews.insert(interview.id, interview);
        Ok(())
    }

    async fn create_response(&self, response: QuestionResponse) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.interviews.contains_key(&response.interview_id) {
            return Err(StoreError::not_found("interview", response.interview_id));
        }
        let responses = inner.responses.entry(response.interview_id).or_default();
        // Overwrite in place on re-answer; the original chronological slot
        // is part of the interview's history and must not move.
        if let Some(existing) = responses
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            existing.content = response.content;
        } else {
            responses.push(response);
        }
        Ok(())
    }
}

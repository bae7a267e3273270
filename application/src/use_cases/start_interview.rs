//! Start Interview use case

use crate::ports::store::{InterviewStore, StoreError};
use insight_domain::{EmployeeId, Interview};
use tracing::info;

/// Use case for opening a new interview for an employee.
pub struct StartInterviewUseCase<S> {
    store: S,
}

impl<S: InterviewStore> StartInterviewUseCase<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate the employee and create a fresh interview for them.
    pub async fn execute(&self, employee_id: EmployeeId) -> Result<Interview, StoreError> {
        let employee = self.store.get_employee(employee_id).await?;

        let interview = Interview::new(employee.business_id, employee.id);
        self.store.create_interview(interview.clone()).await?;

        info!(
            interview = %interview.id,
            employee = %employee.email,
            "started interview"
        );

        Ok(interview)
    }
}

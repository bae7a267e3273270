//! Simulation Orchestrator
//!
//! Runs simulated interviews for one employee or for every employee of a
//! business. Business-wide runs fan out one independent task per employee;
//! units never share interview data, so the only coordination is the
//! overall deadline and outcome collection.
//!
//! Failure policy: a unit that errors becomes a named failure in the
//! result without disturbing its siblings. The batch itself fails only
//! when nothing succeeded — every unit failed, or the deadline expired
//! before any unit finished.

use crate::params::EngineParams;
use crate::ports::interview_logger::{InterviewLogger, NoInterviewLogger};
use crate::ports::llm_gateway::TextGenerator;
use crate::ports::progress::{NoProgress, SimulationProgress};
use crate::ports::store::{InterviewStore, StoreError};
use crate::use_cases::run_interview::{InterviewRun, RunInterviewUseCase};
use crate::use_cases::shared::EngineError;
use crate::use_cases::start_interview::StartInterviewUseCase;
use insight_domain::{BusinessId, DomainError, Employee, EmployeeId, InterviewId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors that can occur while orchestrating simulations
#[derive(Error, Debug)]
pub enum SimulateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No employees found for this business")]
    NoEmployees,

    #[error("No base questions configured for this business")]
    NoBaseQuestions,

    #[error("Simulation deadline expired before any interview finished")]
    DeadlineExpired,

    #[error("All interviews failed")]
    AllInterviewsFailed,

    #[error(transparent)]
    Interview(#[from] EngineError),
}

/// Outcome of one employee's simulated interview within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeOutcome {
    pub employee_id: EmployeeId,
    pub employee_email: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<InterviewRun>,
}

impl EmployeeOutcome {
    pub fn success(employee: &Employee, run: InterviewRun) -> Self {
        Self {
            employee_id: employee.id,
            employee_email: employee.email.clone(),
            success: true,
            error: None,
            run: Some(run),
        }
    }

    pub fn failure(employee: &Employee, error: impl Into<String>) -> Self {
        Self {
            employee_id: employee.id,
            employee_email: employee.email.clone(),
            success: false,
            error: Some(error.into()),
            run: None,
        }
    }
}

/// Aggregate result of a business-wide simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessSimulation {
    pub business_id: BusinessId,
    pub business_name: String,
    pub outcomes: Vec<EmployeeOutcome>,
}

impl BusinessSimulation {
    pub fn successes(&self) -> impl Iterator<Item = &EmployeeOutcome> {
        self.outcomes.iter().filter(|o| o.success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &EmployeeOutcome> {
        self.outcomes.iter().filter(|o| !o.success)
    }
}

/// Result of simulating a single employee's interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSimulation {
    pub employee_id: EmployeeId,
    pub employee_email: String,
    pub business_id: BusinessId,
    pub run: InterviewRun,
}

/// Use case orchestrating simulated interviews.
pub struct SimulateInterviewsUseCase<S, G> {
    store: S,
    gateway: Arc<G>,
    params: EngineParams,
    logger: Arc<dyn InterviewLogger>,
}

impl<S, G> SimulateInterviewsUseCase<S, G>
where
    S: InterviewStore + Clone + Send + Sync + 'static,
    G: TextGenerator + Send + Sync + 'static,
{
    pub fn new(store: S, gateway: Arc<G>, params: EngineParams) -> Self {
        Self {
            store,
            gateway,
            params,
            logger: Arc::new(NoInterviewLogger),
        }
    }

    /// Attach a transcript logger, shared by all units.
    pub fn with_logger(mut self, logger: Arc<dyn InterviewLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Simulate interviews for every employee of a business, with default
    /// (no-op) progress.
    pub async fn run_for_business(
        &self,
        business_id: BusinessId,
    ) -> Result<BusinessSimulation, SimulateError> {
        self.run_for_business_with_progress(business_id, &NoProgress)
            .await
    }

    /// Simulate interviews for every employee of a business.
    ///
    /// One concurrent task per employee, each with its own cloned store
    /// handle. The overall deadline bounds how long we wait, not how long
    /// a unit may run: on expiry the remaining tasks are detached so a
    /// straggler can still finish persisting its last write, and the batch
    /// proceeds with whatever finished — unless that is nothing.
    pub async fn run_for_business_with_progress(
        &self,
        business_id: BusinessId,
        progress: &dyn SimulationProgress,
    ) -> Result<BusinessSimulation, SimulateError> {
        let business = self.store.get_business(business_id).await?;

        let employees = self.store.list_employees(business_id).await?;
        if employees.is_empty() {
            return Err(SimulateError::NoEmployees);
        }

        let base_questions = self.store.list_base_questions(business_id).await?;
        if base_questions.is_empty() {
            return Err(SimulateError::NoBaseQuestions);
        }

        info!(
            business = %business.name,
            employees = employees.len(),
            base_questions = base_questions.len(),
            "starting business-wide interview simulation"
        );

        let mut join_set = JoinSet::new();

        for employee in &employees {
            progress.on_interview_started(employee);

            let store = self.store.clone();
            let gateway = Arc::clone(&self.gateway);
            let params = self.params.clone();
            let logger = Arc::clone(&self.logger);
            let employee = employee.clone();

            join_set.spawn(async move {
                let result =
                    Self::run_unit(store, gateway, params, logger, employee.id, None).await;
                (employee, result)
            });
        }

        let deadline = tokio::time::Instant::now() + self.params.simulation_deadline;
        let mut outcomes = Vec::with_capacity(employees.len());

        loop {
            let joined = match tokio::time::timeout_at(deadline, join_set.join_next()).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!(
                        pending = join_set.len(),
                        "simulation deadline expired; no longer waiting for stragglers"
                    );
                    // Detach rather than abort: each unit owns disjoint
                    // interview rows and may finish its last write.
                    join_set.detach_all();
                    if outcomes.is_empty() {
                        return Err(SimulateError::DeadlineExpired);
                    }
                    break;
                }
            };

            match joined {
                None => break,
                Some(Ok((employee, Ok(run)))) => {
                    info!(employee = %employee.email, exchanges = run.exchanges.len(), "interview simulated");
                    progress.on_interview_finished(&employee, run.completed);
                    outcomes.push(EmployeeOutcome::success(&employee, run));
                }
                Some(Ok((employee, Err(e)))) => {
                    warn!(employee = %employee.email, error = %e, "interview simulation failed");
                    progress.on_interview_failed(&employee, &e.to_string());
                    outcomes.push(EmployeeOutcome::failure(&employee, e.to_string()));
                }
                Some(Err(e)) => {
                    warn!("interview task join error: {e}");
                }
            }
        }

        if !outcomes.iter().any(|o| o.success) {
            return Err(SimulateError::AllInterviewsFailed);
        }

        Ok(BusinessSimulation {
            business_id,
            business_name: business.name,
            outcomes,
        })
    }

    /// Simulate a single employee's interview.
    ///
    /// Unlike the batch path, errors propagate directly to the caller. An
    /// existing interview id may be supplied to resume it; otherwise a new
    /// interview is created.
    pub async fn run_for_employee(
        &self,
        employee_id: EmployeeId,
        interview_id: Option<InterviewId>,
    ) -> Result<EmployeeSimulation, SimulateError> {
        let employee = self.store.get_employee(employee_id).await?;

        let base_questions = self.store.list_base_questions(employee.business_id).await?;
        if base_questions.is_empty() {
            return Err(SimulateError::NoBaseQuestions);
        }

        if let Some(id) = interview_id {
            let interview = self.store.get_interview(id).await?;
            if interview.employee_id != employee_id {
                return Err(EngineError::from(DomainError::InconsistentState(format!(
                    "interview {id} does not belong to employee {employee_id}"
                )))
                .into());
            }
        }

        let run = Self::run_unit(
            self.store.clone(),
            Arc::clone(&self.gateway),
            self.params.clone(),
            Arc::clone(&self.logger),
            employee_id,
            interview_id,
        )
        .await?;

        Ok(EmployeeSimulation {
            employee_id: employee.id,
            employee_email: employee.email,
            business_id: employee.business_id,
            run,
        })
    }

    /// One unit of work: ensure an interview exists, then drive it.
    async fn run_unit(
        store: S,
        gateway: Arc<G>,
        params: EngineParams,
        logger: Arc<dyn InterviewLogger>,
        employee_id: EmployeeId,
        interview_id: Option<InterviewId>,
    ) -> Result<InterviewRun, EngineError> {
        let interview_id = match interview_id {
            Some(id) => id,
            None => {
                StartInterviewUseCase::new(store.clone())
                    .execute(employee_id)
                    .await?
                    .id
            }
        };

        RunInterviewUseCase::new(store, gateway, params)
            .with_logger(logger)
            .execute(interview_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_domain::Business;

    fn employee(email: &str) -> Employee {
        Employee::new(Business::new("Acme").id, email, None)
    }

    fn run_for(interview_id: InterviewId) -> InterviewRun {
        InterviewRun {
            interview_id,
            exchanges: vec![],
            completed: true,
        }
    }

    #[test]
    fn success_outcome_carries_the_run() {
        let employee = employee("a@acme.test");
        let outcome = EmployeeOutcome::success(&employee, run_for(InterviewId::generate()));
        assert!(outcome.success);
        assert!(outcome.run.is_some());
        assert!(outcome.error.is_none());
        assert_eq!(outcome.employee_email, "a@acme.test");
    }

    #[test]
    fn failure_outcome_names_the_error() {
        let employee = employee("b@acme.test");
        let outcome = EmployeeOutcome::failure(&employee, "gateway unreachable");
        assert!(!outcome.success);
        assert!(outcome.run.is_none());
        assert_eq!(outcome.error.as_deref(), Some("gateway unreachable"));
    }

    #[test]
    fn simulation_partitions_successes_and_failures() {
        let business = Business::new("Acme");
        let ok = employee("ok@acme.test");
        let bad = employee("bad@acme.test");
        let simulation = BusinessSimulation {
            business_id: business.id,
            business_name: business.name,
            outcomes: vec![
                EmployeeOutcome::success(&ok, run_for(InterviewId::generate())),
                EmployeeOutcome::failure(&bad, "boom"),
            ],
        };
        assert_eq!(simulation.successes().count(), 1);
        assert_eq!(simulation.failures().count(), 1);
        assert_eq!(
            simulation.failures().next().unwrap().employee_email,
            "bad@acme.test"
        );
    }
}

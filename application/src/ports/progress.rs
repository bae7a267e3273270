//! Simulation progress port
//!
//! Lets the outer layer observe a batch simulation as it runs without the
//! orchestrator knowing anything about consoles. Callbacks fire from the
//! orchestrator's collection loop, never from inside the concurrent tasks.

use insight_domain::Employee;

/// Observer for batch-simulation progress.
pub trait SimulationProgress: Send + Sync {
    /// An interview task was launched for this employee.
    fn on_interview_started(&self, employee: &Employee);

    /// An interview finished; `completed` is false when the safety cap
    /// stopped it early.
    fn on_interview_finished(&self, employee: &Employee, completed: bool);

    /// An interview failed with the given error message. Siblings keep
    /// running.
    fn on_interview_failed(&self, employee: &Employee, error: &str);
}

/// No-op progress for tests and headless callers.
pub struct NoProgress;

impl SimulationProgress for NoProgress {
    fn on_interview_started(&self, _employee: &Employee) {}
    fn on_interview_finished(&self, _employee: &Employee, _completed: bool) {}
    fn on_interview_failed(&self, _employee: &Employee, _error: &str) {}
}

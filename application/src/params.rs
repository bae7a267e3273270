//! Engine tuning parameters.

use std::time::Duration;

/// Default bound on a single gateway call.
pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(30);

/// Default iteration cap for one interview drive. A complete interview
/// with N base questions takes 3N iterations, so 50 comfortably covers 16
/// base questions while still guaranteeing termination under a data bug.
pub const DEFAULT_MAX_STEPS: usize = 50;

/// Default overall deadline for a business-wide simulation.
pub const DEFAULT_SIMULATION_DEADLINE: Duration = Duration::from_secs(120);

/// Runtime bounds for the interview engine.
///
/// The gateway timeout is per call and independent of the simulation
/// deadline, so one hung generation cannot silently consume the whole
/// batch budget.
#[derive(Debug, Clone)]
pub struct EngineParams {
    pub gateway_timeout: Duration,
    pub max_steps: usize,
    pub simulation_deadline: Duration,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            gateway_timeout: DEFAULT_GATEWAY_TIMEOUT,
            max_steps: DEFAULT_MAX_STEPS,
            simulation_deadline: DEFAULT_SIMULATION_DEADLINE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_gateway_timeout_under_the_deadline() {
        let params = EngineParams::default();
        assert!(params.gateway_timeout < params.simulation_deadline);
        assert!(params.max_steps >= 3);
    }
}

//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Stored interview data contradicts the sequencing invariants,
    /// e.g. a follow-up response with no preceding base answer.
    #[error("Inconsistent interview state: {0}")]
    InconsistentState(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inconsistent_state_display() {
        let error = DomainError::InconsistentState("orphan follow-up".to_string());
        assert_eq!(
            error.to_string(),
            "Inconsistent interview state: orphan follow-up"
        );
    }
}

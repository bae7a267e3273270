//! Entity identifiers
//!
//! Uuid-backed newtype ids for every aggregate. Keeping them distinct types
//! prevents an interview id from being passed where a question id is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing uuid.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Parse from the canonical hyphenated form.
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(s).map(Self)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a business (tenant boundary).
    BusinessId
);
entity_id!(
    /// Identifier of an employee within a business.
    EmployeeId
);
entity_id!(
    /// Identifier of a question, scripted or generated.
    QuestionId
);
entity_id!(
    /// Identifier of one employee's interview run.
    InterviewId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(QuestionId::generate(), QuestionId::generate());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let id = InterviewId::generate();
        let parsed = InterviewId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(BusinessId::parse("not-a-uuid").is_err());
    }
}

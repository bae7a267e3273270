//! Interview aggregate: entities, sequencing, and transcripts.

pub mod entities;
pub mod sequencer;
pub mod transcript;

//! Text-generation gateway adapters.

mod openrouter;

pub use openrouter::{DEFAULT_BASE_URL, OpenRouterGateway, output_from_payload};

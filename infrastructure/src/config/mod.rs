//! Configuration: file format and multi-source loader.

mod file_config;
mod loader;

pub use file_config::{FileConfig, SimulationConfig};
pub use loader::ConfigLoader;

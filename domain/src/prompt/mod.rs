//! Prompt templates.

pub mod template;

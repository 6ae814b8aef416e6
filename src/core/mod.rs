//! # Core Module
//!
//! Core domain types, configuration, error handling and the text-generation seam.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add generation module with the OpenAI-compatible chat client
//! - 1.0.0: Initial creation with config, error and stance modules

pub mod config;
pub mod error;
pub mod generation;
pub mod stance;

// Re-export commonly used items
pub use config::Config;
pub use error::DebateError;
pub use generation::{
    generator_from_config, ChatMessage, ChatRole, OpenAiGenerator, TextGenerator, TimeoutGenerator,
};
pub use stance::Stance;

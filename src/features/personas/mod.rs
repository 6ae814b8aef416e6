//! # Personas Feature
//!
//! The FOR and AGAINST debaters and the responder that speaks for them.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release

pub mod manager;
pub mod prompt_builder;
pub mod responder;

pub use manager::{Persona, PersonaManager};
pub use prompt_builder::{PromptBuilder, REBUTTAL_DIRECTIVE};
pub use responder::PersonaResponder;

//! # TUI Module
//!
//! Terminal presentation for debates: topic and turn inputs, a background run
//! with progress, then turn-by-turn navigation over the finished transcript.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial TUI with debate and help screens

pub mod app;
pub mod event;
pub mod ui;

pub use app::{App, RunStatus, Screen};
pub use event::{Event, EventHandler};

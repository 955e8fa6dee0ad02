//! # cadre-core
//!
//! Core types, settings, and error types for the cadre framework.
//! This crate has zero framework dependencies and provides the foundation
//! for all other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Framework settings and global configuration
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{CadreError, CadreResult};
pub use settings::Settings;

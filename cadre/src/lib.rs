//! # cadre
//!
//! A modular MVC web framework core for Rust: modules register controllers,
//! controllers declare typed URL patterns, and the routing engine matches
//! requests to controller actions and generates URLs back from route names.
//!
//! This is the meta-crate that re-exports the member crates for convenient
//! access; depend on the individual crates for finer-grained control.

/// Core types: settings, logging, and error types.
pub use cadre_core as core;

/// HTTP layer: the request type and the routing engine.
pub use cadre_http as http;

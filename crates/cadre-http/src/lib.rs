//! # cadre-http
//!
//! HTTP layer for the cadre framework. Provides the [`HttpRequest`] type used
//! as the ambient request context, and the [`routing`] module: URL pattern
//! compilation, route registration, request matching, URL generation, and
//! action argument binding.

pub mod request;
pub mod routing;

pub use request::HttpRequest;

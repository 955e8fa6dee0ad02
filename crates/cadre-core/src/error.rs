//! Core error types for the cadre framework.
//!
//! This module provides the framework-wide error enum [`CadreError`], covering
//! HTTP errors, routing errors, and configuration errors, together with the
//! [`CadreResult`] alias used throughout the framework.
//!
//! The routing variants follow a strict propagation policy: pattern and
//! registration errors are raised during module configuration and should abort
//! startup; [`CadreError::RouteNotFound`] is recoverable and is surfaced to the
//! end user as a "not found" response; [`CadreError::RouteParameterNotFound`]
//! and [`CadreError::ArgumentNotFound`] indicate a misconfigured route rather
//! than bad user input and are treated as internal errors.

use thiserror::Error;

/// The primary error type for the cadre framework.
///
/// Each variant maps to an appropriate HTTP status code via
/// [`CadreError::status_code`].
#[derive(Error, Debug)]
pub enum CadreError {
    // ── HTTP errors ──────────────────────────────────────────────────

    /// HTTP 400 Bad Request.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// HTTP 404 Not Found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// HTTP 405 Method Not Allowed.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// HTTP 500 Internal Server Error.
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    // ── Routing errors ───────────────────────────────────────────────

    /// A URL pattern failed to compile: malformed placeholder, unknown type
    /// constraint, duplicate parameter name, or a non-trailing optional
    /// segment. Raised at registration time; fatal to that registration.
    #[error("Invalid URL pattern: {0}")]
    Pattern(String),

    /// No route matched the requested method and path, or a URL was requested
    /// for a route name that does not exist.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// A required parameter was missing when generating a URL for a named
    /// route. This is a programmer error and should not be silently swallowed.
    #[error("Missing parameter '{parameter}' for route '{route}'")]
    RouteParameterNotFound {
        /// The name of the route being generated.
        route: String,
        /// The required parameter that was not supplied.
        parameter: String,
    },

    /// An action parameter could not be bound: it was absent from the matched
    /// path parameters and declares no default value. Indicates an
    /// inconsistency between a controller's pattern and its action signature.
    #[error("No value to bind to parameter '{parameter}' of action '{action}'")]
    ArgumentNotFound {
        /// The qualified action (`controller::action`) being bound.
        action: String,
        /// The formal parameter that could not be satisfied.
        parameter: String,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The framework is improperly configured (e.g. duplicate route names).
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred (e.g. while reading a settings file).
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CadreError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - `BadRequest` -> 400
    /// - `NotFound`, `RouteNotFound` -> 404
    /// - `MethodNotAllowed` -> 405
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) | Self::RouteNotFound(_) => 404,
            Self::MethodNotAllowed(_) => 405,
            Self::InternalServerError(_)
            | Self::Pattern(_)
            | Self::RouteParameterNotFound { .. }
            | Self::ArgumentNotFound { .. }
            | Self::ConfigurationError(_)
            | Self::ImproperlyConfigured(_)
            | Self::IoError(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, CadreError>`.
pub type CadreResult<T> = Result<T, CadreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CadreError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(CadreError::NotFound("x".into()).status_code(), 404);
        assert_eq!(CadreError::RouteNotFound("x".into()).status_code(), 404);
        assert_eq!(CadreError::MethodNotAllowed("x".into()).status_code(), 405);
        assert_eq!(CadreError::Pattern("x".into()).status_code(), 500);
        assert_eq!(
            CadreError::RouteParameterNotFound {
                route: "item".into(),
                parameter: "id".into(),
            }
            .status_code(),
            500
        );
        assert_eq!(
            CadreError::ArgumentNotFound {
                action: "item::show".into(),
                parameter: "id".into(),
            }
            .status_code(),
            500
        );
        assert_eq!(
            CadreError::ImproperlyConfigured("x".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_route_parameter_not_found_display() {
        let err = CadreError::RouteParameterNotFound {
            route: "item_route".into(),
            parameter: "id".into(),
        };
        assert_eq!(
            err.to_string(),
            "Missing parameter 'id' for route 'item_route'"
        );
    }

    #[test]
    fn test_argument_not_found_display() {
        let err = CadreError::ArgumentNotFound {
            action: "items::show".into(),
            parameter: "slug".into(),
        };
        assert!(err.to_string().contains("slug"));
        assert!(err.to_string().contains("items::show"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CadreError = io_err.into();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("file missing"));
    }
}

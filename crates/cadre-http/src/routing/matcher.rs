//! Request matching: resolving an HTTP method and path to a route, action,
//! and typed parameter values.
//!
//! Matching walks the registry in registration order and returns the first
//! route whose pattern matches the normalized path *and* whose action table
//! maps the request method. A route whose path matches but whose method is
//! unmapped or disabled is skipped, not fatal: a narrower route registered
//! later may still match. Matching is a pure read over the registry.

use http::Method;

use cadre_core::{CadreError, CadreResult};

use super::constraint::ParamValue;
use super::controller::MethodAction;
use super::params::ParamMap;
use super::pattern::{CompiledPattern, Segment};
use super::registry::{RouteId, RouteRegistry};

/// The result of successfully resolving a request path to a route action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched route's id.
    pub route_id: RouteId,
    /// The matched route's name.
    pub route_name: String,
    /// The controller identifier to dispatch to.
    pub controller: String,
    /// The resolved action name for the request method.
    pub action: String,
    /// Matched parameters, coerced per their constraints, in pattern order.
    pub params: ParamMap,
}

impl RouteMatch {
    /// Returns the qualified dispatch target, `controller::action`.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.controller, self.action)
    }
}

impl RouteRegistry {
    /// Resolves an HTTP method and request path to a [`RouteMatch`].
    ///
    /// The method is case-insensitive. The path is normalized before
    /// matching: the query string is stripped, duplicate slashes collapse,
    /// and a trailing slash is ignored except for the root path.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::RouteNotFound`] when no registered route
    /// matches both path and method.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadre_http::routing::{ActionDescriptor, ControllerDescriptor, ParamValue, RouteRegistry};
    ///
    /// let mut registry = RouteRegistry::new();
    /// let descriptor = ControllerDescriptor::new("ItemController", "/item/{id:int}/{slug}?")
    ///     .action(ActionDescriptor::public("index"));
    /// registry.register_controller(&descriptor, "").unwrap();
    ///
    /// let m = registry.resolve("get", "/item/42?page=2").unwrap();
    /// assert_eq!(m.action, "index");
    /// assert_eq!(m.params.get("id"), Some(&ParamValue::Int(42)));
    /// assert!(m.params.get("slug").is_none());
    /// ```
    pub fn resolve(&self, method: &str, path: &str) -> CadreResult<RouteMatch> {
        let method = normalize_method(method)?;
        let segments = normalize_path(path);

        for (route_id, route) in self.iter() {
            let Some(params) = match_pattern(route.pattern(), &segments) else {
                continue;
            };

            // The path matched; an unmapped or disabled method is only a
            // try-next signal, so a later route may still claim the path.
            let Some(MethodAction::Action(action)) = route.actions().lookup(&method) else {
                tracing::debug!(
                    route = route.name(),
                    %method,
                    "path matched but method not dispatchable; trying next route"
                );
                continue;
            };

            return Ok(RouteMatch {
                route_id,
                route_name: route.name().to_string(),
                controller: route.controller().to_string(),
                action: action.clone(),
                params,
            });
        }

        Err(CadreError::RouteNotFound(format!(
            "no route matches {method} {path}"
        )))
    }
}

/// Parses and upper-cases an HTTP method string.
fn normalize_method(method: &str) -> CadreResult<Method> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| CadreError::BadRequest(format!("invalid HTTP method '{method}'")))
}

/// Splits a request path into segments: strips the query string, collapses
/// duplicate slashes, and drops the trailing slash (the root path yields no
/// segments at all).
fn normalize_path(path: &str) -> Vec<&str> {
    let path = path.split('?').next().unwrap_or(path);
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Attempts a full match of `segments` against `pattern`, returning the
/// coerced parameter values on success.
fn match_pattern(pattern: &CompiledPattern, segments: &[&str]) -> Option<ParamMap> {
    if segments.len() < pattern.min_depth() || segments.len() > pattern.max_depth() {
        return None;
    }

    let mut params = ParamMap::new();

    for (index, segment) in pattern.segments().iter().enumerate() {
        match (segment, segments.get(index)) {
            (Segment::Literal(literal), Some(part)) => {
                if literal != part {
                    return None;
                }
            }
            (
                Segment::Param {
                    name, constraint, ..
                },
                Some(part),
            ) => {
                if !constraint.matches(part) {
                    return None;
                }
                // All-digit segments can still overflow i64; reject the
                // route rather than the request.
                let value: ParamValue = constraint.coerce(part).ok()?;
                params.insert(name.clone(), value);
            }
            // Missing trailing segments must all be optional parameters;
            // they are bound as absent.
            (Segment::Param { optional: true, .. }, None) => {}
            (_, None) => return None,
        }
    }

    Some(params)
}

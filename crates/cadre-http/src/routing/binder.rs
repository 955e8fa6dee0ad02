//! Argument binding: mapping matched path parameters and ambient framework
//! objects onto an action's formal parameters.
//!
//! The binder walks the action's declared parameters in order. Parameters of
//! kind [`ParamKind::Request`] receive the ambient [`HttpRequest`] regardless
//! of name or position; value parameters are looked up by name in the matched
//! parameter map, falling back to their declared default. A value parameter
//! that is absent and has no default is a binding error — the route's pattern
//! and the action's signature disagree. [`validate_route`] surfaces such
//! disagreements at startup instead of request time.

use cadre_core::{CadreError, CadreResult};

use super::constraint::ParamValue;
use super::controller::{MethodAction, ParamKind};
use super::params::ParamMap;
use super::route::Route;
use crate::request::HttpRequest;

/// One bound argument for an action invocation, in declaration order.
#[derive(Debug)]
pub enum BoundArg<'a> {
    /// A coerced path parameter or declared default.
    Value(ParamValue),
    /// The ambient HTTP request.
    Request(&'a HttpRequest),
}

/// Binds the arguments for invoking `action` on the route's controller.
///
/// # Errors
///
/// - [`CadreError::InternalServerError`] if the route has no public action of
///   that name (the matcher never produces one).
/// - [`CadreError::ArgumentNotFound`] if a value parameter is absent from the
///   matched parameters and declares no default.
///
/// # Examples
///
/// ```
/// use cadre_http::routing::{
///     bind_arguments, ActionDescriptor, BoundArg, ControllerDescriptor, ParamSpec,
///     RouteRegistry,
/// };
/// use cadre_http::HttpRequest;
///
/// let mut registry = RouteRegistry::new();
/// let descriptor = ControllerDescriptor::new("ItemController", "/item/{id:int}")
///     .action(ActionDescriptor::public("index").with_params(vec![
///         ParamSpec::request("request"),
///         ParamSpec::value("id"),
///     ]));
/// registry.register_controller(&descriptor, "").unwrap();
///
/// let request = HttpRequest::builder().path("/item/42").build();
/// let m = registry.resolve("GET", request.path()).unwrap();
/// let route = registry.get(m.route_id).unwrap();
///
/// let args = bind_arguments(route, &m.action, &m.params, &request).unwrap();
/// assert!(matches!(args[0], BoundArg::Request(_)));
/// assert!(matches!(args[1], BoundArg::Value(_)));
/// ```
pub fn bind_arguments<'a>(
    route: &Route,
    action: &str,
    params: &ParamMap,
    request: &'a HttpRequest,
) -> CadreResult<Vec<BoundArg<'a>>> {
    let signature = route.signature(action).ok_or_else(|| {
        CadreError::InternalServerError(format!(
            "controller '{}' has no public action '{action}'",
            route.controller()
        ))
    })?;

    let mut args = Vec::with_capacity(signature.len());
    for spec in signature {
        match &spec.kind {
            ParamKind::Request => args.push(BoundArg::Request(request)),
            ParamKind::Value { default } => {
                if let Some(value) = params.get(&spec.name) {
                    args.push(BoundArg::Value(value.clone()));
                } else if let Some(default) = default {
                    args.push(BoundArg::Value(default.clone()));
                } else {
                    return Err(CadreError::ArgumentNotFound {
                        action: format!("{}::{action}", route.controller()),
                        parameter: spec.name.clone(),
                    });
                }
            }
        }
    }

    Ok(args)
}

/// Startup validation that a route's pattern can satisfy every mapped
/// action's signature.
///
/// Flags value parameters without a default that do not appear in the
/// pattern at all: those would fail on every request. A parameter bound to
/// an *optional* pattern segment with no default is accepted here but can
/// still fail at request time when the segment is absent; declare a default
/// for such parameters.
///
/// # Errors
///
/// Returns [`CadreError::ArgumentNotFound`] for the first unsatisfiable
/// parameter found.
pub fn validate_route(route: &Route) -> CadreResult<()> {
    for (_, mapping) in route.actions().iter() {
        let MethodAction::Action(action) = mapping else {
            continue;
        };
        // Mapped actions are always public and declared, by construction.
        let Some(signature) = route.signature(action) else {
            continue;
        };
        for spec in signature {
            let required_value =
                matches!(spec.kind, ParamKind::Value { default: None });
            if required_value && !route.pattern().has_param(&spec.name) {
                return Err(CadreError::ArgumentNotFound {
                    action: format!("{}::{action}", route.controller()),
                    parameter: spec.name.clone(),
                });
            }
        }
    }
    Ok(())
}

//! Route compilation, matching, generation, and argument binding.
//!
//! This module is the routing core of the framework:
//!
//! - [`pattern`]: compiles declarative URL patterns (`/item/{id:int}/{slug}?`)
//!   into segment matchers
//! - [`constraint`]: typed parameter constraints (`string`, `int`, `slug`)
//! - [`controller`]: the plain-data controller introspection contract
//! - [`route`] / [`registry`]: routes and the insertion-ordered registry
//! - [`matcher`]: resolves an HTTP method and path to a route, action, and
//!   coerced parameter values
//! - [`generator`]: the inverse — produces a concrete path from a route name
//!   and parameter values
//! - [`binder`]: binds matched parameters and the ambient request onto an
//!   action's formal parameters
//!
//! # Examples
//!
//! ```
//! use cadre_http::routing::{
//!     generate_url, ActionDescriptor, ControllerDescriptor, ParamMap, ParamSpec,
//!     ParamValue, RouteRegistry,
//! };
//!
//! let mut registry = RouteRegistry::new();
//! let descriptor = ControllerDescriptor::new("ItemController", "/item/{id:int}/{slug}?")
//!     .named("item_route")
//!     .action(ActionDescriptor::public("index").with_params(vec![
//!         ParamSpec::value("id"),
//!         ParamSpec::with_default("slug", ""),
//!     ]));
//! registry.register_controller(&descriptor, "").unwrap();
//!
//! // Forward: method + path -> route, action, typed parameters.
//! let m = registry.resolve("GET", "/item/42/hello").unwrap();
//! assert_eq!(m.action, "index");
//! assert_eq!(m.params.get("id"), Some(&ParamValue::Int(42)));
//!
//! // Inverse: route name + parameters -> path.
//! let mut params = ParamMap::new();
//! params.insert("id", 42);
//! assert_eq!(generate_url("item_route", &params, &registry).unwrap(), "/item/42");
//! ```

pub mod binder;
pub mod constraint;
pub mod controller;
pub mod generator;
pub mod matcher;
pub mod params;
pub mod pattern;
pub mod registry;
pub mod route;

pub use binder::{bind_arguments, validate_route, BoundArg};
pub use constraint::{Constraint, ParamValue};
pub use controller::{
    ActionDescriptor, ControllerDescriptor, MethodAction, ParamKind, ParamSpec,
};
pub use generator::generate_url;
pub use matcher::RouteMatch;
pub use params::ParamMap;
pub use pattern::{CompiledPattern, Segment};
pub use registry::{RouteId, RouteRegistry};
pub use route::{ActionMap, Route};

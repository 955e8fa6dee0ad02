//! The route registry: an insertion-ordered collection of routes.
//!
//! Matching walks routes in *registration* order, not pattern specificity;
//! the first full match wins. Callers registering overlapping patterns must
//! therefore register the more specific pattern first — the engine does not
//! enforce this. The registry is built during the single-threaded
//! configuration phase and treated as read-only afterwards, so concurrent
//! matching and generation need no locking.

use std::collections::HashMap;

use cadre_core::{CadreError, CadreResult};

use super::controller::ControllerDescriptor;
use super::route::Route;

/// A stable identifier for a registered route: an index into the registry's
/// arena, valid for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub(crate) usize);

/// An insertion-ordered mapping from route name to [`Route`].
///
/// Routes live in a `Vec` arena with stable iteration order; the name index
/// is only a lookup accelerator, so no map implementation's iteration
/// semantics can reorder matching.
///
/// # Examples
///
/// ```
/// use cadre_http::routing::{ActionDescriptor, ControllerDescriptor, RouteRegistry};
///
/// let mut registry = RouteRegistry::new();
/// let descriptor = ControllerDescriptor::new("ItemController", "/item/{id:int}")
///     .action(ActionDescriptor::public("index"));
/// let id = registry.register_controller(&descriptor, "").unwrap();
/// assert_eq!(registry.get(id).unwrap().name(), "item");
/// ```
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl RouteRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route, preserving registration order for matching.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::ImproperlyConfigured`] if a route with the same
    /// name is already registered.
    pub fn register(&mut self, route: Route) -> CadreResult<RouteId> {
        if self.by_name.contains_key(route.name()) {
            return Err(CadreError::ImproperlyConfigured(format!(
                "duplicate route name '{}'",
                route.name()
            )));
        }

        tracing::debug!(
            name = route.name(),
            pattern = route.pattern().source(),
            controller = route.controller(),
            "registered route"
        );

        let index = self.routes.len();
        self.by_name.insert(route.name().to_string(), index);
        self.routes.push(route);
        Ok(RouteId(index))
    }

    /// Builds a [`Route`] from extracted controller metadata and registers
    /// it. `prefix` is the registering module's literal URL prefix.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::Pattern`] if the pattern fails to compile, or
    /// [`CadreError::ImproperlyConfigured`] on a duplicate route name.
    pub fn register_controller(
        &mut self,
        descriptor: &ControllerDescriptor,
        prefix: &str,
    ) -> CadreResult<RouteId> {
        self.register(Route::from_descriptor(descriptor, prefix)?)
    }

    /// Returns the route with the given id.
    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.0)
    }

    /// Returns the route registered under `name`.
    pub fn get_by_name(&self, name: &str) -> Option<(RouteId, &Route)> {
        let index = *self.by_name.get(name)?;
        Some((RouteId(index), &self.routes[index]))
    }

    /// The number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, &Route)> {
        self.routes
            .iter()
            .enumerate()
            .map(|(index, route)| (RouteId(index), route))
    }
}

//! Routes: a compiled pattern bound to a controller and its action mapping.

use http::Method;

use cadre_core::CadreResult;

use super::controller::{ActionDescriptor, ControllerDescriptor, MethodAction, ParamSpec};
use super::pattern::CompiledPattern;

/// The HTTP-method → action table for one route.
///
/// A small ordered table rather than a hash map: it holds a handful of
/// entries and its iteration order is the merge order (defaults first,
/// overrides appended or replacing in place).
///
/// The default mapping is `GET` → `index`, `POST` → `save`, `PUT` → `new`.
/// Explicit overrides are merged over it; entries whose action is not a
/// declared public method of the controller are dropped, so the table only
/// ever names dispatchable actions. [`MethodAction::Disabled`] entries are
/// kept: a disabled method must stay distinguishable from an unmapped one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMap {
    entries: Vec<(Method, MethodAction)>,
}

impl ActionMap {
    /// Builds the merged table from the default mapping, the controller's
    /// overrides, and its declared actions.
    fn build(descriptor: &ControllerDescriptor) -> Self {
        let mut entries: Vec<(Method, MethodAction)> = vec![
            (Method::GET, MethodAction::Action("index".to_string())),
            (Method::POST, MethodAction::Action("save".to_string())),
            (Method::PUT, MethodAction::Action("new".to_string())),
        ];

        for (method, mapping) in &descriptor.overrides {
            if let Some(entry) = entries.iter_mut().find(|(m, _)| m == method) {
                entry.1 = mapping.clone();
            } else {
                entries.push((method.clone(), mapping.clone()));
            }
        }

        entries.retain(|(_, mapping)| match mapping {
            MethodAction::Action(name) => is_public_action(&descriptor.actions, name),
            MethodAction::Disabled => true,
        });

        Self { entries }
    }

    /// Looks up the mapping for an HTTP method. `None` means unmapped.
    pub fn lookup(&self, method: &Method) -> Option<&MethodAction> {
        self.entries
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, mapping)| mapping)
    }

    /// Iterates over the table in merge order.
    pub fn iter(&self) -> impl Iterator<Item = (&Method, &MethodAction)> {
        self.entries.iter().map(|(m, a)| (m, a))
    }
}

fn is_public_action(actions: &[ActionDescriptor], name: &str) -> bool {
    actions.iter().any(|a| a.public && a.name == name)
}

/// A compiled URL pattern bound to a controller identifier, a route name, and
/// the HTTP-method → action mapping.
///
/// Routes are created once when a controller is introspected during module
/// configuration and are immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    controller: String,
    pattern: CompiledPattern,
    actions: ActionMap,
    signatures: Vec<(String, Vec<ParamSpec>)>,
}

impl Route {
    /// Builds a route from extracted controller metadata and the registering
    /// module's literal prefix.
    ///
    /// When the controller declares no explicit route name, one is derived
    /// from the controller identifier: a trailing `Controller` suffix is
    /// stripped and the remainder lowercased (`ItemController` → `item`).
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::Pattern`](cadre_core::CadreError::Pattern) if
    /// the prefix or pattern fails to compile.
    pub fn from_descriptor(descriptor: &ControllerDescriptor, prefix: &str) -> CadreResult<Self> {
        let pattern = CompiledPattern::compile_with_prefix(prefix, &descriptor.pattern)?;
        let name = descriptor
            .route_name
            .clone()
            .unwrap_or_else(|| derive_name(&descriptor.id));
        let actions = ActionMap::build(descriptor);
        let signatures = descriptor
            .actions
            .iter()
            .filter(|a| a.public)
            .map(|a| (a.name.clone(), a.params.clone()))
            .collect();

        Ok(Self {
            name,
            controller: descriptor.id.clone(),
            pattern,
            actions,
            signatures,
        })
    }

    /// The route name, unique within a registry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The controller identifier this route dispatches to.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// The compiled pattern, with the module prefix prepended.
    pub const fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// The HTTP-method → action table.
    pub const fn actions(&self) -> &ActionMap {
        &self.actions
    }

    /// The formal parameters of a public action, in declaration order.
    pub fn signature(&self, action: &str) -> Option<&[ParamSpec]> {
        self.signatures
            .iter()
            .find(|(name, _)| name == action)
            .map(|(_, params)| params.as_slice())
    }
}

/// Derives a route name from a controller identifier.
fn derive_name(controller_id: &str) -> String {
    controller_id
        .strip_suffix("Controller")
        .filter(|s| !s.is_empty())
        .unwrap_or(controller_id)
        .to_lowercase()
}

//! Controller introspection metadata.
//!
//! The routing core never inspects live controller objects. Instead, the
//! module/controller layer extracts each controller's metadata once during
//! configuration and hands it to the registry as plain data: the URL pattern,
//! an optional explicit route name, the declared action methods with their
//! formal parameters, and any explicit HTTP-method → action overrides.

use http::Method;

use super::constraint::ParamValue;

/// How a formal action parameter is satisfied by the argument binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// Bound by name from the matched path parameters, falling back to the
    /// declared default when the path did not bind the name.
    Value {
        /// The default value, if the parameter declares one.
        default: Option<ParamValue>,
    },
    /// A recognized framework object: the ambient HTTP request, injected
    /// regardless of the parameter's name or position.
    Request,
}

/// One formal parameter of an action method, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    /// The declared parameter name.
    pub name: String,
    /// How the binder satisfies the parameter.
    pub kind: ParamKind,
}

impl ParamSpec {
    /// A value parameter with no default: it must be bound from the path.
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Value { default: None },
        }
    }

    /// A value parameter with a default, used when the path omits it.
    pub fn with_default(name: impl Into<String>, default: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Value {
                default: Some(default.into()),
            },
        }
    }

    /// A parameter that receives the ambient HTTP request.
    pub fn request(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Request,
        }
    }
}

/// One declared action method of a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// The method name as declared on the controller.
    pub name: String,
    /// Whether the method is public. Private and protected methods are never
    /// eligible as actions, regardless of any method mapping.
    pub public: bool,
    /// The formal parameters, in declaration order.
    pub params: Vec<ParamSpec>,
}

impl ActionDescriptor {
    /// A public action with no parameters.
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public: true,
            params: Vec::new(),
        }
    }

    /// A non-public method; listed so that mappings naming it can be ignored.
    pub fn private(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public: false,
            params: Vec::new(),
        }
    }

    /// Sets the formal parameters.
    #[must_use]
    pub fn with_params(mut self, params: Vec<ParamSpec>) -> Self {
        self.params = params;
        self
    }
}

/// An explicit HTTP-method → action mapping entry.
///
/// Absence of an entry means the method is unmapped; [`MethodAction::Disabled`]
/// explicitly disables a method even if a default-mapped action of that name
/// exists. The tri-state replaces the boolean-false sentinel some frameworks
/// use for disabling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodAction {
    /// Dispatch the method to the named action.
    Action(String),
    /// The method is explicitly disabled for this controller.
    Disabled,
}

/// Everything the routing core needs to know about one controller, extracted
/// ahead of time by the module layer.
///
/// # Examples
///
/// ```
/// use cadre_http::routing::{ActionDescriptor, ControllerDescriptor, MethodAction, ParamSpec};
/// use http::Method;
///
/// let descriptor = ControllerDescriptor::new("ItemController", "/item/{id:int}")
///     .named("item_detail")
///     .action(ActionDescriptor::public("index").with_params(vec![ParamSpec::value("id")]))
///     .override_method(Method::DELETE, MethodAction::Disabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerDescriptor {
    /// The controller identifier (e.g. the class name).
    pub id: String,
    /// The declared URL pattern string.
    pub pattern: String,
    /// The explicit route name, if the controller declares one.
    pub route_name: Option<String>,
    /// The declared action methods.
    pub actions: Vec<ActionDescriptor>,
    /// Explicit HTTP-method → action overrides, merged over the defaults.
    pub overrides: Vec<(Method, MethodAction)>,
}

impl ControllerDescriptor {
    /// Creates a descriptor for a controller with the given pattern.
    pub fn new(id: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
            route_name: None,
            actions: Vec::new(),
            overrides: Vec::new(),
        }
    }

    /// Sets an explicit route name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }

    /// Declares an action method.
    #[must_use]
    pub fn action(mut self, action: ActionDescriptor) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds an explicit method-mapping override.
    #[must_use]
    pub fn override_method(mut self, method: Method, mapping: MethodAction) -> Self {
        self.overrides.push((method, mapping));
        self
    }
}

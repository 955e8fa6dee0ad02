//! URL generation: the inverse of matching.
//!
//! [`generate_url`] re-expands a named route's compiled pattern with a set of
//! parameter values. Required parameters must be present; optional
//! parameters are emitted while present, and once one is omitted every later
//! one must be omitted too — omission is a trailing truncation, not a sparse
//! hole. Supplied values are validated against their constraints, keeping
//! generation symmetric with matching: a generated URL always matches the
//! route it was generated from.

use cadre_core::{CadreError, CadreResult};

use super::params::ParamMap;
use super::pattern::Segment;
use super::registry::RouteRegistry;

/// Generates a concrete path for the route registered under `name`.
///
/// # Errors
///
/// - [`CadreError::RouteNotFound`] if no route has that name.
/// - [`CadreError::RouteParameterNotFound`] if a required parameter is
///   missing, or an optional parameter is supplied after an omitted one.
/// - [`CadreError::BadRequest`] if a supplied value does not satisfy the
///   parameter's constraint.
///
/// # Examples
///
/// ```
/// use cadre_http::routing::{
///     generate_url, ActionDescriptor, ControllerDescriptor, ParamMap, RouteRegistry,
/// };
///
/// let mut registry = RouteRegistry::new();
/// let descriptor = ControllerDescriptor::new("ItemController", "/item/{id:int}/{slug}?")
///     .named("item_route")
///     .action(ActionDescriptor::public("index"));
/// registry.register_controller(&descriptor, "").unwrap();
///
/// let mut params = ParamMap::new();
/// params.insert("id", 42);
/// assert_eq!(generate_url("item_route", &params, &registry).unwrap(), "/item/42");
///
/// params.insert("slug", "hello");
/// assert_eq!(
///     generate_url("item_route", &params, &registry).unwrap(),
///     "/item/42/hello"
/// );
/// ```
pub fn generate_url(
    name: &str,
    params: &ParamMap,
    registry: &RouteRegistry,
) -> CadreResult<String> {
    let (_, route) = registry
        .get_by_name(name)
        .ok_or_else(|| CadreError::RouteNotFound(format!("no route named '{name}'")))?;

    let mut parts: Vec<String> = Vec::with_capacity(route.pattern().segments().len());
    // First omitted optional parameter; anything supplied after it is an error.
    let mut omitted: Option<&str> = None;

    for segment in route.pattern().segments() {
        match segment {
            Segment::Literal(literal) => parts.push(literal.clone()),
            Segment::Param {
                name: param,
                constraint,
                optional,
            } => match params.get(param) {
                Some(value) => {
                    if let Some(earlier) = omitted {
                        return Err(CadreError::RouteParameterNotFound {
                            route: name.to_string(),
                            parameter: earlier.to_string(),
                        });
                    }
                    let rendered = value.to_string();
                    if !constraint.matches(&rendered) {
                        return Err(CadreError::BadRequest(format!(
                            "value '{rendered}' for parameter '{param}' of route '{name}' \
                             does not satisfy the {constraint} constraint"
                        )));
                    }
                    parts.push(rendered);
                }
                None if *optional => {
                    omitted.get_or_insert(param);
                }
                None => {
                    return Err(CadreError::RouteParameterNotFound {
                        route: name.to_string(),
                        parameter: param.clone(),
                    });
                }
            },
        }
    }

    Ok(format!("/{}", parts.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::controller::{ActionDescriptor, ControllerDescriptor};

    fn registry() -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        let item = ControllerDescriptor::new("ItemController", "/item/{id:int}/{slug}?")
            .named("item_route")
            .action(ActionDescriptor::public("index"));
        let archive = ControllerDescriptor::new("ArchiveController", "/archive/{year:int}/{month:int}?/{day:int}?")
            .named("archive")
            .action(ActionDescriptor::public("index"));
        registry.register_controller(&item, "").unwrap();
        registry.register_controller(&archive, "/blog").unwrap();
        registry
    }

    fn params(entries: &[(&str, &str)]) -> ParamMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_generate_required_only() {
        let mut p = ParamMap::new();
        p.insert("id", 42);
        assert_eq!(
            generate_url("item_route", &p, &registry()).unwrap(),
            "/item/42"
        );
    }

    #[test]
    fn test_generate_with_optional() {
        let mut p = ParamMap::new();
        p.insert("id", 42);
        p.insert("slug", "hello");
        assert_eq!(
            generate_url("item_route", &p, &registry()).unwrap(),
            "/item/42/hello"
        );
    }

    #[test]
    fn test_generate_missing_required_parameter() {
        let result = generate_url("item_route", &ParamMap::new(), &registry());
        match result {
            Err(CadreError::RouteParameterNotFound { route, parameter }) => {
                assert_eq!(route, "item_route");
                assert_eq!(parameter, "id");
            }
            other => panic!("expected RouteParameterNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_unknown_route() {
        let result = generate_url("missing", &ParamMap::new(), &registry());
        assert!(matches!(result, Err(CadreError::RouteNotFound(_))));
    }

    #[test]
    fn test_generate_includes_module_prefix() {
        assert_eq!(
            generate_url("archive", &params(&[("year", "2024")]), &registry()).unwrap(),
            "/blog/archive/2024"
        );
    }

    #[test]
    fn test_generate_optional_truncation() {
        let reg = registry();
        assert_eq!(
            generate_url("archive", &params(&[("year", "2024"), ("month", "6")]), &reg)
                .unwrap(),
            "/blog/archive/2024/6"
        );
        assert_eq!(
            generate_url(
                "archive",
                &params(&[("year", "2024"), ("month", "6"), ("day", "21")]),
                &reg
            )
            .unwrap(),
            "/blog/archive/2024/6/21"
        );
    }

    #[test]
    fn test_generate_sparse_optional_is_rejected() {
        // `day` supplied but `month` omitted: the hole is reported against
        // the omitted earlier parameter.
        let result = generate_url(
            "archive",
            &params(&[("year", "2024"), ("day", "21")]),
            &registry(),
        );
        match result {
            Err(CadreError::RouteParameterNotFound { parameter, .. }) => {
                assert_eq!(parameter, "month");
            }
            other => panic!("expected RouteParameterNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_validates_constraints() {
        let result = generate_url("item_route", &params(&[("id", "abc")]), &registry());
        assert!(matches!(result, Err(CadreError::BadRequest(_))));
    }

    #[test]
    fn test_generate_int_value_for_int_constraint() {
        let mut p = ParamMap::new();
        p.insert("id", 42);
        p.insert("slug", "hello-world_1");
        assert_eq!(
            generate_url("item_route", &p, &registry()).unwrap(),
            "/item/42/hello-world_1"
        );
    }

    #[test]
    fn test_generate_root_route() {
        let mut reg = RouteRegistry::new();
        let home = ControllerDescriptor::new("HomeController", "/")
            .action(ActionDescriptor::public("index"));
        reg.register_controller(&home, "").unwrap();
        assert_eq!(generate_url("home", &ParamMap::new(), &reg).unwrap(), "/");
    }
}

//! URL pattern compilation.
//!
//! A pattern string uses `/`-separated segments; each segment is either a
//! literal token or a `{name}` / `{name:type}` placeholder, optionally
//! suffixed with `?` to mark a trailing parameter optional:
//!
//! ```text
//! /item/{id:int}/{slug}?
//! ```
//!
//! [`CompiledPattern::compile`] parses such a string into an ordered sequence
//! of [`Segment`]s plus a precomputed minimum required depth, used to
//! fast-reject too-short paths before full matching. Compilation is a pure
//! function of the input string.

use cadre_core::{CadreError, CadreResult};

use super::constraint::Constraint;

/// One literal or parameter unit of a URL pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A fixed string that must match exactly (case-sensitive).
    Literal(String),
    /// A named placeholder with a type constraint and an optionality flag.
    Param {
        /// The parameter name, unique within one pattern.
        name: String,
        /// The value-shape restriction on matched segments.
        constraint: Constraint,
        /// Whether the segment may be absent from a matched path. Optional
        /// segments form a contiguous trailing run, enforced at compile time.
        optional: bool,
    },
}

impl Segment {
    /// Returns the parameter name if this is a parameter segment.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Param { name, .. } => Some(name),
            Self::Literal(_) => None,
        }
    }
}

/// A compiled URL pattern: an ordered sequence of segments and the minimum
/// number of path segments a matching path must have.
///
/// Compiling the same pattern string twice yields structurally equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
    min_depth: usize,
}

impl CompiledPattern {
    /// Compiles a pattern string.
    ///
    /// Leading, trailing, and duplicate slashes are normalized away; the
    /// pattern conceptually always begins with `/`.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::Pattern`] for a malformed placeholder, an
    /// unknown type constraint, a duplicate parameter name, or an optional
    /// segment that precedes a required one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadre_http::routing::CompiledPattern;
    ///
    /// let pattern = CompiledPattern::compile("/item/{id:int}/{slug}?").unwrap();
    /// assert_eq!(pattern.min_depth(), 2);
    /// assert_eq!(pattern.max_depth(), 3);
    ///
    /// assert!(CompiledPattern::compile("/item/{id}?/detail").is_err());
    /// ```
    pub fn compile(pattern: &str) -> CadreResult<Self> {
        let mut segments = Vec::new();
        let mut seen_optional = false;

        for raw in pattern.split('/').filter(|s| !s.is_empty()) {
            let segment = parse_segment(raw, pattern)?;

            let optional = matches!(&segment, Segment::Param { optional: true, .. });
            if optional {
                seen_optional = true;
            } else if seen_optional {
                return Err(CadreError::Pattern(format!(
                    "optional segments must be trailing in '{pattern}'"
                )));
            }

            if let Some(name) = segment.param_name() {
                if segments.iter().any(|s: &Segment| s.param_name() == Some(name)) {
                    return Err(CadreError::Pattern(format!(
                        "duplicate parameter name '{name}' in '{pattern}'"
                    )));
                }
            }

            segments.push(segment);
        }

        let min_depth = segments
            .iter()
            .filter(|s| !matches!(s, Segment::Param { optional: true, .. }))
            .count();

        Ok(Self {
            source: pattern.to_string(),
            segments,
            min_depth,
        })
    }

    /// Compiles a pattern with a literal module prefix prepended.
    ///
    /// The prefix is supplied by the module registering the controller and
    /// may not contain placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::Pattern`] if the prefix contains a placeholder
    /// or the combined pattern fails to compile.
    pub fn compile_with_prefix(prefix: &str, pattern: &str) -> CadreResult<Self> {
        if prefix.contains('{') || prefix.contains('}') {
            return Err(CadreError::Pattern(format!(
                "module prefix must be literal, got '{prefix}'"
            )));
        }
        if prefix.split('/').any(|s| s.ends_with('?')) {
            return Err(CadreError::Pattern(format!(
                "module prefix must be literal, got '{prefix}'"
            )));
        }
        Self::compile(&format!(
            "{}/{}",
            prefix.trim_end_matches('/'),
            pattern.trim_start_matches('/')
        ))
    }

    /// Returns the original (prefix-joined) pattern string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the ordered segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The minimum number of path segments a matching path must have: the
    /// count of non-optional segments.
    pub const fn min_depth(&self) -> usize {
        self.min_depth
    }

    /// The maximum number of path segments a matching path may have.
    pub fn max_depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the pattern declares a parameter named `name`.
    pub fn has_param(&self, name: &str) -> bool {
        self.segments.iter().any(|s| s.param_name() == Some(name))
    }
}

/// Parses one raw (slash-delimited, non-empty) token of a pattern.
fn parse_segment(raw: &str, pattern: &str) -> CadreResult<Segment> {
    let (body, optional) = raw
        .strip_suffix('?')
        .map_or((raw, false), |stripped| (stripped, true));

    if let Some(inner) = body.strip_prefix('{') {
        let inner = inner.strip_suffix('}').ok_or_else(|| {
            CadreError::Pattern(format!("unclosed placeholder '{raw}' in '{pattern}'"))
        })?;
        if inner.contains('{') || inner.contains('}') {
            return Err(CadreError::Pattern(format!(
                "malformed placeholder '{raw}' in '{pattern}'"
            )));
        }

        let (name, constraint) = match inner.split_once(':') {
            Some((name, type_name)) => (name, Constraint::parse(type_name)?),
            None => (inner, Constraint::Str),
        };

        if name.is_empty()
            || !name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return Err(CadreError::Pattern(format!(
                "invalid parameter name '{name}' in '{pattern}'"
            )));
        }

        return Ok(Segment::Param {
            name: name.to_string(),
            constraint,
            optional,
        });
    }

    if optional {
        return Err(CadreError::Pattern(format!(
            "only parameter segments may be optional, got '{raw}' in '{pattern}'"
        )));
    }
    if body.contains('{') || body.contains('}') {
        return Err(CadreError::Pattern(format!(
            "malformed placeholder '{raw}' in '{pattern}'"
        )));
    }

    Ok(Segment::Literal(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_literals_only() {
        let p = CompiledPattern::compile("/articles/archive").unwrap();
        assert_eq!(
            p.segments(),
            &[
                Segment::Literal("articles".into()),
                Segment::Literal("archive".into()),
            ]
        );
        assert_eq!(p.min_depth(), 2);
        assert_eq!(p.max_depth(), 2);
    }

    #[test]
    fn test_compile_default_constraint_is_string() {
        let p = CompiledPattern::compile("/users/{username}").unwrap();
        assert_eq!(
            p.segments()[1],
            Segment::Param {
                name: "username".into(),
                constraint: Constraint::Str,
                optional: false,
            }
        );
    }

    #[test]
    fn test_compile_typed_and_optional() {
        let p = CompiledPattern::compile("/item/{id:int}/{slug}?").unwrap();
        assert_eq!(
            p.segments(),
            &[
                Segment::Literal("item".into()),
                Segment::Param {
                    name: "id".into(),
                    constraint: Constraint::Int,
                    optional: false,
                },
                Segment::Param {
                    name: "slug".into(),
                    constraint: Constraint::Str,
                    optional: true,
                },
            ]
        );
        assert_eq!(p.min_depth(), 2);
        assert_eq!(p.max_depth(), 3);
    }

    #[test]
    fn test_compile_normalizes_slashes() {
        let a = CompiledPattern::compile("item/{id:int}").unwrap();
        let b = CompiledPattern::compile("//item///{id:int}/").unwrap();
        assert_eq!(a.segments(), b.segments());
        assert_eq!(a.min_depth(), b.min_depth());
    }

    #[test]
    fn test_compile_root_pattern() {
        let p = CompiledPattern::compile("/").unwrap();
        assert!(p.segments().is_empty());
        assert_eq!(p.min_depth(), 0);
    }

    #[test]
    fn test_compile_idempotent() {
        let a = CompiledPattern::compile("/item/{id:int}/{slug}?").unwrap();
        let b = CompiledPattern::compile("/item/{id:int}/{slug}?").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_min_depth_counts_non_optional_segments() {
        let p = CompiledPattern::compile("/a/{b}/{c}?/{d:int}?").unwrap();
        assert_eq!(p.min_depth(), 2);
        assert_eq!(p.max_depth(), 4);
    }

    #[test]
    fn test_optional_before_required_parameter_fails() {
        let result = CompiledPattern::compile("/item/{slug}?/{id:int}");
        assert!(matches!(result, Err(CadreError::Pattern(_))));
    }

    #[test]
    fn test_optional_before_literal_fails() {
        let result = CompiledPattern::compile("/item/{slug}?/detail");
        assert!(matches!(result, Err(CadreError::Pattern(_))));
    }

    #[test]
    fn test_duplicate_parameter_name_fails() {
        let result = CompiledPattern::compile("/a/{id}/{id:int}");
        assert!(matches!(result, Err(CadreError::Pattern(_))));
    }

    #[test]
    fn test_unknown_constraint_fails() {
        let result = CompiledPattern::compile("/item/{id:uuid}");
        assert!(matches!(result, Err(CadreError::Pattern(_))));
    }

    #[test]
    fn test_unclosed_placeholder_fails() {
        assert!(CompiledPattern::compile("/item/{id").is_err());
        assert!(CompiledPattern::compile("/item/{id:int").is_err());
        assert!(CompiledPattern::compile("/item/id}").is_err());
    }

    #[test]
    fn test_invalid_parameter_name_fails() {
        assert!(CompiledPattern::compile("/item/{}").is_err());
        assert!(CompiledPattern::compile("/item/{my id}").is_err());
    }

    #[test]
    fn test_optional_literal_fails() {
        let result = CompiledPattern::compile("/item/detail?");
        assert!(matches!(result, Err(CadreError::Pattern(_))));
    }

    #[test]
    fn test_compile_with_prefix() {
        let p = CompiledPattern::compile_with_prefix("/shop", "/item/{id:int}").unwrap();
        assert_eq!(p.segments()[0], Segment::Literal("shop".into()));
        assert_eq!(p.min_depth(), 3);
    }

    #[test]
    fn test_compile_with_empty_prefix() {
        let p = CompiledPattern::compile_with_prefix("", "/item/{id:int}").unwrap();
        assert_eq!(p.min_depth(), 2);
    }

    #[test]
    fn test_prefix_with_placeholder_fails() {
        let result = CompiledPattern::compile_with_prefix("/{module}", "/item");
        assert!(matches!(result, Err(CadreError::Pattern(_))));
    }

    #[test]
    fn test_has_param() {
        let p = CompiledPattern::compile("/item/{id:int}/{slug}?").unwrap();
        assert!(p.has_param("id"));
        assert!(p.has_param("slug"));
        assert!(!p.has_param("item"));
    }
}

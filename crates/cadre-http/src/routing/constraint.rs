//! Typed constraints for URL pattern parameters.
//!
//! A [`Constraint`] restricts the shape of the value a parameter segment may
//! match, and decides how the raw string is coerced into a [`ParamValue`]
//! during binding.
//!
//! # Built-in constraints
//!
//! | Name     | Matches                                  | Coerced to |
//! |----------|------------------------------------------|------------|
//! | `string` | one or more non-`/` characters (default) | `String`   |
//! | `int`    | one or more ASCII digits                 | `i64`      |
//! | `slug`   | ASCII letters, digits, `-`, `_`          | `String`   |

use std::fmt;

use cadre_core::{CadreError, CadreResult};

/// A typed value extracted from a matched path segment, or supplied by a
/// caller when generating a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// An integer value, produced by the `int` constraint.
    Int(i64),
    /// A string value, produced by the `string` and `slug` constraints.
    Str(String),
}

impl ParamValue {
    /// Returns the integer value, if this is an [`ParamValue::Int`].
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Str(_) => None,
        }
    }

    /// Returns the string value, if this is a [`ParamValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// The value-shape restriction on a parameter segment.
///
/// Declared inline in a pattern as `{name}` (defaults to [`Constraint::Str`])
/// or `{name:type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Matches any run of non-separator characters. The default.
    Str,
    /// Matches ASCII digits only; the value is coerced to an integer.
    Int,
    /// Matches ASCII letters, digits, hyphens, and underscores.
    Slug,
}

impl Constraint {
    /// Parses a type-constraint name as it appears in a pattern placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::Pattern`] for an unknown type constraint.
    pub fn parse(name: &str) -> CadreResult<Self> {
        match name {
            "string" | "str" => Ok(Self::Str),
            "int" => Ok(Self::Int),
            "slug" => Ok(Self::Slug),
            _ => Err(CadreError::Pattern(format!(
                "unknown type constraint '{name}'"
            ))),
        }
    }

    /// Returns whether the given path segment satisfies this constraint.
    ///
    /// Empty segments never match; path normalization removes them before
    /// matching, so an empty input here is a generation-time caller error.
    pub fn matches(self, segment: &str) -> bool {
        if segment.is_empty() {
            return false;
        }
        match self {
            Self::Str => !segment.contains('/'),
            Self::Int => segment.bytes().all(|b| b.is_ascii_digit()),
            Self::Slug => segment
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'),
        }
    }

    /// Coerces a matched segment into its typed [`ParamValue`].
    ///
    /// # Errors
    ///
    /// Returns [`CadreError::BadRequest`] if an `int` segment does not fit in
    /// an `i64`. All-digit segments longer than 19 characters can overflow
    /// even though they satisfy [`Constraint::matches`].
    pub fn coerce(self, segment: &str) -> CadreResult<ParamValue> {
        match self {
            Self::Int => segment.parse::<i64>().map(ParamValue::Int).map_err(|_| {
                CadreError::BadRequest(format!("integer value out of range: {segment}"))
            }),
            Self::Str | Self::Slug => Ok(ParamValue::Str(segment.to_string())),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Str => "string",
            Self::Int => "int",
            Self::Slug => "slug",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_constraints() {
        assert_eq!(Constraint::parse("string").unwrap(), Constraint::Str);
        assert_eq!(Constraint::parse("str").unwrap(), Constraint::Str);
        assert_eq!(Constraint::parse("int").unwrap(), Constraint::Int);
        assert_eq!(Constraint::parse("slug").unwrap(), Constraint::Slug);
    }

    #[test]
    fn test_parse_unknown_constraint() {
        let result = Constraint::parse("uuid");
        assert!(matches!(result, Err(CadreError::Pattern(_))));
    }

    #[test]
    fn test_str_matches() {
        assert!(Constraint::Str.matches("hello"));
        assert!(Constraint::Str.matches("hello-world.txt"));
        assert!(!Constraint::Str.matches(""));
        assert!(!Constraint::Str.matches("a/b"));
    }

    #[test]
    fn test_int_matches() {
        assert!(Constraint::Int.matches("42"));
        assert!(Constraint::Int.matches("0"));
        assert!(!Constraint::Int.matches("abc"));
        assert!(!Constraint::Int.matches("4a2"));
        assert!(!Constraint::Int.matches("-5"));
        assert!(!Constraint::Int.matches(""));
    }

    #[test]
    fn test_slug_matches() {
        assert!(Constraint::Slug.matches("my-first-post"));
        assert!(Constraint::Slug.matches("post_1"));
        assert!(!Constraint::Slug.matches("no spaces"));
        assert!(!Constraint::Slug.matches("caf\u{e9}"));
        assert!(!Constraint::Slug.matches(""));
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(
            Constraint::Int.coerce("42").unwrap(),
            ParamValue::Int(42)
        );
        assert_eq!(
            Constraint::Int.coerce("9999999999").unwrap(),
            ParamValue::Int(9_999_999_999)
        );
    }

    #[test]
    fn test_coerce_int_overflow() {
        // 25 digits: satisfies the constraint but overflows i64.
        let result = Constraint::Int.coerce("9999999999999999999999999");
        assert!(matches!(result, Err(CadreError::BadRequest(_))));
    }

    #[test]
    fn test_coerce_str_and_slug() {
        assert_eq!(
            Constraint::Str.coerce("hello").unwrap(),
            ParamValue::Str("hello".to_string())
        );
        assert_eq!(
            Constraint::Slug.coerce("my-slug").unwrap(),
            ParamValue::Str("my-slug".to_string())
        );
    }

    #[test]
    fn test_param_value_display() {
        assert_eq!(ParamValue::Int(42).to_string(), "42");
        assert_eq!(ParamValue::Str("hello".into()).to_string(), "hello");
    }

    #[test]
    fn test_param_value_accessors() {
        assert_eq!(ParamValue::Int(7).as_int(), Some(7));
        assert_eq!(ParamValue::Int(7).as_str(), None);
        assert_eq!(ParamValue::Str("x".into()).as_str(), Some("x"));
        assert_eq!(ParamValue::Str("x".into()).as_int(), None);
    }

    #[test]
    fn test_constraint_display() {
        assert_eq!(Constraint::Str.to_string(), "string");
        assert_eq!(Constraint::Int.to_string(), "int");
        assert_eq!(Constraint::Slug.to_string(), "slug");
    }
}

//! Error types for validation failures
//!
//! Two layers:
//!
//! - [`ValidationError`] is what a single rule returns: a [`MessageKey`] plus
//!   the parameters its message template needs. It never contains localized
//!   text.
//! - [`ParseError`] is what `Field::parse` returns: one or more [`Issue`]s,
//!   each carrying the resolved, interpolated message for the locale active
//!   at the time of the call.
//!
//! [`ConfigError`] covers construction-time problems (bad regex, unparseable
//! bounds), reported once when a field is built.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::MessageKey;

// ============================================================================
// PARAM VALUE
// ============================================================================

/// A value substituted into a `${name}` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(i64),
    Number(f64),
    /// Rendered joined with `", "`.
    List(Vec<String>),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::Integer(n) => write!(f, "{n}"),
            ParamValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            ParamValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        ParamValue::Integer(value as i64)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        ParamValue::List(value.to_vec())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(ToString::to_string).collect())
    }
}

/// Ordered `(name, value)` pairs; rules rarely need more than three.
pub type Params = SmallVec<[(Cow<'static, str>, ParamValue); 3]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single rule failure.
///
/// # Examples
///
/// ```
/// use formosa_validator::foundation::{MessageKey, ValidationError};
///
/// let error = ValidationError::new(MessageKey::MinLength)
///     .with_param("min", 5usize)
///     .with_param("actual", 3usize);
///
/// assert_eq!(error.key, MessageKey::MinLength);
/// assert_eq!(error.param("min").map(ToString::to_string).as_deref(), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Why the rule failed.
    pub key: MessageKey,

    /// Template parameters, in insertion order.
    pub params: Params,
}

impl ValidationError {
    /// Creates an error with no parameters.
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            params: SmallVec::new(),
        }
    }

    /// Adds a template parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Looks up a parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v)
    }

    /// Creates a `required` error.
    pub fn required() -> Self {
        Self::new(MessageKey::Required)
    }

    /// Creates an `invalid` error.
    pub fn invalid() -> Self {
        Self::new(MessageKey::Invalid)
    }

    /// Creates a `minLength` error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(MessageKey::MinLength)
            .with_param("min", min)
            .with_param("actual", actual)
    }

    /// Creates a `maxLength` error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(MessageKey::MaxLength)
            .with_param("max", max)
            .with_param("actual", actual)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)?;
        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// PARSE ERROR
// ============================================================================

/// One reported problem with a parsed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Symbolic reason.
    pub code: MessageKey,
    /// Resolved, interpolated, locale-correct text.
    pub message: String,
    /// Field path configured on the validator (empty when unset).
    pub path: Vec<String>,
    /// Parameters the message was interpolated from.
    pub params: Params,
}

/// The error returned by `Field::parse`.
///
/// First-failure evaluation means `issues` normally holds exactly one entry;
/// `issues[0]` is always the failure that stopped the pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", first_message(.issues))]
pub struct ParseError {
    pub issues: Vec<Issue>,
}

fn first_message(issues: &[Issue]) -> &str {
    issues.first().map_or("validation failed", |i| i.message.as_str())
}

impl ParseError {
    /// Wraps a single issue.
    pub fn single(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// The message of the first issue.
    #[must_use]
    pub fn message(&self) -> &str {
        first_message(&self.issues)
    }

    /// The code of the first issue.
    #[must_use]
    pub fn code(&self) -> Option<MessageKey> {
        self.issues.first().map(|i| i.code)
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// A field could not be built from its options.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid regex for `{option}`: {source}")]
    Regex {
        option: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("invalid `{option}` value {value:?}")]
    Bound { option: &'static str, value: String },

    #[error("unknown time zone {0:?}")]
    TimeZone(String),

    #[error("`{option}` must not be zero")]
    Zero { option: &'static str },
}

// ============================================================================
// TESTS
// ============================================================================

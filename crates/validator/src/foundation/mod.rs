//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Keys**: [`MessageKey`], the symbolic failure reasons
//! - **Errors**: [`ValidationError`] (rule level), [`ParseError`] (field
//!   level, localized), [`ConfigError`] (construction time)
//!
//! Rules never format user-facing text. They return a key and parameters;
//! the pipeline turns that into a message for whichever locale is active
//! when `parse` runs.

pub mod error;
pub mod key;
pub mod traits;

pub use error::{ConfigError, Issue, ParamValue, Params, ParseError, ValidationError};
pub use key::{MessageKey, UnknownMessageKey};
pub use traits::{Validate, ValidateExt};

/// A rule-level result.
pub type ValidationResult<T> = Result<T, ValidationError>;

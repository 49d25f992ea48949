//! Core traits for the rule system
//!
//! A rule is anything implementing [`Validate`]: a pure check over a borrowed
//! value that either passes or names the [`MessageKey`](crate::foundation::MessageKey)
//! it failed with. Field kinds assemble their rules into an ordered
//! [`Rules`](crate::combinators::Rules) list once, at construction time.

use crate::combinators::{And, Rules};
use crate::foundation::ValidationError;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The trait every rule implements.
///
/// # Examples
///
/// ```
/// use formosa_validator::foundation::{MessageKey, Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new(MessageKey::Invalid))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a b").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Checks the input, returning the failure reason on rejection.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every rule.
pub trait ValidateExt: Validate + Sized {
    /// Runs `self`, then `other`; the first failure wins.
    ///
    /// ```
    /// use formosa_validator::foundation::{Validate, ValidateExt};
    /// use formosa_validator::rules::{max_length, min_length};
    ///
    /// let rule = min_length(3).and(max_length(5));
    /// assert!(rule.validate("abcd").is_ok());
    /// assert!(rule.validate("ab").is_err());
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Starts an ordered rule list with `self` as its first entry.
    fn into_rules(self) -> Rules<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Rules::new().push(self)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::MessageKey;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails(MessageKey);

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new(self.0))
        }
    }

    #[test]
    fn boxed_rule_delegates() {
        let rule: Box<dyn Validate<Input = str>> = Box::new(AlwaysFails(MessageKey::Min));
        assert_eq!(rule.validate("x").unwrap_err().key, MessageKey::Min);
    }

    #[test]
    fn and_reports_first_failure() {
        let rule = AlwaysFails(MessageKey::Min).and(AlwaysFails(MessageKey::Max));
        assert_eq!(rule.validate("x").unwrap_err().key, MessageKey::Min);
        assert!(AlwaysValid.and(AlwaysValid).validate("x").is_ok());
    }
}

//! Closure-backed rules.

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

/// A rule defined by a closure.
pub struct FnRule<T: ?Sized, F> {
    check: F,
    _input: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> fmt::Debug for FnRule<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}

impl<T, F> Validate for FnRule<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), ValidationError>,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        (self.check)(input)
    }
}

/// Wraps a closure as a rule.
///
/// ```
/// use formosa_validator::combinators::rule_fn;
/// use formosa_validator::foundation::{MessageKey, Validate, ValidationError};
///
/// let even = rule_fn(|n: &i64| {
///     if n % 2 == 0 { Ok(()) } else { Err(ValidationError::new(MessageKey::Invalid)) }
/// });
/// assert!(even.validate(&4).is_ok());
/// assert!(even.validate(&3).is_err());
/// ```
pub fn rule_fn<T, F>(check: F) -> FnRule<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), ValidationError>,
{
    FnRule {
        check,
        _input: PhantomData,
    }
}

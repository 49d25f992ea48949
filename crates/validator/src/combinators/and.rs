//! Sequential conjunction of two rules.
//!
//! The left rule runs first; the right rule only runs when the left one
//! passes, so the reported error is always the first failure.

use crate::foundation::{Validate, ValidationError};

/// Combines two rules with logical AND.
///
/// # Examples
///
/// ```
/// use formosa_validator::combinators::And;
/// use formosa_validator::foundation::{MessageKey, Validate};
/// use formosa_validator::rules::{max_length, min_length};
///
/// let rule = And::new(min_length(5), max_length(10));
/// assert!(rule.validate("hello").is_ok());
/// assert_eq!(rule.validate("hi").unwrap_err().key, MessageKey::MinLength);
/// assert_eq!(rule.validate("hello world!").unwrap_err().key, MessageKey::MaxLength);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::MessageKey;
    use crate::rules::{ends_with, starts_with};

    #[test]
    fn right_side_never_runs_after_left_failure() {
        let rule = and(starts_with(["a"]), ends_with(["z"]));
        assert_eq!(
            rule.validate("bbb").unwrap_err().key,
            MessageKey::StartsWith
        );
        assert_eq!(rule.validate("abc").unwrap_err().key, MessageKey::EndsWith);
        assert!(rule.validate("abz").is_ok());
    }
}

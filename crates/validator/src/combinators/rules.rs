//! Ordered rule lists with first-failure semantics.
//!
//! [`Rules`] is the constraint evaluator: a field kind decides at
//! construction time which rules apply and in what order, and every `parse`
//! walks that fixed list, stopping at the first failure. Failures are never
//! aggregated.

use std::fmt;

use crate::foundation::{Validate, ValidationError};

type BoxedRule<T> = Box<dyn Validate<Input = T> + Send + Sync>;

/// An ordered list of boxed rules over the same input type.
///
/// # Examples
///
/// ```
/// use formosa_validator::combinators::Rules;
/// use formosa_validator::foundation::{MessageKey, Validate};
/// use formosa_validator::rules::{includes, max_length, min_length};
///
/// let rules = Rules::new()
///     .push(min_length(3))
///     .push(max_length(8))
///     .push(includes(["@"]));
///
/// assert!(rules.validate("a@bc").is_ok());
/// // Both length and content fail; only the first registered rule reports.
/// assert_eq!(rules.validate("ab").unwrap_err().key, MessageKey::MinLength);
/// ```
pub struct Rules<T: ?Sized> {
    rules: Vec<BoxedRule<T>>,
}

impl<T: ?Sized> Rules<T> {
    /// Creates an empty list; an empty list accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn push<V>(mut self, rule: V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a rule only when it is configured.
    #[must_use = "builder methods must be chained or built"]
    pub fn push_opt<V>(self, rule: Option<V>) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        match rule {
            Some(rule) => self.push(rule),
            None => self,
        }
    }

    /// Appends a rule when `condition` holds.
    #[must_use = "builder methods must be chained or built"]
    pub fn push_if<V>(self, condition: bool, rule: impl FnOnce() -> V) -> Self
    where
        V: Validate<Input = T> + Send + Sync + 'static,
    {
        if condition { self.push(rule()) } else { self }
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<T: ?Sized> Default for Rules<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Rules<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules").field("len", &self.rules.len()).finish()
    }
}

impl<T: ?Sized> Validate for Rules<T> {
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        self.rules.iter().try_for_each(|rule| rule.validate(input))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::combinators::rule_fn;
    use crate::foundation::MessageKey;

    #[test]
    fn empty_list_accepts() {
        let rules: Rules<str> = Rules::new();
        assert!(rules.is_empty());
        assert!(rules.validate("anything").is_ok());
    }

    #[test]
    fn later_rules_do_not_run_after_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let rules = Rules::<str>::new()
            .push(rule_fn(|_: &str| Err(ValidationError::new(MessageKey::Min))))
            .push(rule_fn(move |_: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }));

        assert_eq!(rules.validate("x").unwrap_err().key, MessageKey::Min);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn push_opt_and_push_if() {
        let rules = Rules::<str>::new()
            .push_opt(None::<crate::rules::MinLength>)
            .push_if(false, || crate::rules::min_length(10))
            .push_if(true, || crate::rules::max_length(2));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.validate("abc").unwrap_err().key, MessageKey::MaxLength);
    }
}

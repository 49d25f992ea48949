//! String content rules
//!
//! Every rule here accepts a single needle or a list of them:
//! `starts_with(["https://", "http://"])` passes if *any* prefix matches,
//! `includes([...])` requires *all* needles, `excludes([...])` forbids every
//! needle.

use crate::foundation::{MessageKey, ValidationError};

fn collect(items: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    items.into_iter().map(Into::into).collect()
}

// ============================================================================
// AFFIXES
// ============================================================================

crate::validator! {
    /// Passes when the input starts with any of `prefixes`.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefixes: Vec<String> } for str;
    rule(self, input) { self.prefixes.iter().any(|p| input.starts_with(p.as_str())) }
    error(self, input) {
        ValidationError::new(MessageKey::StartsWith).with_param("prefix", self.prefixes.as_slice())
    }
    new(prefixes: impl IntoIterator<Item = impl Into<String>>) { Self { prefixes: collect(prefixes) } }
    fn starts_with(prefixes: impl IntoIterator<Item = impl Into<String>>);
}

crate::validator! {
    /// Passes when the input ends with any of `suffixes`.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffixes: Vec<String> } for str;
    rule(self, input) { self.suffixes.iter().any(|s| input.ends_with(s.as_str())) }
    error(self, input) {
        ValidationError::new(MessageKey::EndsWith).with_param("suffix", self.suffixes.as_slice())
    }
    new(suffixes: impl IntoIterator<Item = impl Into<String>>) { Self { suffixes: collect(suffixes) } }
    fn ends_with(suffixes: impl IntoIterator<Item = impl Into<String>>);
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Every needle must occur in the input; the first missing one is reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Includes {
    pub needles: Vec<String>,
}

impl Includes {
    #[must_use]
    pub fn new(needles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            needles: collect(needles),
        }
    }
}

impl crate::foundation::Validate for Includes {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.needles.iter().find(|n| !input.contains(n.as_str())) {
            Some(missing) => {
                Err(ValidationError::new(MessageKey::Includes).with_param("include", missing))
            }
            None => Ok(()),
        }
    }
}

/// Creates an [`Includes`] rule.
#[must_use]
pub fn includes(needles: impl IntoIterator<Item = impl Into<String>>) -> Includes {
    Includes::new(needles)
}

/// No needle may occur in the input; the first one found is reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Excludes {
    pub needles: Vec<String>,
}

impl Excludes {
    #[must_use]
    pub fn new(needles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            needles: collect(needles),
        }
    }
}

impl crate::foundation::Validate for Excludes {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match self.needles.iter().find(|n| input.contains(n.as_str())) {
            Some(found) => {
                Err(ValidationError::new(MessageKey::Excludes).with_param("exclude", found))
            }
            None => Ok(()),
        }
    }
}

/// Creates an [`Excludes`] rule.
#[must_use]
pub fn excludes(needles: impl IntoIterator<Item = impl Into<String>>) -> Excludes {
    Excludes::new(needles)
}

// ============================================================================
// ONE OF
// ============================================================================

/// Exact membership in a fixed set of strings.
///
/// Reports [`MessageKey::Invalid`] unless another key is chosen with
/// [`OneOf::with_key`]; the allowed values are passed as `values`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OneOf {
    pub allowed: Vec<String>,
    pub key: MessageKey,
}

impl OneOf {
    #[must_use]
    pub fn new(allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed: collect(allowed),
            key: MessageKey::Invalid,
        }
    }

    /// Reports `key` on rejection.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_key(mut self, key: MessageKey) -> Self {
        self.key = key;
        self
    }
}

impl crate::foundation::Validate for OneOf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.allowed.iter().any(|a| a == input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.key).with_param("values", self.allowed.as_slice()))
        }
    }
}

/// Creates a [`OneOf`] rule.
#[must_use]
pub fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>) -> OneOf {
    OneOf::new(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn affixes_match_any() {
        let rule = starts_with(["http://", "https://"]);
        assert!(rule.validate("https://a").is_ok());
        assert!(rule.validate("ftp://a").is_err());
        assert!(ends_with([".tw"]).validate("gov.tw").is_ok());
    }

    #[test]
    fn includes_reports_first_missing() {
        let err = includes(["a", "b", "c"]).validate("a-c").unwrap_err();
        assert_eq!(err.key, MessageKey::Includes);
        assert_eq!(err.param("include").map(ToString::to_string).as_deref(), Some("b"));
    }

    #[test]
    fn excludes_reports_first_found() {
        let err = excludes(["x", "y"]).validate("yes").unwrap_err();
        assert_eq!(err.param("exclude").map(ToString::to_string).as_deref(), Some("y"));
        assert!(excludes(["x"]).validate("abc").is_ok());
    }

    #[test]
    fn one_of_uses_custom_key() {
        let rule = one_of(["004", "700"]).with_key(MessageKey::InvalidBankCode);
        assert!(rule.validate("700").is_ok());
        let err = rule.validate("999").unwrap_err();
        assert_eq!(err.key, MessageKey::InvalidBankCode);
        assert_eq!(err.param("values").map(ToString::to_string).as_deref(), Some("004, 700"));
    }
}

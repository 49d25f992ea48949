//! Regular-expression rule.

use regex::Regex;

use crate::foundation::{ConfigError, MessageKey, Validate, ValidationError};

/// Passes when the input matches `pattern`.
///
/// Failures report `key` (default [`MessageKey::Invalid`]) with the pattern
/// source as the `pattern` parameter.
#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pub pattern: Regex,
    pub key: MessageKey,
}

impl MatchesRegex {
    /// Compiles `pattern`; `option` names the configuration field in the
    /// resulting [`ConfigError`].
    pub fn new(option: &'static str, pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|source| ConfigError::Regex { option, source })?;
        Ok(Self::from_regex(pattern))
    }

    /// Wraps an already compiled regex.
    #[must_use]
    pub fn from_regex(pattern: Regex) -> Self {
        Self {
            pattern,
            key: MessageKey::Invalid,
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_key(mut self, key: MessageKey) -> Self {
        self.key = key;
        self
    }
}

impl Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.key).with_param("pattern", self.pattern.as_str()))
        }
    }
}

/// Compiles `pattern` into a [`MatchesRegex`] rule.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, ConfigError> {
    MatchesRegex::new("regex", pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_and_reports_pattern() {
        let rule = matches_regex(r"^[a-z]+$").unwrap();
        assert!(rule.validate("abc").is_ok());
        let err = rule.validate("ABC").unwrap_err();
        assert_eq!(err.key, MessageKey::Invalid);
        assert_eq!(
            err.param("pattern").map(ToString::to_string).as_deref(),
            Some("^[a-z]+$")
        );
    }

    #[test]
    fn bad_pattern_is_config_error() {
        let err = MatchesRegex::new("regex", "(").unwrap_err();
        assert!(matches!(err, ConfigError::Regex { option: "regex", .. }));
    }
}

//! String length rules
//!
//! Length is measured in Unicode scalar values by default, so `"臺北"` has
//! length 2. Use the `bytes` constructors to count UTF-8 bytes instead.

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// UTF-8 bytes.
    Bytes,
    /// Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    #[inline]
    pub(crate) fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Rejects strings shorter than `min`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, self.mode.measure(input)) }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// A minimum that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Rejects strings longer than `max`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    rule(self, input) { self.mode.measure(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, self.mode.measure(input)) }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// A maximum that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::foundation::{MessageKey, Validate};

    #[rstest]
    #[case("abc", true)]
    #[case("ab", false)]
    #[case("臺北市", true)]
    #[case("臺北", false)]
    fn min_counts_chars(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(min_length(3).validate(input).is_ok(), ok);
    }

    #[test]
    fn bytes_mode_counts_utf8() {
        assert!(MinLength::bytes(6).validate("臺北").is_ok());
        assert!(MaxLength::bytes(5).validate("臺北").is_err());
    }

    #[test]
    fn error_carries_bound_and_actual() {
        let err = max_length(2).validate("abcd").unwrap_err();
        assert_eq!(err.key, MessageKey::MaxLength);
        assert_eq!(err.param("max").map(ToString::to_string).as_deref(), Some("2"));
        assert_eq!(err.param("actual").map(ToString::to_string).as_deref(), Some("4"));
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(min_length(2).validate("ab").is_ok());
        assert!(max_length(2).validate("ab").is_ok());
    }
}

//! Numeric range rules
//!
//! All bounds are inclusive. Values are `f64`; integer fields convert
//! before checking.

use crate::foundation::{MessageKey, Validate, ValidationError};

// ============================================================================
// BOUNDS
// ============================================================================

crate::validator! {
    /// Rejects values below `min`.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 } for f64;
    rule(self, input) { *input >= self.min }
    error(self, input) { ValidationError::new(MessageKey::Min).with_param("min", self.min) }
    fn min(min: f64);
}

crate::validator! {
    /// Rejects values above `max`.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 } for f64;
    rule(self, input) { *input <= self.max }
    error(self, input) { ValidationError::new(MessageKey::Max).with_param("max", self.max) }
    fn max(max: f64);
}

/// Both bounds at once; reports `min` or `max` depending on the side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InRange {
    pub min: f64,
    pub max: f64,
}

impl Validate for InRange {
    type Input = f64;

    fn validate(&self, input: &f64) -> Result<(), ValidationError> {
        Min { min: self.min }.validate(input)?;
        Max { max: self.max }.validate(input)
    }
}

/// Creates an [`InRange`] rule.
#[must_use]
pub const fn in_range(min: f64, max: f64) -> InRange {
    InRange { min, max }
}

// ============================================================================
// DIVISIBILITY
// ============================================================================

/// Passes when the value is an integral multiple of `step`.
///
/// Tolerates floating-point noise, so `0.3` is a multiple of `0.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultipleOf {
    pub step: f64,
}

impl MultipleOf {
    pub(crate) fn holds(self, value: f64) -> bool {
        if self.step == 0.0 {
            return false;
        }
        let ratio = value / self.step;
        (ratio - ratio.round()).abs() <= 1e-9 * ratio.abs().max(1.0)
    }
}

impl Validate for MultipleOf {
    type Input = f64;

    fn validate(&self, input: &f64) -> Result<(), ValidationError> {
        if self.holds(*input) {
            Ok(())
        } else {
            Err(ValidationError::new(MessageKey::MultipleOf).with_param("multipleOf", self.step))
        }
    }
}

/// Creates a [`MultipleOf`] rule.
#[must_use]
pub const fn multiple_of(step: f64) -> MultipleOf {
    MultipleOf { step }
}

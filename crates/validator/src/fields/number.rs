//! Numbers.
//!
//! Rule order: `finite` → `integer`/`float` → sign → `min` → `max` →
//! `multipleOf` → `precision`. The type and finiteness checks sit in the
//! rule list rather than in coercion so defaults are held to them too.

use serde::{Deserialize, Serialize};

use super::check;
use crate::combinators::{Rules, rule_fn};
use crate::foundation::{ConfigError, MessageKey, Validate, ValidationError};
use crate::pipeline::{Common, Field, FieldKind, Prepared, coerce, impl_common_options};
use crate::rules::{max, min, multiple_of};

/// Which numbers a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberType {
    /// No fractional part.
    Integer,
    /// A fractional part is required; `42` is not a float.
    Float,
    #[default]
    Both,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberOptions {
    #[serde(flatten)]
    pub common: Common<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    #[serde(rename = "type")]
    pub number_type: NumberType,
    pub positive: bool,
    pub negative: bool,
    pub non_negative: bool,
    pub non_positive: bool,
    pub multiple_of: Option<f64>,
    /// Maximum number of decimal places.
    pub precision: Option<u32>,
    /// Reject `NaN` and infinities.
    pub finite: bool,
    /// Strip grouping commas before parsing strings.
    pub parse_commas: bool,
    /// Accept native numbers only.
    pub strict: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            min: None,
            max: None,
            number_type: NumberType::Both,
            positive: false,
            negative: false,
            non_negative: false,
            non_positive: false,
            multiple_of: None,
            precision: None,
            finite: true,
            parse_commas: false,
            strict: false,
        }
    }
}

impl NumberOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn number_type(mut self, number_type: NumberType) -> Self {
        self.number_type = number_type;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn non_positive(mut self) -> Self {
        self.non_positive = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn multiple_of(mut self, step: f64) -> Self {
        self.multiple_of = Some(step);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn precision(mut self, places: u32) -> Self {
        self.precision = Some(places);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn finite(mut self, finite: bool) -> Self {
        self.finite = finite;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn parse_commas(mut self, parse_commas: bool) -> Self {
        self.parse_commas = parse_commas;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl_common_options!(NumberOptions => f64);

/// Decimal places in the shortest representation of `n`.
fn decimal_places(n: f64) -> usize {
    let repr = n.to_string();
    repr.split_once('.').map_or(0, |(_, frac)| frac.len())
}

#[derive(Debug)]
pub struct NumberKind {
    options: NumberOptions,
    rules: Rules<f64>,
}

impl FieldKind for NumberKind {
    type Value = f64;
    type Output = f64;
    type Options = NumberOptions;

    const KIND: &'static str = "number";
    const TEXTUAL: bool = false;

    fn options(&self) -> &NumberOptions {
        &self.options
    }

    fn common(&self) -> &Common<f64> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<f64, ValidationError> {
        coerce::coerce_number(input, self.options.strict, self.options.parse_commas)
    }

    fn check(&self, value: &f64) -> Result<(), ValidationError> {
        self.rules.validate(value)
    }

    fn finish(&self, value: f64) -> f64 {
        value
    }

    fn from_listed(&self, text: String) -> Option<f64> {
        coerce::parse_decimal(text.trim())
    }
}

/// Builds a number field.
///
/// # Errors
///
/// [`ConfigError::Zero`] for `multipleOf: 0`, [`ConfigError::Bound`] when
/// `min` exceeds `max`.
pub fn number(required: bool, mut options: NumberOptions) -> Result<Field<NumberKind>, ConfigError> {
    options.common.required = required;

    if options.multiple_of == Some(0.0) {
        return Err(ConfigError::Zero { option: "multipleOf" });
    }
    if let (Some(lo), Some(hi)) = (options.min, options.max)
        && lo > hi
    {
        return Err(ConfigError::Bound {
            option: "min",
            value: lo.to_string(),
        });
    }

    let rules = Rules::new()
        .push_if(options.finite, || check!(MessageKey::Finite, |n: &f64| n.is_finite()))
        .push_if(options.number_type == NumberType::Integer, || {
            check!(MessageKey::Integer, |n: &f64| n.fract() == 0.0)
        })
        .push_if(options.number_type == NumberType::Float, || {
            check!(MessageKey::Float, |n: &f64| n.is_finite() && n.fract() != 0.0)
        })
        .push_if(options.positive, || check!(MessageKey::Positive, |n: &f64| *n > 0.0))
        .push_if(options.negative, || check!(MessageKey::Negative, |n: &f64| *n < 0.0))
        .push_if(options.non_negative, || check!(MessageKey::NonNegative, |n: &f64| *n >= 0.0))
        .push_if(options.non_positive, || check!(MessageKey::NonPositive, |n: &f64| *n <= 0.0))
        .push_opt(options.min.map(min))
        .push_opt(options.max.map(max))
        .push_opt(options.multiple_of.map(multiple_of))
        .push_opt(options.precision.map(|places| {
            rule_fn(move |n: &f64| {
                if decimal_places(*n) <= places as usize {
                    Ok(())
                } else {
                    Err(ValidationError::new(MessageKey::Precision).with_param("precision", places))
                }
            })
        }));

    Ok(Field::new(NumberKind { options, rules }))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::pipeline::CommonOptions;

    fn code(field: &Field<NumberKind>, input: Value) -> Option<MessageKey> {
        field.parse(input).err().and_then(|e| e.code())
    }

    #[test]
    fn strings_and_natives() {
        let field = number(true, NumberOptions::default()).unwrap();
        assert_eq!(field.parse(json!(" 12.5 ")).unwrap(), Some(12.5));
        assert_eq!(field.parse(json!(7)).unwrap(), Some(7.0));
        assert_eq!(code(&field, json!("12abc")), Some(MessageKey::Invalid));
    }

    #[test]
    fn commas() {
        let field = number(true, NumberOptions::default().parse_commas(true)).unwrap();
        assert_eq!(field.parse(json!("1,234,567")).unwrap(), Some(1_234_567.0));
    }

    #[test]
    fn non_finite_values() {
        let finite = number(true, NumberOptions::default()).unwrap();
        assert_eq!(code(&finite, json!("1e400")), Some(MessageKey::Finite));

        let loose = number(true, NumberOptions::default().finite(false)).unwrap();
        assert!(loose.parse(json!("-1e400")).unwrap().unwrap().is_infinite());
    }

    #[rstest]
    #[case(json!("nan"))]
    #[case(json!("NaN"))]
    #[case(json!("inf"))]
    #[case(json!("Infinity"))]
    #[case(json!("-infinity"))]
    fn non_numeric_words_are_invalid(#[case] input: Value) {
        let finite = number(true, NumberOptions::default()).unwrap();
        assert_eq!(code(&finite, input.clone()), Some(MessageKey::Invalid));

        let loose = number(true, NumberOptions::default().finite(false)).unwrap();
        assert_eq!(code(&loose, input), Some(MessageKey::Invalid));
    }

    #[rstest]
    #[case(NumberType::Integer, json!(42), None)]
    #[case(NumberType::Integer, json!("4.5"), Some(MessageKey::Integer))]
    #[case(NumberType::Float, json!("4.5"), None)]
    #[case(NumberType::Float, json!(42), Some(MessageKey::Float))]
    #[case(NumberType::Both, json!(42), None)]
    fn type_discrimination(
        #[case] ty: NumberType,
        #[case] input: Value,
        #[case] expected: Option<MessageKey>,
    ) {
        let field = number(true, NumberOptions::default().number_type(ty)).unwrap();
        assert_eq!(code(&field, input), expected);
    }

    #[rstest]
    #[case(json!(1), None)]
    #[case(json!(10), None)]
    #[case(json!(0.999), Some(MessageKey::Min))]
    #[case(json!(10.001), Some(MessageKey::Max))]
    fn inclusive_bounds(#[case] input: Value, #[case] expected: Option<MessageKey>) {
        let field = number(true, NumberOptions::default().min(1.0).max(10.0)).unwrap();
        assert_eq!(code(&field, input), expected);
    }

    #[test]
    fn sign_runs_before_range() {
        let field = number(true, NumberOptions::default().positive().min(5.0)).unwrap();
        assert_eq!(code(&field, json!(-1)), Some(MessageKey::Positive));
        assert_eq!(code(&field, json!(1)), Some(MessageKey::Min));
    }

    #[test]
    fn multiple_and_precision() {
        let field = number(true, NumberOptions::default().multiple_of(0.5).precision(1)).unwrap();
        assert_eq!(field.parse(json!("2.5")).unwrap(), Some(2.5));
        assert_eq!(code(&field, json!("2.25")), Some(MessageKey::MultipleOf));

        let field = number(true, NumberOptions::default().precision(2)).unwrap();
        assert_eq!(code(&field, json!("1.005")), Some(MessageKey::Precision));
    }

    #[test]
    fn invalid_configuration() {
        assert!(matches!(
            number(false, NumberOptions::default().multiple_of(0.0)),
            Err(ConfigError::Zero { option: "multipleOf" })
        ));
        assert!(number(false, NumberOptions::default().min(2.0).max(1.0)).is_err());
    }

    #[test]
    fn default_is_range_checked() {
        let field = number(false, NumberOptions::default().max(10.0).default_value(11.0)).unwrap();
        assert_eq!(code(&field, json!(null)), Some(MessageKey::Max));
    }
}

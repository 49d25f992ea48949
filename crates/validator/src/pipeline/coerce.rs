//! Type coercion: normalized input to the field's value type.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::normalize::Prepared;
use crate::foundation::ValidationError;

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Parses a decimal literal. Words such as `inf` or `NaN` are not numbers;
/// an exponent too large for `f64` still yields an infinity.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    if DECIMAL.is_match(text) { text.parse().ok() } else { None }
}

/// Textual fields accept any scalar; arrays and objects are `invalid`.
pub fn coerce_text(prepared: Prepared) -> Result<String, ValidationError> {
    match prepared {
        Prepared::Text(s) | Prepared::Native(Value::String(s)) => Ok(s),
        Prepared::Native(_) => Err(ValidationError::invalid()),
    }
}

/// Boolean coercion.
///
/// Strict mode only takes native booleans. Otherwise the input must equal
/// one of the configured tokens exactly (no case folding, no trimming); a
/// token present in both lists is ambiguous and rejected.
pub fn coerce_bool(
    prepared: Prepared,
    strict: bool,
    true_values: &[Value],
    false_values: &[Value],
) -> Result<bool, ValidationError> {
    let value = match prepared {
        Prepared::Native(value) => value,
        Prepared::Text(s) => Value::String(s),
    };

    if strict {
        return value.as_bool().ok_or_else(ValidationError::invalid);
    }

    match (true_values.contains(&value), false_values.contains(&value)) {
        (true, false) => Ok(true),
        (false, true) => Ok(false),
        _ => Err(ValidationError::invalid()),
    }
}

/// Number coercion.
///
/// Native numbers pass through. Strings are parsed as decimal literals
/// (after removing grouping commas when `parse_commas` is set) unless
/// `strict`. Overflowing literals become infinities; finiteness is a later
/// rule.
pub fn coerce_number(prepared: Prepared, strict: bool, parse_commas: bool) -> Result<f64, ValidationError> {
    let text = match prepared {
        Prepared::Native(Value::Number(n)) => {
            return n.as_f64().ok_or_else(ValidationError::invalid);
        }
        Prepared::Native(Value::String(s)) | Prepared::Text(s) if !strict => s,
        _ => return Err(ValidationError::invalid()),
    };

    let text = text.trim();
    let cleaned = if parse_commas {
        text.replace(',', "")
    } else {
        text.to_string()
    };

    parse_decimal(&cleaned).ok_or_else(ValidationError::invalid)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::foundation::MessageKey;

    fn defaults() -> (Vec<Value>, Vec<Value>) {
        (
            vec![json!(true), json!("true"), json!(1), json!("1"), json!("yes"), json!("on")],
            vec![json!(false), json!("false"), json!(0), json!("0"), json!("no"), json!("off")],
        )
    }

    #[rstest]
    #[case(json!(true), Some(true))]
    #[case(json!("yes"), Some(true))]
    #[case(json!(1), Some(true))]
    #[case(json!("off"), Some(false))]
    #[case(json!(0), Some(false))]
    #[case(json!("TRUE"), None)]
    #[case(json!("t"), None)]
    #[case(json!(2), None)]
    fn loose_bool_tokens(#[case] input: Value, #[case] expected: Option<bool>) {
        let (t, f) = defaults();
        let got = coerce_bool(Prepared::Native(input), false, &t, &f).ok();
        assert_eq!(got, expected);
    }

    #[test]
    fn strict_bool_takes_natives_only() {
        let (t, f) = defaults();
        assert_eq!(coerce_bool(Prepared::Native(json!(false)), true, &t, &f), Ok(false));
        assert!(coerce_bool(Prepared::Native(json!("true")), true, &t, &f).is_err());
    }

    #[test]
    fn ambiguous_token_is_invalid() {
        let t = vec![json!("x")];
        let err = coerce_bool(Prepared::Native(json!("x")), false, &t, &t).unwrap_err();
        assert_eq!(err.key, MessageKey::Invalid);
    }

    #[rstest]
    #[case(json!(42), false, false, Some(42.0))]
    #[case(json!("3.5"), false, false, Some(3.5))]
    #[case(json!("1,234.5"), false, true, Some(1234.5))]
    #[case(json!("1,234"), false, false, None)]
    #[case(json!("12"), true, false, None)]
    #[case(json!("abc"), false, false, None)]
    #[case(json!("-.5"), false, false, Some(-0.5))]
    #[case(json!("2e3"), false, false, Some(2000.0))]
    #[case(json!("nan"), false, false, None)]
    #[case(json!("inf"), false, false, None)]
    #[case(json!("-Infinity"), false, false, None)]
    #[case(json!("1."), false, false, Some(1.0))]
    #[case(json!("."), false, false, None)]
    #[case(json!(true), false, false, None)]
    fn numbers(
        #[case] input: Value,
        #[case] strict: bool,
        #[case] commas: bool,
        #[case] expected: Option<f64>,
    ) {
        assert_eq!(coerce_number(Prepared::Native(input), strict, commas).ok(), expected);
    }

    #[test]
    fn overflow_parses_for_later_finite_check() {
        let n = coerce_number(Prepared::Native(json!("1e400")), false, false).unwrap();
        assert!(n.is_infinite());
    }

    #[test]
    fn structured_text_input_is_invalid() {
        assert!(coerce_text(Prepared::Native(json!({"a": 1}))).is_err());
        assert_eq!(coerce_text(Prepared::Text("a".into())).unwrap(), "a");
    }
}

//! Normalization stage: stringify, trim, case.

use serde_json::{Number, Value};

use super::options::{Casing, TrimMode};

/// A non-empty input after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Prepared {
    /// Canonical string of a textual field.
    Text(String),
    /// Untouched input of a native field (boolean, number, file), or a
    /// structured value handed to a textual field.
    Native(Value),
}

impl Prepared {
    /// The string form compared against whitelist entries.
    #[must_use]
    pub fn listing_text(&self) -> Option<String> {
        match self {
            Prepared::Text(s) | Prepared::Native(Value::String(s)) => Some(s.clone()),
            Prepared::Native(Value::Number(n)) => Some(number_text(n)),
            Prepared::Native(Value::Bool(b)) => Some(b.to_string()),
            Prepared::Native(_) => None,
        }
    }
}

/// Plain decimal form of a JSON number: integer-valued floats drop the
/// fraction and large or tiny magnitudes never use exponent notation.
#[must_use]
pub fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Normalizes raw input; `None` means the input counts as empty.
///
/// Textual fields stringify numbers and booleans, then apply `trim` and
/// `casing`. Native fields keep the value as is; only `null` and blank
/// strings are empty for them.
pub(crate) fn prepare(input: Value, textual: bool, trim: TrimMode, casing: Casing) -> Option<Prepared> {
    let text = match input {
        Value::Null => return None,
        Value::String(s) if s.trim().is_empty() => return None,
        other if !textual => return Some(Prepared::Native(other)),
        Value::String(s) => s,
        Value::Number(n) => number_text(&n),
        Value::Bool(b) => b.to_string(),
        structured @ (Value::Array(_) | Value::Object(_)) => {
            return Some(Prepared::Native(structured));
        }
    };

    Some(Prepared::Text(casing.apply(trim.apply(&text))))
}

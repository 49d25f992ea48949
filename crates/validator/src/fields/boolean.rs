//! Booleans with strict or token-based coercion.

use serde::Deserialize;
use serde_json::{Value, json};

use super::check;
use crate::combinators::Rules;
use crate::foundation::{MessageKey, Validate, ValidationError};
use crate::pipeline::{Common, Field, FieldKind, Prepared, coerce, impl_common_options};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BooleanOptions {
    #[serde(flatten)]
    pub common: Common<bool>,
    /// Accept native booleans only.
    pub strict: bool,
    pub true_values: Vec<Value>,
    pub false_values: Vec<Value>,
    pub should_be: Option<bool>,
}

impl Default for BooleanOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            strict: false,
            true_values: vec![json!(true), json!("true"), json!(1), json!("1"), json!("yes"), json!("on")],
            false_values: vec![json!(false), json!("false"), json!(0), json!("0"), json!("no"), json!("off")],
            should_be: None,
        }
    }
}

impl BooleanOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn true_values(mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.true_values = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn false_values(mut self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.false_values = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn should_be(mut self, expected: bool) -> Self {
        self.should_be = Some(expected);
        self
    }
}

impl_common_options!(BooleanOptions => bool);

#[derive(Debug)]
pub struct BooleanKind {
    options: BooleanOptions,
    rules: Rules<bool>,
}

impl FieldKind for BooleanKind {
    type Value = bool;
    type Output = bool;
    type Options = BooleanOptions;

    const KIND: &'static str = "boolean";
    const TEXTUAL: bool = false;

    fn options(&self) -> &BooleanOptions {
        &self.options
    }

    fn common(&self) -> &Common<bool> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<bool, ValidationError> {
        coerce::coerce_bool(
            input,
            self.options.strict,
            &self.options.true_values,
            &self.options.false_values,
        )
    }

    fn check(&self, value: &bool) -> Result<(), ValidationError> {
        self.rules.validate(value)
    }

    fn finish(&self, value: bool) -> bool {
        value
    }

    /// A listed token still has to name a boolean; `"1"` may stand for the
    /// number or the string.
    fn from_listed(&self, text: String) -> Option<bool> {
        let parsed = serde_json::from_str::<Value>(&text).ok();
        [parsed, Some(Value::String(text))]
            .into_iter()
            .flatten()
            .find_map(|token| {
                coerce::coerce_bool(
                    Prepared::Native(token),
                    false,
                    &self.options.true_values,
                    &self.options.false_values,
                )
                .ok()
            })
    }
}

/// Builds a boolean field.
pub fn boolean(required: bool, mut options: BooleanOptions) -> Field<BooleanKind> {
    options.common.required = required;

    let rules = match options.should_be {
        Some(true) => Rules::new().push(check!(MessageKey::ShouldBeTrue, |v: &bool| *v)),
        Some(false) => Rules::new().push(check!(MessageKey::ShouldBeFalse, |v: &bool| !*v)),
        None => Rules::new(),
    };

    Field::new(BooleanKind { options, rules })
}

//! Payment card numbers.
//!
//! Separators (spaces, dashes) are stripped during coercion when allowed.
//! Rule order: 13–19 digits → Luhn → brand.

use serde::Deserialize;

use super::{check, one_or_many};
use crate::algorithms::luhn::{CardType, detect_brand, luhn_valid, strip_card_separators};
use crate::combinators::{Rules, rule_fn};
use crate::foundation::{MessageKey, Validate, ValidationError};
use crate::pipeline::{Common, Field, FieldKind, Prepared, coerce, impl_common_options};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditCardOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(rename = "cardType", deserialize_with = "one_or_many")]
    pub card_types: Vec<CardType>,
    pub allow_separators: bool,
}

impl Default for CreditCardOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            card_types: vec![CardType::Any],
            allow_separators: true,
        }
    }
}

impl CreditCardOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn card_types(mut self, types: impl IntoIterator<Item = CardType>) -> Self {
        self.card_types = types.into_iter().collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allow_separators(mut self, allow: bool) -> Self {
        self.allow_separators = allow;
        self
    }
}

impl_common_options!(CreditCardOptions => String);

#[derive(Debug)]
pub struct CreditCardKind {
    options: CreditCardOptions,
    rules: Rules<str>,
}

impl FieldKind for CreditCardKind {
    type Value = String;
    type Output = String;
    type Options = CreditCardOptions;

    const KIND: &'static str = "creditCard";

    fn options(&self) -> &CreditCardOptions {
        &self.options
    }

    fn common(&self) -> &Common<String> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<String, ValidationError> {
        let text = coerce::coerce_text(input)?;
        Ok(if self.options.allow_separators {
            strip_card_separators(&text)
        } else {
            text
        })
    }

    fn check(&self, value: &String) -> Result<(), ValidationError> {
        self.rules.validate(value)
    }

    fn finish(&self, value: String) -> String {
        value
    }

    fn from_listed(&self, text: String) -> Option<String> {
        Some(text)
    }
}

fn brand_rule(types: Vec<CardType>) -> impl Validate<Input = str> + Send + Sync + 'static {
    let names: Vec<String> = types.iter().map(|t| t.as_str().to_owned()).collect();
    rule_fn(move |digits: &str| {
        let brand = detect_brand(digits);
        let accepted = brand != CardType::Any && types.contains(&brand) && brand.lengths().contains(&digits.len());
        if accepted {
            Ok(())
        } else {
            Err(ValidationError::new(MessageKey::CardType).with_param("cardType", &names[..]))
        }
    })
}

/// Builds a credit-card field. The output is the bare digit string.
pub fn credit_card(required: bool, mut options: CreditCardOptions) -> Field<CreditCardKind> {
    options.common.required = required;

    let restricted = !options.card_types.is_empty() && !options.card_types.contains(&CardType::Any);
    let rules = Rules::new()
        .push(check!(MessageKey::Invalid, |digits: &str| {
            (13..=19).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
        }))
        .push(check!(MessageKey::Checksum, |digits: &str| luhn_valid(digits)))
        .push_if(restricted, || brand_rule(options.card_types.clone()));

    Field::new(CreditCardKind { options, rules })
}

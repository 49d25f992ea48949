//! CSS colors.
//!
//! Rule order: grammar (the first listed format that parses wins) →
//! alpha. A single configured format reports its own key (`notHex`,
//! `notRgb`, `notHsl`); several formats or `any` report `invalid`.

use serde::Deserialize;

use super::one_or_many;
use crate::algorithms::color::{ColorFormat, parse_color_as};
use crate::foundation::{MessageKey, Validate, ValidationError};
use crate::pipeline::{Common, Field, FieldKind, Prepared, coerce, impl_common_options};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(rename = "format", deserialize_with = "one_or_many")]
    pub formats: Vec<ColorFormat>,
    pub allow_alpha: bool,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            formats: vec![ColorFormat::Any],
            allow_alpha: true,
        }
    }
}

impl ColorOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn formats(mut self, formats: impl IntoIterator<Item = ColorFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allow_alpha(mut self, allow: bool) -> Self {
        self.allow_alpha = allow;
        self
    }
}

impl_common_options!(ColorOptions => String);

#[derive(Debug, Clone)]
struct ColorRule {
    formats: Vec<ColorFormat>,
    allow_alpha: bool,
}

impl ColorRule {
    fn grammar_key(&self) -> MessageKey {
        match self.formats.as_slice() {
            [ColorFormat::Hex] => MessageKey::NotHex,
            [ColorFormat::Rgb] => MessageKey::NotRgb,
            [ColorFormat::Hsl] => MessageKey::NotHsl,
            _ => MessageKey::Invalid,
        }
    }
}

impl Validate for ColorRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let parsed = self
            .formats
            .iter()
            .find_map(|&format| parse_color_as(input, format))
            .ok_or_else(|| ValidationError::new(self.grammar_key()))?;

        if parsed.has_alpha && !self.allow_alpha {
            return Err(ValidationError::new(MessageKey::AlphaNotAllowed));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct ColorKind {
    options: ColorOptions,
    rule: ColorRule,
}

impl FieldKind for ColorKind {
    type Value = String;
    type Output = String;
    type Options = ColorOptions;

    const KIND: &'static str = "color";

    fn options(&self) -> &ColorOptions {
        &self.options
    }

    fn common(&self) -> &Common<String> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<String, ValidationError> {
        coerce::coerce_text(input)
    }

    fn check(&self, value: &String) -> Result<(), ValidationError> {
        self.rule.validate(value)
    }

    fn finish(&self, value: String) -> String {
        value
    }

    fn from_listed(&self, text: String) -> Option<String> {
        Some(text)
    }
}

/// Builds a color field. An empty format list means `any`.
pub fn color(required: bool, mut options: ColorOptions) -> Field<ColorKind> {
    options.common.required = required;
    if options.formats.is_empty() {
        options.formats.push(ColorFormat::Any);
    }

    let rule = ColorRule {
        formats: options.formats.clone(),
        allow_alpha: options.allow_alpha,
    };
    Field::new(ColorKind { options, rule })
}

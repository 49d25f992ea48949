//! Free text.
//!
//! Rule order: `minLength` → `maxLength` → `startsWith` → `endsWith` →
//! `includes` → `excludes` → `regex`.

use serde::Deserialize;

use super::one_or_many;
use crate::combinators::Rules;
use crate::foundation::{ConfigError, Validate, ValidationError};
use crate::pipeline::{
    Common, Field, FieldKind, Prepared, WhitelistOrder, coerce, impl_common_options,
};
use crate::rules::{
    MatchesRegex, ends_with, excludes, includes, max_length, min_length, starts_with,
};

// ============================================================================
// SHARED STRING BOUNDS
// ============================================================================

/// Length, affix and membership constraints shared by the string kinds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextBounds {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    #[serde(deserialize_with = "one_or_many")]
    pub starts_with: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub ends_with: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub includes: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub excludes: Vec<String>,
}

impl TextBounds {
    /// Appends the configured constraints in their fixed order.
    pub(crate) fn push_into(&self, rules: Rules<str>) -> Rules<str> {
        rules
            .push_opt(self.min_length.map(min_length))
            .push_opt(self.max_length.map(max_length))
            .push_if(!self.starts_with.is_empty(), || starts_with(self.starts_with.clone()))
            .push_if(!self.ends_with.is_empty(), || ends_with(self.ends_with.clone()))
            .push_if(!self.includes.is_empty(), || includes(self.includes.clone()))
            .push_if(!self.excludes.is_empty(), || excludes(self.excludes.clone()))
    }

    /// The same bounds with every needle lower-cased.
    pub(crate) fn lowercased(&self) -> Self {
        let lower = |items: &[String]| items.iter().map(|s| s.to_lowercase()).collect();
        Self {
            min_length: self.min_length,
            max_length: self.max_length,
            starts_with: lower(&self.starts_with),
            ends_with: lower(&self.ends_with),
            includes: lower(&self.includes),
            excludes: lower(&self.excludes),
        }
    }
}

/// Builder methods delegating to a `bounds: TextBounds` field.
macro_rules! impl_text_bounds {
    ($($options:ty),+ $(,)?) => {
        $(
            impl $options {
                #[must_use = "builder methods must be chained or built"]
                pub fn min_length(mut self, min: usize) -> Self {
                    self.bounds.min_length = Some(min);
                    self
                }

                #[must_use = "builder methods must be chained or built"]
                pub fn max_length(mut self, max: usize) -> Self {
                    self.bounds.max_length = Some(max);
                    self
                }

                /// Any one of the prefixes must match.
                #[must_use = "builder methods must be chained or built"]
                pub fn starts_with(mut self, prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
                    self.bounds.starts_with = prefixes.into_iter().map(Into::into).collect();
                    self
                }

                /// Any one of the suffixes must match.
                #[must_use = "builder methods must be chained or built"]
                pub fn ends_with(mut self, suffixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
                    self.bounds.ends_with = suffixes.into_iter().map(Into::into).collect();
                    self
                }

                /// Every needle must be present.
                #[must_use = "builder methods must be chained or built"]
                pub fn includes(mut self, needles: impl IntoIterator<Item = impl Into<String>>) -> Self {
                    self.bounds.includes = needles.into_iter().map(Into::into).collect();
                    self
                }

                /// No needle may be present.
                #[must_use = "builder methods must be chained or built"]
                pub fn excludes(mut self, needles: impl IntoIterator<Item = impl Into<String>>) -> Self {
                    self.bounds.excludes = needles.into_iter().map(Into::into).collect();
                    self
                }
            }
        )+
    };
}

pub(crate) use impl_text_bounds;

// ============================================================================
// OPTIONS
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(flatten)]
    pub bounds: TextBounds,
    pub regex: Option<String>,
}

impl TextOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.regex = Some(pattern.into());
        self
    }
}

impl_common_options!(TextOptions => String);
impl_text_bounds!(TextOptions);

// ============================================================================
// KIND
// ============================================================================

#[derive(Debug)]
pub struct TextKind {
    options: TextOptions,
    rules: Rules<str>,
}

impl FieldKind for TextKind {
    type Value = String;
    type Output = String;
    type Options = TextOptions;

    const KIND: &'static str = "text";
    const WHITELIST_ORDER: WhitelistOrder = WhitelistOrder::AfterTransform;

    fn options(&self) -> &TextOptions {
        &self.options
    }

    fn common(&self) -> &Common<String> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<String, ValidationError> {
        coerce::coerce_text(input)
    }

    fn check(&self, value: &String) -> Result<(), ValidationError> {
        self.rules.validate(value)
    }

    fn finish(&self, value: String) -> String {
        value
    }

    fn listed_text(value: &String) -> Option<&str> {
        Some(value)
    }
}

/// Builds a text field.
///
/// # Errors
///
/// [`ConfigError::Regex`] when `regex` does not compile.
pub fn text(required: bool, mut options: TextOptions) -> Result<Field<TextKind>, ConfigError> {
    options.common.required = required;

    let regex = options
        .regex
        .as_deref()
        .map(|pattern| MatchesRegex::new("regex", pattern))
        .transpose()?;
    let rules = options.bounds.push_into(Rules::new()).push_opt(regex);

    Ok(Field::new(TextKind { options, rules }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::foundation::MessageKey;
    use crate::pipeline::CommonOptions;

    fn code(field: &Field<TextKind>, input: serde_json::Value) -> Option<MessageKey> {
        field.parse(input).err().and_then(|e| e.code())
    }

    #[test]
    fn numbers_are_stringified() {
        let field = text(false, TextOptions::default()).unwrap();
        assert_eq!(field.parse(json!(42)).unwrap(), Some("42".into()));
    }

    #[test]
    fn first_failure_in_fixed_order() {
        let field = text(
            true,
            TextOptions::default()
                .min_length(3)
                .starts_with(["ab"])
                .includes(["z"])
                .regex("^[a-z]+$"),
        )
        .unwrap();

        assert_eq!(code(&field, json!("x")), Some(MessageKey::MinLength));
        assert_eq!(code(&field, json!("xyz")), Some(MessageKey::StartsWith));
        assert_eq!(code(&field, json!("abc")), Some(MessageKey::Includes));
        assert_eq!(code(&field, json!("abz1")), Some(MessageKey::Invalid));
        assert_eq!(field.parse(json!("abz")).unwrap(), Some("abz".into()));
    }

    #[test]
    fn whitelist_compares_after_transform() {
        let field = text(
            false,
            TextOptions::default()
                .min_length(10)
                .transform(|s: String| s.replace('-', ""))
                .whitelist(["n/a"]),
        )
        .unwrap();
        assert_eq!(field.parse(json!("n/-a")).unwrap(), Some("n/a".into()));
    }

    #[test]
    fn whitelist_only_rejects_everything_else() {
        let field = text(false, TextOptions::default().whitelist(["yes"]).whitelist_only(true)).unwrap();
        assert_eq!(code(&field, json!("no")), Some(MessageKey::NotInWhitelist));
        assert_eq!(field.parse(json!("yes")).unwrap(), Some("yes".into()));
    }

    #[test]
    fn bad_regex_is_a_config_error() {
        let err = text(false, TextOptions::default().regex("(")).unwrap_err();
        assert!(matches!(err, ConfigError::Regex { option: "regex", .. }));
    }

    #[test]
    fn options_from_json() {
        let options: TextOptions = serde_json::from_value(json!({
            "minLength": 2,
            "startsWith": "A",
            "excludes": ["X", "Y"],
            "casing": "upper"
        }))
        .unwrap();
        let field = text(true, options).unwrap();
        assert_eq!(field.parse(json!("abc")).unwrap(), Some("ABC".into()));
        assert_eq!(code(&field, json!("bee")), Some(MessageKey::StartsWith));
        assert_eq!(code(&field, json!("axe")), Some(MessageKey::Excludes));
    }
}

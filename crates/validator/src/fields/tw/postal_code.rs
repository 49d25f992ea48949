//! Postal codes (郵遞區號): `100`, `100-01`/`10001`, `100-001`/`100001`.
//!
//! Rule order: layout (`format` when a single layout is configured) →
//! official prefix → allowed prefixes → blocked prefixes → suffix range
//! (with `strictSuffix`).

use serde::Deserialize;

use super::taiwan_kind;
use crate::algorithms::taiwan::{PostalFormat, postal_county, split_postal_code, suffix_in_range};
use crate::combinators::rule_fn;
use crate::foundation::{MessageKey, ValidateExt, ValidationError};
use crate::pipeline::{Common, Field, impl_common_options};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostalCodeOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    pub format: PostalFormat,
    pub allowed_prefixes: Vec<u16>,
    pub blocked_prefixes: Vec<u16>,
    /// Reject suffixes outside the range assigned to their prefix.
    pub strict_suffix: bool,
}

impl PostalCodeOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: PostalFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allowed_prefixes(mut self, prefixes: impl IntoIterator<Item = u16>) -> Self {
        self.allowed_prefixes = prefixes.into_iter().collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn blocked_prefixes(mut self, prefixes: impl IntoIterator<Item = u16>) -> Self {
        self.blocked_prefixes = prefixes.into_iter().collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn strict_suffix(mut self, strict: bool) -> Self {
        self.strict_suffix = strict;
        self
    }
}

impl_common_options!(PostalCodeOptions => String);

taiwan_kind!(TwPostalCodeKind(PostalCodeOptions) = "twPostalCode");

/// Builds a postal-code field.
pub fn postal_code(options: PostalCodeOptions) -> Field<TwPostalCodeKind> {
    let format = options.format;
    let allowed = options.allowed_prefixes.clone();
    let blocked = options.blocked_prefixes.clone();
    let strict = options.strict_suffix;

    let rules = rule_fn(move |input: &str| {
        let code = split_postal_code(input, format).ok_or_else(|| match format {
            PostalFormat::Any => ValidationError::invalid(),
            _ => ValidationError::new(MessageKey::Format).with_param("format", format.as_str()),
        })?;
        if postal_county(code.prefix).is_none() || code.suffix.is_some_and(|(suffix, _)| suffix == 0) {
            return Err(ValidationError::invalid());
        }
        if !allowed.is_empty() && !allowed.contains(&code.prefix) {
            return Err(ValidationError::invalid());
        }
        if blocked.contains(&code.prefix) {
            return Err(ValidationError::invalid());
        }
        if strict && !suffix_in_range(code) {
            return Err(ValidationError::invalid());
        }
        Ok(())
    })
    .into_rules();

    Field::new(TwPostalCodeKind { options, rules })
}

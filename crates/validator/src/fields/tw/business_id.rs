//! Unified business numbers (統一編號).

use serde::Deserialize;

use super::taiwan_kind;
use crate::algorithms::taiwan::business_id_checksum;
use crate::combinators::Rules;
use crate::fields::check;
use crate::foundation::MessageKey;
use crate::pipeline::{Common, Field, impl_common_options};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessIdOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    /// Check against the pre-2023 divisor (10) instead of 5.
    pub legacy_rule: bool,
}

impl BusinessIdOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn legacy_rule(mut self, legacy: bool) -> Self {
        self.legacy_rule = legacy;
        self
    }
}

impl_common_options!(BusinessIdOptions => String);

taiwan_kind!(TwBusinessIdKind(BusinessIdOptions) = "twBusinessId");

/// Builds a business-ID field: eight digits (`invalid`), then the
/// weighted checksum (`checksum`).
pub fn business_id(options: BusinessIdOptions) -> Field<TwBusinessIdKind> {
    let legacy = options.legacy_rule;
    let rules = Rules::new()
        .push(check!(MessageKey::Invalid, |id: &str| {
            id.len() == 8 && id.bytes().all(|b| b.is_ascii_digit())
        }))
        .push(check!(MessageKey::Checksum, |id: &str| business_id_checksum(id, legacy)));

    Field::new(TwBusinessIdKind { options, rules })
}

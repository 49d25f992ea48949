//! Mobile, telephone and fax numbers.
//!
//! Separators and a `+886` country code are accepted; accepted numbers
//! are returned in domestic form without separators (`0912345678`).

use serde::Deserialize;

use super::taiwan_kind;
use crate::algorithms::taiwan::{is_mobile, landline_area, normalize_phone};
use crate::combinators::{Rules, rule_fn};
use crate::fields::check;
use crate::foundation::{MessageKey, ValidationError};
use crate::pipeline::{Common, Field, impl_common_options};

fn is_international(input: &str) -> bool {
    input.trim_start().starts_with("+886")
}

// ============================================================================
// MOBILE
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MobileOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    /// Accept the `+886` form.
    pub allow_international: bool,
}

impl Default for MobileOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            allow_international: true,
        }
    }
}

impl MobileOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_international(mut self, allow: bool) -> Self {
        self.allow_international = allow;
        self
    }
}

impl_common_options!(MobileOptions => String);

taiwan_kind!(TwMobileKind(MobileOptions) = "twMobile"; finish = normalize_phone);

/// Builds a mobile-number field.
pub fn mobile(options: MobileOptions) -> Field<TwMobileKind> {
    let rules = Rules::new()
        .push_if(!options.allow_international, || {
            check!(MessageKey::Invalid, |number: &str| !is_international(number))
        })
        .push(check!(MessageKey::Invalid, |number: &str| is_mobile(&normalize_phone(number))));

    Field::new(TwMobileKind { options, rules })
}

// ============================================================================
// TELEPHONE / FAX
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TelOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    /// Area codes to accept (`"02"`, `"037"`); empty accepts every code.
    pub area_codes: Vec<String>,
}

/// Fax numbers share the landline numbering plan.
pub type FaxOptions = TelOptions;

impl TelOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn area_codes(mut self, codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.area_codes = codes.into_iter().map(Into::into).collect();
        self
    }
}

impl_common_options!(TelOptions => String);

taiwan_kind!(TwTelKind(TelOptions) = "twTel"; finish = normalize_phone);
taiwan_kind!(TwFaxKind(FaxOptions) = "twFax"; finish = normalize_phone);

fn landline_rules(area_codes: &[String]) -> Rules<str> {
    let allowed = area_codes.to_vec();
    Rules::new().push(rule_fn(move |number: &str| {
        let row = landline_area(&normalize_phone(number)).ok_or_else(ValidationError::invalid)?;
        if allowed.is_empty() || allowed.iter().any(|code| code == row.code) {
            Ok(())
        } else {
            Err(ValidationError::invalid())
        }
    }))
}

/// Builds a telephone-number field.
pub fn tel(options: TelOptions) -> Field<TwTelKind> {
    let rules = landline_rules(&options.area_codes);
    Field::new(TwTelKind { options, rules })
}

/// Builds a fax-number field.
pub fn fax(options: FaxOptions) -> Field<TwFaxKind> {
    let rules = landline_rules(&options.area_codes);
    Field::new(TwFaxKind { options, rules })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::pipeline::CommonOptions;

    #[rstest]
    #[case("0912345678", Some("0912345678"))]
    #[case("0912-345-678", Some("0912345678"))]
    #[case("+886 912 345 678", Some("0912345678"))]
    #[case("+886-0912-345-678", Some("0912345678"))]
    #[case("0812345678", None)]
    #[case("091234567", None)]
    fn mobile_numbers(#[case] input: &str, #[case] expected: Option<&str>) {
        let field = mobile(MobileOptions::default().required(true));
        assert_eq!(field.parse(json!(input)).ok().flatten().as_deref(), expected);
    }

    #[test]
    fn domestic_only_mobile() {
        let field = mobile(MobileOptions::default().allow_international(false));
        assert!(!field.is_valid(json!("+886912345678")));
        assert!(field.is_valid(json!("0912345678")));
    }

    #[rstest]
    #[case("02-2345-6789", true)]
    #[case("(037) 234-567", true)]
    #[case("04-2345-6789", true)]
    #[case("04-723-4567", true)]
    #[case("049-234-5678", true)]
    #[case("02-1234-5678", false)]
    #[case("0912-345-678", false)]
    fn landlines(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(tel(TelOptions::default()).is_valid(json!(input)), valid);
        assert_eq!(fax(FaxOptions::default()).is_valid(json!(input)), valid);
    }

    #[test]
    fn area_code_restriction() {
        let field = tel(TelOptions::default().area_codes(["02"]).required(true));
        assert_eq!(field.parse(json!("02 2345 6789")).unwrap(), Some("0223456789".to_string()));
        assert_eq!(
            field.parse(json!("07-234-5678")).err().and_then(|e| e.code()),
            Some(MessageKey::Invalid)
        );
    }
}

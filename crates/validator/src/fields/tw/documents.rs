//! License plates and passport numbers. Both are upper-cased by default.

use serde::Deserialize;

use super::taiwan_kind;
use crate::algorithms::taiwan::{
    PassportType, PlateType, detect_passport_type, detect_plate_type, passport_matches,
    plate_matches,
};
use crate::combinators::{Rules, rule_fn};
use crate::foundation::{MessageKey, ValidationError};
use crate::pipeline::{Casing, Common, Field, impl_common_options};

// ============================================================================
// LICENSE PLATES
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LicensePlateOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(rename = "type")]
    pub plate_type: PlateType,
}

impl LicensePlateOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn plate_type(mut self, ty: PlateType) -> Self {
        self.plate_type = ty;
        self
    }
}

impl_common_options!(LicensePlateOptions => String);

taiwan_kind!(TwLicensePlateKind(LicensePlateOptions) = "twLicensePlate"; casing = Casing::Upper);

/// Builds a license-plate field: any known layout (`invalid`), then the
/// configured plate type (`plateType`).
pub fn license_plate(options: LicensePlateOptions) -> Field<TwLicensePlateKind> {
    let ty = options.plate_type;
    let rules = Rules::new().push(rule_fn(move |plate: &str| {
        detect_plate_type(plate).ok_or_else(ValidationError::invalid)?;
        if plate_matches(plate, ty) {
            Ok(())
        } else {
            Err(ValidationError::new(MessageKey::PlateType).with_param("plateType", ty.as_str()))
        }
    }));

    Field::new(TwLicensePlateKind { options, rules })
}

// ============================================================================
// PASSPORTS
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PassportOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(rename = "type")]
    pub passport_type: PassportType,
}

impl PassportOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn passport_type(mut self, ty: PassportType) -> Self {
        self.passport_type = ty;
        self
    }
}

impl_common_options!(PassportOptions => String);

taiwan_kind!(TwPassportKind(PassportOptions) = "twPassport"; casing = Casing::Upper);

/// Builds a passport-number field.
pub fn passport(options: PassportOptions) -> Field<TwPassportKind> {
    let ty = options.passport_type;
    let rules = Rules::new().push(rule_fn(move |number: &str| {
        detect_passport_type(number).ok_or_else(ValidationError::invalid)?;
        if passport_matches(number, ty) {
            Ok(())
        } else {
            Err(ValidationError::new(MessageKey::PassportType).with_param("passportType", ty.as_str()))
        }
    }));

    Field::new(TwPassportKind { options, rules })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(PlateType::Any, "abc-1234", None)]
    #[case(PlateType::Any, "EAB-1234", None)]
    #[case(PlateType::Any, "AB12", Some(MessageKey::Invalid))]
    #[case(PlateType::Car, "ABC-123", Some(MessageKey::PlateType))]
    #[case(PlateType::Motorcycle, "ABC-123", None)]
    #[case(PlateType::Electric, "EAB-1234", None)]
    #[case(PlateType::Electric, "ABC-1234", Some(MessageKey::PlateType))]
    fn plates(#[case] ty: PlateType, #[case] input: &str, #[case] expected: Option<MessageKey>) {
        let field = license_plate(LicensePlateOptions::default().plate_type(ty));
        assert_eq!(field.parse(json!(input)).err().and_then(|e| e.code()), expected);
    }

    #[test]
    fn plate_output_is_upper_cased() {
        let field = license_plate(LicensePlateOptions::default());
        assert_eq!(field.parse(json!("abc-1234")).unwrap(), Some("ABC-1234".to_string()));
    }

    #[rstest]
    #[case(PassportType::Any, "312345678", None)]
    #[case(PassportType::Any, "x12345678", None)]
    #[case(PassportType::Any, "12345", Some(MessageKey::Invalid))]
    #[case(PassportType::Ordinary, "X12345678", Some(MessageKey::PassportType))]
    #[case(PassportType::Diplomatic, "X12345678", None)]
    #[case(PassportType::Official, "Y12345678", None)]
    #[case(PassportType::TravelDocument, "A12345678", None)]
    fn passports(#[case] ty: PassportType, #[case] input: &str, #[case] expected: Option<MessageKey>) {
        let field = passport(PassportOptions::default().passport_type(ty));
        assert_eq!(field.parse(json!(input)).err().and_then(|e| e.code()), expected);
    }
}

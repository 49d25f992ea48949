//! National ID and resident certificate numbers (身分證字號 / 居留證號).
//!
//! Input is upper-cased by default. Rule order: layout (`invalid`) →
//! check digit (`checksum`) → accepted type (`invalid`).

use serde::Deserialize;

use super::taiwan_kind;
use crate::algorithms::taiwan::{NationalIdType, national_id_checksum, national_id_layout};
use crate::combinators::{Rules, rule_fn};
use crate::foundation::{MessageKey, ValidationError};
use crate::pipeline::{Casing, Common, Field, impl_common_options};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NationalIdOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(rename = "type")]
    pub id_type: NationalIdType,
}

impl NationalIdOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn id_type(mut self, ty: NationalIdType) -> Self {
        self.id_type = ty;
        self
    }
}

impl_common_options!(NationalIdOptions => String);

taiwan_kind!(TwNationalIdKind(NationalIdOptions) = "twNationalId"; casing = Casing::Upper);

/// Builds a national-ID field.
pub fn national_id(options: NationalIdOptions) -> Field<TwNationalIdKind> {
    let ty = options.id_type;
    let rules = Rules::new().push(rule_fn(move |id: &str| {
        let kind = national_id_layout(id).ok_or_else(ValidationError::invalid)?;
        if !national_id_checksum(id, kind) {
            return Err(ValidationError::new(MessageKey::Checksum));
        }
        if !kind.accepted_by(ty) {
            return Err(ValidationError::invalid());
        }
        Ok(())
    }));

    Field::new(TwNationalIdKind { options, rules })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::pipeline::CommonOptions;

    fn code(field: &Field<TwNationalIdKind>, input: &str) -> Option<MessageKey> {
        field.parse(json!(input)).err().and_then(|e| e.code())
    }

    #[test]
    fn upper_cases_input() {
        let field = national_id(NationalIdOptions::default().required(true));
        assert_eq!(field.parse(json!(" a123456789 ")).unwrap(), Some("A123456789".to_string()));
    }

    #[rstest]
    #[case(NationalIdType::Both, "A123456789", None)]
    #[case(NationalIdType::Both, "A800000014", None)]
    #[case(NationalIdType::Both, "A123456788", Some(MessageKey::Checksum))]
    #[case(NationalIdType::Both, "A12345678", Some(MessageKey::Invalid))]
    #[case(NationalIdType::Both, "A323456789", Some(MessageKey::Invalid))]
    #[case(NationalIdType::Citizen, "A800000014", Some(MessageKey::Invalid))]
    #[case(NationalIdType::Resident, "A123456789", Some(MessageKey::Invalid))]
    #[case(NationalIdType::Resident, "A800000014", None)]
    fn layouts_and_types(#[case] ty: NationalIdType, #[case] input: &str, #[case] expected: Option<MessageKey>) {
        let field = national_id(NationalIdOptions::default().id_type(ty).required(true));
        assert_eq!(code(&field, input), expected);
    }

    #[test]
    fn type_from_json() {
        let options: NationalIdOptions = serde_json::from_value(json!({ "type": "resident", "required": true })).unwrap();
        assert_eq!(options.id_type, NationalIdType::Resident);
        assert!(options.common.required);
        let field = national_id(options);
        assert_eq!(field.parse(json!("a800000014")).unwrap(), Some("A800000014".to_string()));
    }
}

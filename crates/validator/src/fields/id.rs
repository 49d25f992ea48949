//! Identifiers (UUID, ObjectId, ULID, snowflake, CUID, nanoid, numeric,
//! shortid).
//!
//! Rule order: format → allowed types → string bounds → numeric range.
//! Numeric identifiers come back as [`IdValue::Numeric`]; snowflakes stay
//! text.

use serde::{Deserialize, Serialize};

use super::text::{TextBounds, impl_text_bounds};
use crate::algorithms::ids::{IdType, detect_id_type, validate_id};
use crate::combinators::{Rules, rule_fn};
use crate::foundation::{MessageKey, Validate, ValidationError};
use crate::pipeline::{
    Common, Field, FieldKind, Prepared, WhitelistOrder, coerce, impl_common_options,
};

/// A parsed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Numeric(u64),
    Text(String),
}

impl IdValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            IdValue::Text(s) => Some(s),
            IdValue::Numeric(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(flatten)]
    pub bounds: TextBounds,
    #[serde(rename = "type")]
    pub id_type: IdType,
    pub allowed_types: Vec<IdType>,
    pub case_sensitive: bool,
}

impl Default for IdOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            bounds: TextBounds::default(),
            id_type: IdType::Auto,
            allowed_types: Vec::new(),
            case_sensitive: true,
        }
    }
}

impl IdOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn id_type(mut self, ty: IdType) -> Self {
        self.id_type = ty;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allowed_types(mut self, types: impl IntoIterator<Item = IdType>) -> Self {
        self.allowed_types = types.into_iter().collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }
}

impl_common_options!(IdOptions => String);
impl_text_bounds!(IdOptions);

fn type_names(types: &[IdType]) -> Vec<String> {
    types.iter().map(|t| t.as_str().to_owned()).collect()
}

#[derive(Debug)]
pub struct IdKind {
    options: IdOptions,
    rules: Rules<str>,
}

impl IdKind {
    fn is_numeric(&self, value: &str) -> bool {
        match self.options.id_type {
            IdType::Numeric => true,
            IdType::Auto => detect_id_type(value) == Some(IdType::Numeric),
            _ => false,
        }
    }
}

impl FieldKind for IdKind {
    type Value = String;
    type Output = IdValue;
    type Options = IdOptions;

    const KIND: &'static str = "id";
    const WHITELIST_ORDER: WhitelistOrder = WhitelistOrder::AfterTransform;

    fn options(&self) -> &IdOptions {
        &self.options
    }

    fn common(&self) -> &Common<String> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<String, ValidationError> {
        coerce::coerce_text(input)
    }

    fn check(&self, value: &String) -> Result<(), ValidationError> {
        self.rules.validate(value)?;
        if self.is_numeric(value) && value.parse::<u64>().is_err() {
            return Err(ValidationError::invalid());
        }
        Ok(())
    }

    fn finish(&self, value: String) -> IdValue {
        if self.is_numeric(&value)
            && let Ok(n) = value.parse()
        {
            return IdValue::Numeric(n);
        }
        IdValue::Text(value)
    }

    fn listed_text(value: &String) -> Option<&str> {
        Some(value)
    }
}

/// Builds an identifier field.
pub fn id(required: bool, mut options: IdOptions) -> Field<IdKind> {
    options.common.required = required;

    let ty = options.id_type;
    let allowed = options.allowed_types.clone();
    let allowed_names = type_names(&allowed);

    let mut rules = Rules::new()
        .push(rule_fn(move |value: &str| {
            if validate_id(value, ty) {
                Ok(())
            } else {
                Err(ValidationError::new(MessageKey::IdType).with_param("idType", ty.as_str()))
            }
        }))
        .push_if(!allowed.is_empty(), || {
            rule_fn(move |value: &str| {
                let detected = match ty {
                    IdType::Auto => detect_id_type(value),
                    ty => Some(ty),
                };
                if detected.is_some_and(|d| allowed.contains(&d)) {
                    Ok(())
                } else {
                    Err(ValidationError::new(MessageKey::IdType).with_param("idType", &allowed_names[..]))
                }
            })
        });

    rules = if options.case_sensitive {
        options.bounds.push_into(rules)
    } else {
        let folded = options.bounds.lowercased().push_into(Rules::new());
        rules.push(rule_fn(move |value: &str| folded.validate(&value.to_lowercase())))
    };

    Field::new(IdKind { options, rules })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn code(field: &Field<IdKind>, input: &str) -> Option<MessageKey> {
        field.parse(json!(input)).err().and_then(|e| e.code())
    }

    #[rstest]
    #[case("550e8400-e29b-41d4-a716-446655440000", IdValue::Text("550e8400-e29b-41d4-a716-446655440000".into()))]
    #[case("507f1f77bcf86cd799439011", IdValue::Text("507f1f77bcf86cd799439011".into()))]
    #[case("12345", IdValue::Numeric(12345))]
    #[case("1234567890123456789", IdValue::Text("1234567890123456789".into()))]
    fn auto_detection(#[case] input: &str, #[case] expected: IdValue) {
        let field = id(true, IdOptions::default());
        assert_eq!(field.parse(json!(input)).unwrap(), Some(expected));
    }

    #[test]
    fn numeric_overflow_is_invalid() {
        let field = id(true, IdOptions::default().id_type(IdType::Numeric));
        assert_eq!(code(&field, "99999999999999999999999"), Some(MessageKey::Invalid));
    }

    #[test]
    fn fixed_type() {
        let field = id(true, IdOptions::default().id_type(IdType::Uuid));
        assert_eq!(code(&field, "507f1f77bcf86cd799439011"), Some(MessageKey::IdType));
        let error = field.parse(json!("x")).unwrap_err();
        let (_, ty) = error.issues[0].params.iter().find(|(name, _)| name == "idType").unwrap();
        assert_eq!(ty.to_string(), "uuid");
    }

    #[test]
    fn allowed_types() {
        let field = id(true, IdOptions::default().allowed_types([IdType::Uuid, IdType::ObjectId]));
        assert_eq!(code(&field, "507f1f77bcf86cd799439011"), None);
        assert_eq!(code(&field, "42"), Some(MessageKey::IdType));
    }

    #[test]
    fn case_insensitive_bounds() {
        let sensitive = id(true, IdOptions::default().id_type(IdType::ObjectId).starts_with(["507F"]));
        assert_eq!(code(&sensitive, "507f1f77bcf86cd799439011"), Some(MessageKey::StartsWith));

        let folded = id(
            true,
            IdOptions::default()
                .id_type(IdType::ObjectId)
                .starts_with(["507F"])
                .case_sensitive(false),
        );
        assert_eq!(code(&folded, "507f1f77bcf86cd799439011"), None);
        assert_eq!(
            folded.parse(json!("507F1F77BCF86CD799439011")).unwrap(),
            Some(IdValue::Text("507F1F77BCF86CD799439011".into()))
        );
    }
}

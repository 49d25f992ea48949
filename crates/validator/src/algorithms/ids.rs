//! Identifier formats: UUID, ObjectId, ULID, snowflake, CUID, nanoid,
//! numeric and shortid.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdType {
    Uuid,
    ObjectId,
    Ulid,
    Snowflake,
    Cuid,
    Nanoid,
    Numeric,
    Shortid,
    /// Any of the above.
    Auto,
}

impl IdType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IdType::Uuid => "uuid",
            IdType::ObjectId => "objectId",
            IdType::Ulid => "ulid",
            IdType::Snowflake => "snowflake",
            IdType::Cuid => "cuid",
            IdType::Nanoid => "nanoid",
            IdType::Numeric => "numeric",
            IdType::Shortid => "shortid",
            IdType::Auto => "auto",
        }
    }
}

/// `(type, pattern source)` in detection order. Earlier formats are more
/// specific; a 24-hex ObjectId would also pass as a shortid-length string.
pub const ID_PATTERNS: &[(IdType, &str)] = &[
    (
        IdType::Uuid,
        r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-8][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
    ),
    (IdType::ObjectId, r"^[0-9a-fA-F]{24}$"),
    (IdType::Ulid, r"^[0-7][0-9A-HJKMNP-TV-Z]{25}$"),
    (IdType::Snowflake, r"^\d{17,19}$"),
    (IdType::Cuid, r"^c[a-z0-9]{24}$"),
    (IdType::Nanoid, r"^[A-Za-z0-9_-]{21}$"),
    (IdType::Numeric, r"^\d+$"),
    (IdType::Shortid, r"^[A-Za-z0-9_-]{7,14}$"),
];

static COMPILED: LazyLock<Vec<(IdType, Regex)>> = LazyLock::new(|| {
    ID_PATTERNS
        .iter()
        .map(|&(ty, src)| (ty, Regex::new(src).unwrap()))
        .collect()
});

/// Whether `id` matches the format of `ty`; `Auto` matches any format.
#[must_use]
pub fn validate_id(id: &str, ty: IdType) -> bool {
    match ty {
        IdType::Auto => detect_id_type(id).is_some(),
        ty => COMPILED
            .iter()
            .any(|(candidate, pattern)| *candidate == ty && pattern.is_match(id)),
    }
}

/// The first format `id` matches, in [`ID_PATTERNS`] order.
///
/// ```
/// use formosa_validator::algorithms::ids::{IdType, detect_id_type};
///
/// assert_eq!(detect_id_type("550e8400-e29b-41d4-a716-446655440000"), Some(IdType::Uuid));
/// assert_eq!(detect_id_type("42"), Some(IdType::Numeric));
/// assert_eq!(detect_id_type("not an id"), None);
/// ```
#[must_use]
pub fn detect_id_type(id: &str) -> Option<IdType> {
    COMPILED
        .iter()
        .find(|(_, pattern)| pattern.is_match(id))
        .map(|(ty, _)| *ty)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("550E8400-E29B-41D4-A716-446655440000", Some(IdType::Uuid))]
    #[case("507f1f77bcf86cd799439011", Some(IdType::ObjectId))]
    #[case("01ARZ3NDEKTSV4RRFFQ69G5FAV", Some(IdType::Ulid))]
    #[case("1234567890123456789", Some(IdType::Snowflake))]
    #[case("cjld2cjxh0000qzrmn831i7rn", Some(IdType::Cuid))]
    #[case("V1StGXR8_Z5jdHi6B-myT", Some(IdType::Nanoid))]
    #[case("12345", Some(IdType::Numeric))]
    #[case("PPBqWA9", Some(IdType::Shortid))]
    #[case("has space", None)]
    fn detection_order(#[case] id: &str, #[case] expected: Option<IdType>) {
        assert_eq!(detect_id_type(id), expected);
    }

    #[test]
    fn specific_type_ignores_earlier_matches() {
        assert!(validate_id("1234567890123456789", IdType::Numeric));
        assert!(!validate_id("abc", IdType::Numeric));
        assert!(validate_id("abc1234", IdType::Auto));
    }

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(COMPILED.len(), ID_PATTERNS.len());
    }
}

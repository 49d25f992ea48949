//! License plates and passport numbers.
//!
//! Both are pure format checks over upper-cased input; the first matching
//! sub-format wins when `Any` is requested.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

// ============================================================================
// LICENSE PLATES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlateType {
    Car,
    Motorcycle,
    Electric,
    #[default]
    Any,
}

impl PlateType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PlateType::Car => "car",
            PlateType::Motorcycle => "motorcycle",
            PlateType::Electric => "electric",
            PlateType::Any => "any",
        }
    }
}

static CAR: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[r"^[A-DF-Z][A-Z]{2}-?\d{4}$", r"^[A-Z]{2}-?\d{4}$", r"^\d{4}-?[A-Z]{2}$"])
});
static MOTORCYCLE: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&[r"^[A-Z]{3}-?\d{3}$", r"^\d{3}-?[A-Z]{3}$"]));
static ELECTRIC: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(&[r"^E[A-Z]{2}-?\d{4}$"]));

/// The first plate type `plate` matches, checked in car, motorcycle,
/// electric order.
#[must_use]
pub fn detect_plate_type(plate: &str) -> Option<PlateType> {
    [
        (PlateType::Car, &*CAR),
        (PlateType::Motorcycle, &*MOTORCYCLE),
        (PlateType::Electric, &*ELECTRIC),
    ]
    .into_iter()
    .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(plate)))
    .map(|(ty, _)| ty)
}

/// Whether `plate` is a plate of type `ty`.
#[must_use]
pub fn plate_matches(plate: &str, ty: PlateType) -> bool {
    let patterns: &[Regex] = match ty {
        PlateType::Car => &CAR,
        PlateType::Motorcycle => &MOTORCYCLE,
        PlateType::Electric => &ELECTRIC,
        PlateType::Any => return detect_plate_type(plate).is_some(),
    };
    patterns.iter().any(|p| p.is_match(plate))
}

// ============================================================================
// PASSPORTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PassportType {
    Ordinary,
    Diplomatic,
    Official,
    TravelDocument,
    #[default]
    Any,
}

impl PassportType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PassportType::Ordinary => "ordinary",
            PassportType::Diplomatic => "diplomatic",
            PassportType::Official => "official",
            PassportType::TravelDocument => "travelDocument",
            PassportType::Any => "any",
        }
    }
}

static PASSPORTS: LazyLock<[(PassportType, Regex); 4]> = LazyLock::new(|| {
    [
        (PassportType::Ordinary, Regex::new(r"^\d{9}$").unwrap()),
        (PassportType::Diplomatic, Regex::new(r"^X\d{8}$").unwrap()),
        (PassportType::Official, Regex::new(r"^Y\d{8}$").unwrap()),
        (PassportType::TravelDocument, Regex::new(r"^[A-Z]\d{8}$").unwrap()),
    ]
});

/// The first passport type `number` matches.
#[must_use]
pub fn detect_passport_type(number: &str) -> Option<PassportType> {
    PASSPORTS
        .iter()
        .find(|(_, pattern)| pattern.is_match(number))
        .map(|(ty, _)| *ty)
}

/// Whether `number` is a passport number of type `ty`.
#[must_use]
pub fn passport_matches(number: &str, ty: PassportType) -> bool {
    match ty {
        PassportType::Any => detect_passport_type(number).is_some(),
        ty => PASSPORTS
            .iter()
            .any(|(candidate, pattern)| *candidate == ty && pattern.is_match(number)),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ABC-1234", Some(PlateType::Car))]
    #[case("AB-1234", Some(PlateType::Car))]
    #[case("1234-AB", Some(PlateType::Car))]
    #[case("ABC-123", Some(PlateType::Motorcycle))]
    #[case("123ABC", Some(PlateType::Motorcycle))]
    #[case("EAA-1234", Some(PlateType::Electric))]
    #[case("A-1234", None)]
    fn plates(#[case] plate: &str, #[case] expected: Option<PlateType>) {
        assert_eq!(detect_plate_type(plate), expected);
    }

    #[test]
    fn electric_is_not_a_car_plate() {
        assert!(!plate_matches("EAA-1234", PlateType::Car));
        assert!(plate_matches("EAA-1234", PlateType::Electric));
        assert!(plate_matches("EAA-1234", PlateType::Any));
    }

    #[rstest]
    #[case("123456789", Some(PassportType::Ordinary))]
    #[case("X12345678", Some(PassportType::Diplomatic))]
    #[case("Y12345678", Some(PassportType::Official))]
    #[case("A12345678", Some(PassportType::TravelDocument))]
    #[case("12345678", None)]
    fn passports(#[case] number: &str, #[case] expected: Option<PassportType>) {
        assert_eq!(detect_passport_type(number), expected);
    }

    #[test]
    fn diplomatic_number_is_not_ordinary() {
        assert!(!passport_matches("X12345678", PassportType::Ordinary));
        assert!(passport_matches("X12345678", PassportType::TravelDocument));
    }
}

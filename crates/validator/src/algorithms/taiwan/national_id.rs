//! Taiwan national ID and resident certificate numbers.
//!
//! Three layouts share one weighting primitive:
//!
//! | kind           | layout                      | second character |
//! |----------------|-----------------------------|------------------|
//! | citizen        | `A123456789`                | `1` or `2`       |
//! | new resident   | `A800000014`                | `8` or `9`       |
//! | old resident   | `AA00000018`                | `A`–`D`          |

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static CITIZEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][12]\d{8}$").unwrap());
static NEW_RESIDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][89]\d{8}$").unwrap());
static OLD_RESIDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][A-D]\d{8}$").unwrap());

/// Weights for the 10-digit sequence (two letter digits + eight ID digits);
/// the check digit is added with weight 1.
const WEIGHTS: [u32; 10] = [1, 9, 8, 7, 6, 5, 4, 3, 2, 1];

/// Which IDs a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NationalIdType {
    Citizen,
    /// Old and new resident certificate formats.
    Resident,
    #[default]
    Both,
}

/// The concrete layout of a well-formed ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NationalIdKind {
    Citizen,
    NewResident,
    OldResident,
}

impl NationalIdKind {
    #[must_use]
    pub fn accepted_by(self, ty: NationalIdType) -> bool {
        match ty {
            NationalIdType::Both => true,
            NationalIdType::Citizen => self == NationalIdKind::Citizen,
            NationalIdType::Resident => self != NationalIdKind::Citizen,
        }
    }
}

/// The official two-digit code of a leading letter.
///
/// The codes are not alphabetical past `H`: `I`, `O`, `W`, `Z` and friends
/// were assigned later.
#[must_use]
pub const fn letter_code(letter: u8) -> Option<u32> {
    Some(match letter {
        b'A' => 10,
        b'B' => 11,
        b'C' => 12,
        b'D' => 13,
        b'E' => 14,
        b'F' => 15,
        b'G' => 16,
        b'H' => 17,
        b'I' => 34,
        b'J' => 18,
        b'K' => 19,
        b'L' => 20,
        b'M' => 21,
        b'N' => 22,
        b'O' => 35,
        b'P' => 23,
        b'Q' => 24,
        b'R' => 25,
        b'S' => 26,
        b'T' => 27,
        b'U' => 28,
        b'V' => 29,
        b'W' => 32,
        b'X' => 30,
        b'Y' => 31,
        b'Z' => 33,
        _ => return None,
    })
}

fn weighted_ok(sequence: [u32; 10], check: u32) -> bool {
    let sum: u32 = sequence.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum::<u32>() + check;
    sum % 10 == 0
}

fn digit(b: u8) -> Option<u32> {
    char::from(b).to_digit(10)
}

/// Fills `slots` from `digits`; `false` when any byte is not an ASCII digit.
fn fill_digits(slots: &mut [u32], digits: &[u8]) -> bool {
    for (slot, &b) in slots.iter_mut().zip(digits) {
        let Some(d) = digit(b) else {
            return false;
        };
        *slot = d;
    }
    true
}

/// Citizen and new-resident layout: letter code digits, then the first
/// eight digits; the ninth digit checks.
fn numeric_checksum(id: &[u8]) -> bool {
    let Some(code) = letter_code(id[0]) else {
        return false;
    };
    let mut sequence = [0; 10];
    sequence[0] = code / 10;
    sequence[1] = code % 10;
    if !fill_digits(&mut sequence[2..], &id[1..9]) {
        return false;
    }
    digit(id[9]).is_some_and(|check| weighted_ok(sequence, check))
}

/// Old-resident layout: the second letter contributes the last digit of
/// its own letter code in place of a gender digit.
fn old_resident_checksum(id: &[u8]) -> bool {
    let (Some(area), Some(gender)) = (letter_code(id[0]), letter_code(id[1])) else {
        return false;
    };
    let mut sequence = [0; 10];
    sequence[0] = area / 10;
    sequence[1] = area % 10;
    sequence[2] = gender % 10;
    if !fill_digits(&mut sequence[3..], &id[2..9]) {
        return false;
    }
    digit(id[9]).is_some_and(|check| weighted_ok(sequence, check))
}

/// The layout `id` follows, ignoring the checksum.
#[must_use]
pub fn national_id_layout(id: &str) -> Option<NationalIdKind> {
    if CITIZEN.is_match(id) {
        Some(NationalIdKind::Citizen)
    } else if NEW_RESIDENT.is_match(id) {
        Some(NationalIdKind::NewResident)
    } else if OLD_RESIDENT.is_match(id) {
        Some(NationalIdKind::OldResident)
    } else {
        None
    }
}

/// Verifies the check digit of an ID whose layout is `kind`.
#[must_use]
pub fn national_id_checksum(id: &str, kind: NationalIdKind) -> bool {
    let bytes = id.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    match kind {
        NationalIdKind::Citizen | NationalIdKind::NewResident => numeric_checksum(bytes),
        NationalIdKind::OldResident => old_resident_checksum(bytes),
    }
}

/// The kind of a valid ID (layout and checksum), upper-casing first.
#[must_use]
pub fn detect_national_id_kind(id: &str) -> Option<NationalIdKind> {
    let id = id.trim().to_ascii_uppercase();
    national_id_layout(&id).filter(|&kind| national_id_checksum(&id, kind))
}

/// Whether `id` is a valid ID of an accepted type.
///
/// ```
/// use formosa_validator::algorithms::taiwan::{NationalIdType, validate_taiwan_national_id};
///
/// assert!(validate_taiwan_national_id("A123456789", NationalIdType::Citizen));
/// assert!(!validate_taiwan_national_id("A123456789", NationalIdType::Resident));
/// ```
#[must_use]
pub fn validate_taiwan_national_id(id: &str, ty: NationalIdType) -> bool {
    detect_national_id_kind(id).is_some_and(|kind| kind.accepted_by(ty))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("A123456789", Some(NationalIdKind::Citizen))]
    #[case("F131047655", Some(NationalIdKind::Citizen))]
    #[case("B223456782", Some(NationalIdKind::Citizen))]
    #[case("a123456789", Some(NationalIdKind::Citizen))]
    #[case("A800000014", Some(NationalIdKind::NewResident))]
    #[case("A900000016", Some(NationalIdKind::NewResident))]
    #[case("B801234560", Some(NationalIdKind::NewResident))]
    #[case("AA00000018", Some(NationalIdKind::OldResident))]
    #[case("FC12345674", Some(NationalIdKind::OldResident))]
    #[case("AB12345677", Some(NationalIdKind::OldResident))]
    #[case("AD00000005", Some(NationalIdKind::OldResident))]
    #[case("A123456788", None)]
    #[case("A323456789", None)]
    #[case("AE00000018", None)]
    #[case("A12345678", None)]
    fn detects_kinds(#[case] id: &str, #[case] expected: Option<NationalIdKind>) {
        assert_eq!(detect_national_id_kind(id), expected);
    }

    #[test]
    fn type_filter() {
        assert!(validate_taiwan_national_id("A800000014", NationalIdType::Resident));
        assert!(validate_taiwan_national_id("AA00000018", NationalIdType::Resident));
        assert!(!validate_taiwan_national_id("AA00000018", NationalIdType::Citizen));
        assert!(validate_taiwan_national_id("A123456789", NationalIdType::Both));
    }

    #[rstest]
    #[case("A 23456789", NationalIdKind::Citizen)]
    #[case("A12345678 ", NationalIdKind::NewResident)]
    #[case("AA/0000018", NationalIdKind::OldResident)]
    #[case("A1234567\u{e9}", NationalIdKind::Citizen)]
    fn checksum_rejects_non_digits(#[case] id: &str, #[case] kind: NationalIdKind) {
        assert!(!national_id_checksum(id, kind));
    }

    #[test]
    fn every_letter_has_a_unique_code() {
        let mut codes: Vec<u32> = (b'A'..=b'Z').filter_map(letter_code).collect();
        assert_eq!(codes.len(), 26);
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, (10..=35).collect::<Vec<_>>());
    }
}

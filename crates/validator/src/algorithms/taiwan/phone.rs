//! Taiwan mobile and landline numbers.
//!
//! Landlines are table driven: every area code fixes the total digit count
//! (area code included) and which digits a subscriber number may start
//! with. Several codes share a prefix with a shorter one (`037` vs `03`),
//! so every matching row is tried.

use std::sync::LazyLock;

use regex::Regex;

static MOBILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^09\d{8}$").unwrap());

/// One row of the landline area-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaCode {
    pub code: &'static str,
    pub region: &'static str,
    /// Total digits including the area code.
    pub digits: usize,
    /// Allowed first digits of the subscriber number.
    pub leading: &'static [u8],
}

const fn area(code: &'static str, region: &'static str, digits: usize, leading: &'static [u8]) -> AreaCode {
    AreaCode {
        code,
        region,
        digits,
        leading,
    }
}

/// Landline area codes, longest code first.
pub const AREA_CODES: &[AreaCode] = &[
    area("0826", "Kinmen (Wuqiu)", 9, b"6"),
    area("0836", "Lienchiang (Matsu)", 9, b"2568"),
    area("037", "Miaoli", 9, b"23456789"),
    area("049", "Nantou", 10, b"23456789"),
    area("082", "Kinmen", 9, b"23567"),
    area("089", "Taitung", 9, b"235678"),
    area("02", "Taipei / New Taipei / Keelung", 10, b"235678"),
    area("03", "Taoyuan / Hsinchu / Yilan / Hualien", 9, b"2345689"),
    area("04", "Taichung", 10, b"2"),
    area("04", "Changhua", 9, b"78"),
    area("05", "Chiayi / Yunlin", 9, b"235678"),
    area("06", "Tainan / Penghu", 9, b"2345679"),
    area("07", "Kaohsiung", 9, b"235678"),
    area("08", "Pingtung", 9, b"78"),
];

/// Removes separators and rewrites a `+886` country code to the trunk `0`.
#[must_use]
pub fn normalize_phone(input: &str) -> String {
    let compact: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect();
    match compact.strip_prefix("+886") {
        Some(rest) => {
            let rest = rest.strip_prefix('0').unwrap_or(rest);
            format!("0{rest}")
        }
        None => compact,
    }
}

/// Whether a normalized number is a mobile number (`09` + 8 digits).
#[must_use]
pub fn is_mobile(number: &str) -> bool {
    MOBILE.is_match(number)
}

/// The table row a normalized landline number matches, if any.
#[must_use]
pub fn landline_area(number: &str) -> Option<&'static AreaCode> {
    if !number.bytes().all(|b| b.is_ascii_digit()) || number.starts_with("09") {
        return None;
    }
    AREA_CODES.iter().find(|row| {
        number.len() == row.digits
            && number
                .strip_prefix(row.code)
                .and_then(|subscriber| subscriber.bytes().next())
                .is_some_and(|first| row.leading.contains(&first))
    })
}

/// Whether `input` is a Taiwan mobile number; separators and `+886` allowed.
#[must_use]
pub fn validate_taiwan_mobile(input: &str) -> bool {
    is_mobile(&normalize_phone(input))
}

/// Whether `input` is a Taiwan landline number.
///
/// ```
/// use formosa_validator::algorithms::taiwan::validate_taiwan_tel;
///
/// assert!(validate_taiwan_tel("02-2345-6789"));
/// assert!(!validate_taiwan_tel("0912-345-678"));
/// ```
#[must_use]
pub fn validate_taiwan_tel(input: &str) -> bool {
    landline_area(&normalize_phone(input)).is_some()
}

/// Fax numbers follow the landline plan.
#[must_use]
pub fn validate_taiwan_fax(input: &str) -> bool {
    validate_taiwan_tel(input)
}

//! Taiwan postal codes: 3-digit, 3+2 and 3+3 formats.

use serde::{Deserialize, Serialize};

/// Accepted postal-code layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PostalFormat {
    #[serde(rename = "3")]
    ThreeDigit,
    #[serde(rename = "3+2")]
    FiveDigit,
    #[serde(rename = "3+3")]
    SixDigit,
    #[default]
    #[serde(rename = "any")]
    Any,
}

impl PostalFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PostalFormat::ThreeDigit => "3",
            PostalFormat::FiveDigit => "3+2",
            PostalFormat::SixDigit => "3+3",
            PostalFormat::Any => "any",
        }
    }

    fn accepts(self, digits: usize) -> bool {
        match self {
            PostalFormat::ThreeDigit => digits == 3,
            PostalFormat::FiveDigit => digits == 5,
            PostalFormat::SixDigit => digits == 6,
            PostalFormat::Any => matches!(digits, 3 | 5 | 6),
        }
    }
}

/// A split postal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostalCode {
    pub prefix: u16,
    /// Two or three trailing digits, if present.
    pub suffix: Option<(u16, usize)>,
}

/// Official 3-digit prefixes by county, as inclusive ranges.
pub const POSTAL_PREFIXES: &[(&str, &[(u16, u16)])] = &[
    ("Taipei City", &[(100, 100), (103, 106), (108, 108), (110, 112), (114, 116)]),
    ("Keelung City", &[(200, 206)]),
    ("Lienchiang County", &[(209, 212)]),
    (
        "New Taipei City",
        &[(207, 208), (220, 224), (226, 228), (231, 239), (241, 244), (247, 249), (251, 253)],
    ),
    ("Yilan County", &[(260, 270), (272, 272)]),
    ("Hsinchu City", &[(300, 300)]),
    ("Hsinchu County", &[(302, 308), (310, 315)]),
    ("Taoyuan City", &[(320, 320), (324, 328), (330, 330), (333, 338)]),
    ("Miaoli County", &[(350, 354), (356, 358), (360, 369)]),
    (
        "Taichung City",
        &[(400, 404), (406, 408), (411, 414), (420, 424), (426, 429), (432, 439)],
    ),
    ("Changhua County", &[(500, 500), (502, 516), (520, 528), (530, 530)]),
    ("Nantou County", &[(540, 542), (544, 546), (551, 553), (555, 558)]),
    ("Chiayi City", &[(600, 600)]),
    ("Chiayi County", &[(602, 608), (611, 616), (621, 625)]),
    ("Yunlin County", &[(630, 638), (640, 640), (643, 643), (646, 649), (651, 655)]),
    ("Tainan City", &[(700, 702), (704, 704), (708, 727), (730, 737), (741, 745)]),
    (
        "Kaohsiung City",
        &[(800, 807), (811, 815), (820, 833), (840, 840), (842, 849), (851, 852)],
    ),
    ("South China Sea Islands", &[(817, 817), (819, 819)]),
    ("Penghu County", &[(880, 885)]),
    ("Kinmen County", &[(890, 894), (896, 896)]),
    ("Pingtung County", &[(900, 909), (911, 913), (920, 929), (931, 932), (940, 947)]),
    ("Taitung County", &[(950, 959), (961, 966)]),
    ("Hualien County", &[(970, 979), (981, 983)]),
];

/// Assigned 3-digit suffix ranges for prefixes with a published range;
/// other prefixes accept `001`–`999`.
pub const POSTAL_SUFFIX_RANGES: &[(u16, u16, u16)] = &[
    (100, 1, 280),
    (103, 1, 140),
    (104, 1, 220),
    (105, 1, 210),
    (106, 1, 280),
    (110, 1, 230),
    (300, 1, 200),
    (400, 1, 170),
    (700, 1, 130),
    (800, 1, 150),
];

/// The county an official prefix belongs to.
#[must_use]
pub fn postal_county(prefix: u16) -> Option<&'static str> {
    POSTAL_PREFIXES
        .iter()
        .find(|(_, ranges)| ranges.iter().any(|&(lo, hi)| (lo..=hi).contains(&prefix)))
        .map(|(county, _)| *county)
}

/// Splits `input` (`100`, `10001`, `100-01`, `100001`, `100-001`) in the
/// given format. Only ASCII digits and a single dash after the prefix are
/// accepted.
#[must_use]
pub fn split_postal_code(input: &str, format: PostalFormat) -> Option<PostalCode> {
    let digits = match input.split_once('-') {
        Some((head, tail)) if head.len() == 3 && !tail.is_empty() => format!("{head}{tail}"),
        Some(_) => return None,
        None => input.to_string(),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) || !format.accepts(digits.len()) {
        return None;
    }

    let prefix = digits[..3].parse().ok()?;
    let suffix = match digits.len() {
        3 => None,
        n => Some((digits[3..].parse().ok()?, n - 3)),
    };
    Some(PostalCode { prefix, suffix })
}

/// Whether the suffix falls inside the assigned range of its prefix.
///
/// Two-digit suffixes are compared by their leading digits, so `100-28`
/// covers `280`–`289`.
#[must_use]
pub fn suffix_in_range(code: PostalCode) -> bool {
    let Some((suffix, width)) = code.suffix else {
        return true;
    };
    let (lo, hi) = POSTAL_SUFFIX_RANGES
        .iter()
        .find(|(prefix, _, _)| *prefix == code.prefix)
        .map_or((1, 999), |&(_, lo, hi)| (lo, hi));

    if width == 2 {
        let (first, last) = (suffix * 10, suffix * 10 + 9);
        suffix > 0 && first <= hi && last >= lo
    } else {
        (lo..=hi).contains(&suffix)
    }
}

/// Whether `input` is a postal code with an official prefix, in any format.
///
/// ```
/// use formosa_validator::algorithms::taiwan::validate_taiwan_postal_code;
///
/// assert!(validate_taiwan_postal_code("100"));
/// assert!(validate_taiwan_postal_code("106-001"));
/// assert!(!validate_taiwan_postal_code("101"));
/// ```
#[must_use]
pub fn validate_taiwan_postal_code(input: &str) -> bool {
    split_postal_code(input.trim(), PostalFormat::Any)
        .is_some_and(|code| postal_county(code.prefix).is_some() && code.suffix.is_none_or(|(s, _)| s > 0))
}

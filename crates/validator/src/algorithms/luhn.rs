//! Luhn checksum and card-brand detection.

use serde::{Deserialize, Serialize};

/// Luhn (mod 10) check over an ASCII digit string.
///
/// Non-digit input and the empty string fail.
///
/// ```
/// use formosa_validator::algorithms::luhn::luhn_valid;
///
/// assert!(luhn_valid("4111111111111111"));
/// assert!(!luhn_valid("4111111111111112"));
/// ```
#[must_use]
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

// ============================================================================
// CARD BRANDS
// ============================================================================

/// A payment card brand; `Any` means no known brand matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
    Jcb,
    DinersClub,
    UnionPay,
    Any,
}

impl CardType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Visa => "visa",
            CardType::Mastercard => "mastercard",
            CardType::Amex => "amex",
            CardType::Discover => "discover",
            CardType::Jcb => "jcb",
            CardType::DinersClub => "dinersClub",
            CardType::UnionPay => "unionPay",
            CardType::Any => "any",
        }
    }

    /// Card lengths this brand issues; `Any` accepts every length.
    #[must_use]
    pub fn lengths(self) -> &'static [usize] {
        BRANDS
            .iter()
            .find(|b| b.brand == self)
            .map_or(&[], |b| b.lengths)
    }
}

struct Brand {
    brand: CardType,
    /// `(prefix digits, low, high)`, inclusive.
    prefixes: &'static [(usize, u32, u32)],
    lengths: &'static [usize],
}

const BRANDS: &[Brand] = &[
    Brand {
        brand: CardType::Visa,
        prefixes: &[(1, 4, 4)],
        lengths: &[13, 16, 19],
    },
    Brand {
        brand: CardType::Mastercard,
        prefixes: &[(2, 51, 55), (4, 2221, 2720)],
        lengths: &[16],
    },
    Brand {
        brand: CardType::Amex,
        prefixes: &[(2, 34, 34), (2, 37, 37)],
        lengths: &[15],
    },
    Brand {
        brand: CardType::Discover,
        prefixes: &[(4, 6011, 6011), (6, 622126, 622925), (3, 644, 649), (2, 65, 65)],
        lengths: &[16, 17, 18, 19],
    },
    Brand {
        brand: CardType::Jcb,
        prefixes: &[(4, 3528, 3589)],
        lengths: &[16, 17, 18, 19],
    },
    Brand {
        brand: CardType::DinersClub,
        prefixes: &[(3, 300, 305), (2, 36, 36), (2, 38, 39), (4, 3095, 3095)],
        lengths: &[14, 15, 16, 17, 18, 19],
    },
    Brand {
        brand: CardType::UnionPay,
        prefixes: &[(2, 62, 62)],
        lengths: &[16, 17, 18, 19],
    },
];

/// Strips spaces and dashes.
#[must_use]
pub fn strip_card_separators(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}

/// Longest-prefix brand match; `CardType::Any` if nothing matches.
///
/// Only the prefix is examined; length and checksum are not.
#[must_use]
pub fn detect_brand(digits: &str) -> CardType {
    let mut best: Option<(usize, CardType)> = None;

    for brand in BRANDS {
        for &(len, lo, hi) in brand.prefixes {
            let Some(prefix) = digits.get(..len).and_then(|p| p.parse::<u32>().ok()) else {
                continue;
            };
            if (lo..=hi).contains(&prefix) && best.is_none_or(|(best_len, _)| len > best_len) {
                best = Some((len, brand.brand));
            }
        }
    }

    best.map_or(CardType::Any, |(_, brand)| brand)
}

/// Card-number check: separators stripped, 13–19 digits, Luhn.
#[must_use]
pub fn validate_credit_card(input: &str) -> bool {
    let digits = strip_card_separators(input);
    (13..=19).contains(&digits.len()) && luhn_valid(&digits)
}

/// Brand of a card number after stripping separators.
#[must_use]
pub fn detect_card_type(input: &str) -> CardType {
    detect_brand(&strip_card_separators(input))
}

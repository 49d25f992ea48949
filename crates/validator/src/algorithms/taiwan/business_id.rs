//! Taiwan unified business number (統一編號) check.

const WEIGHTS: [u32; 8] = [1, 2, 1, 2, 1, 2, 4, 1];

fn digit_sum(n: u32) -> u32 {
    n / 10 + n % 10
}

/// Weighted digit-sum of an 8-digit number, or `None` for other input.
fn weighted_total(id: &str) -> Option<(u32, u8)> {
    let bytes = id.as_bytes();
    if bytes.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let total = bytes
        .iter()
        .zip(WEIGHTS)
        .map(|(&b, w)| digit_sum(u32::from(b - b'0') * w))
        .sum();
    Some((total, bytes[6]))
}

/// Checks a business ID against the current divisor (5) or, with
/// `legacy_rule`, the pre-2023 divisor (10).
///
/// When the seventh digit is `7` its weighted product (28) is ambiguous, and
/// `total + 1` divisible by the divisor is accepted as well.
#[must_use]
pub fn business_id_checksum(id: &str, legacy_rule: bool) -> bool {
    let Some((total, seventh)) = weighted_total(id) else {
        return false;
    };
    let divisor = if legacy_rule { 10 } else { 5 };
    total % divisor == 0 || (seventh == b'7' && (total + 1) % divisor == 0)
}

/// Whether `id` is a valid 8-digit business ID under the current rule.
///
/// ```
/// use formosa_validator::algorithms::taiwan::validate_taiwan_business_id;
///
/// assert!(validate_taiwan_business_id("12345675"));
/// assert!(!validate_taiwan_business_id("12345672"));
/// ```
#[must_use]
pub fn validate_taiwan_business_id(id: &str) -> bool {
    business_id_checksum(id.trim(), false)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("12345675", true)]
    #[case("12345670", true)]
    #[case("04595257", true)]
    #[case("12345672", false)]
    #[case("12345673", false)]
    #[case("12345674", false)]
    #[case("1234567", false)]
    #[case("1234567a", false)]
    fn current_rule(#[case] id: &str, #[case] ok: bool) {
        assert_eq!(validate_taiwan_business_id(id), ok);
    }

    #[test]
    fn legacy_rule_is_stricter() {
        assert!(business_id_checksum("04595257", true));
        assert!(business_id_checksum("12345675", true));
        assert!(!business_id_checksum("12345670", true));
    }
}

//! Taiwan bank accounts: 3-digit bank code + 10–14 digit account number.

/// Bank codes and names.
pub const BANK_CODES: &[(&str, &str)] = &[
    ("004", "臺灣銀行"),
    ("005", "臺灣土地銀行"),
    ("006", "合作金庫商業銀行"),
    ("007", "第一商業銀行"),
    ("008", "華南商業銀行"),
    ("009", "彰化商業銀行"),
    ("011", "上海商業儲蓄銀行"),
    ("012", "台北富邦商業銀行"),
    ("013", "國泰世華商業銀行"),
    ("017", "兆豐國際商業銀行"),
    ("021", "花旗(台灣)商業銀行"),
    ("048", "王道商業銀行"),
    ("050", "臺灣中小企業銀行"),
    ("052", "渣打國際商業銀行"),
    ("053", "台中商業銀行"),
    ("054", "京城商業銀行"),
    ("081", "滙豐(台灣)商業銀行"),
    ("101", "瑞興商業銀行"),
    ("102", "華泰商業銀行"),
    ("103", "臺灣新光商業銀行"),
    ("108", "陽信商業銀行"),
    ("118", "板信商業銀行"),
    ("147", "三信商業銀行"),
    ("700", "中華郵政"),
    ("803", "聯邦商業銀行"),
    ("805", "遠東國際商業銀行"),
    ("806", "元大商業銀行"),
    ("807", "永豐商業銀行"),
    ("808", "玉山商業銀行"),
    ("809", "凱基商業銀行"),
    ("810", "星展(台灣)商業銀行"),
    ("812", "台新國際商業銀行"),
    ("816", "安泰商業銀行"),
    ("822", "中國信託商業銀行"),
    ("823", "將來商業銀行"),
    ("824", "連線商業銀行"),
    ("826", "樂天國際商業銀行"),
];

/// Account-number length bounds, inclusive.
pub const ACCOUNT_DIGITS: std::ops::RangeInclusive<usize> = 10..=14;

/// The name of a known bank code.
#[must_use]
pub fn bank_name(code: &str) -> Option<&'static str> {
    BANK_CODES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// A bank account split into its two parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    pub bank_code: String,
    pub account: String,
}

/// Splits `BBB-ACCOUNT`, `BBB ACCOUNT` or the concatenated digits.
///
/// Only the shape is checked: a 3-digit code and an all-digit remainder.
#[must_use]
pub fn split_bank_account(input: &str) -> Option<BankAccount> {
    let input = input.trim();
    let (code, account) = match input.split_once(['-', ' ']) {
        Some((code, account)) => (code.trim(), account.trim().replace(['-', ' '], "")),
        None => (input.get(..3)?, input.get(3..)?.to_string()),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    (code.len() == 3 && all_digits(code) && all_digits(&account)).then(|| BankAccount {
        bank_code: code.to_string(),
        account,
    })
}

/// Whether `input` names a known bank and a 10–14 digit account.
///
/// ```
/// use formosa_validator::algorithms::taiwan::validate_taiwan_bank_account;
///
/// assert!(validate_taiwan_bank_account("004-1234567890"));
/// assert!(!validate_taiwan_bank_account("999-1234567890"));
/// ```
#[must_use]
pub fn validate_taiwan_bank_account(input: &str) -> bool {
    split_bank_account(input).is_some_and(|acct| {
        bank_name(&acct.bank_code).is_some() && ACCOUNT_DIGITS.contains(&acct.account.len())
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("004-1234567890", true)]
    #[case("0041234567890", true)]
    #[case("822 12345678901234", true)]
    #[case("700-0001234-5678901", true)]
    #[case("004-123456789", false)]
    #[case("004-123456789012345", false)]
    #[case("999-1234567890", false)]
    #[case("04-1234567890", false)]
    #[case("abc-1234567890", false)]
    fn accounts(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(validate_taiwan_bank_account(input), ok);
    }

    #[test]
    fn names() {
        assert_eq!(bank_name("700"), Some("中華郵政"));
        assert_eq!(bank_name("000"), None);
    }
}

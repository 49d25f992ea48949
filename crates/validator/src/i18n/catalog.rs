//! Built-in message templates for `en` and `zh-TW`.
//!
//! Each locale has a common table and per-field tables; a per-field entry
//! shadows the common one for that field kind only.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::Locale;
use crate::foundation::MessageKey::{self, *};

type Table = &'static [(MessageKey, &'static str)];

struct Catalog {
    common: HashMap<MessageKey, &'static str>,
    fields: HashMap<&'static str, HashMap<MessageKey, &'static str>>,
}

impl Catalog {
    fn build(common: Table, fields: &'static [(&'static str, Table)]) -> Self {
        Self {
            common: common.iter().copied().collect(),
            fields: fields
                .iter()
                .map(|(kind, table)| (*kind, table.iter().copied().collect()))
                .collect(),
        }
    }

    fn get(&self, kind: &str, key: MessageKey) -> Option<&'static str> {
        self.fields
            .get(kind)
            .and_then(|table| table.get(&key))
            .or_else(|| self.common.get(&key))
            .copied()
    }
}

static CATALOGS: LazyLock<HashMap<Locale, Catalog>> = LazyLock::new(|| {
    HashMap::from([
        (Locale::EN, Catalog::build(EN_COMMON, EN_FIELDS)),
        (Locale::ZH_TW, Catalog::build(ZH_TW_COMMON, ZH_TW_FIELDS)),
    ])
});

/// The built-in template for `key` on a `kind` field in `locale`, without
/// any fallback to another locale.
#[must_use]
pub fn builtin_template(locale: &Locale, kind: &str, key: MessageKey) -> Option<&'static str> {
    CATALOGS.get(locale).and_then(|catalog| catalog.get(kind, key))
}

// ============================================================================
// EN
// ============================================================================

const EN_COMMON: Table = &[
    (Required, "Required"),
    (Invalid, "Invalid value"),
    (NotInWhitelist, "Value is not in the allowed list"),
    (Min, "Must be at least ${min}"),
    (Max, "Must be at most ${max}"),
    (MinLength, "Must be at least ${min} characters"),
    (MaxLength, "Must be at most ${max} characters"),
    (StartsWith, "Must start with ${prefix}"),
    (EndsWith, "Must end with ${suffix}"),
    (Includes, "Must include ${include}"),
    (Excludes, "Must not contain ${exclude}"),
    (Checksum, "Checksum verification failed"),
    (ShouldBeTrue, "Must be true"),
    (ShouldBeFalse, "Must be false"),
    (Integer, "Must be an integer"),
    (Float, "Must be a decimal number"),
    (Finite, "Must be a finite number"),
    (Positive, "Must be positive"),
    (Negative, "Must be negative"),
    (NonNegative, "Must not be negative"),
    (NonPositive, "Must not be positive"),
    (MultipleOf, "Must be a multiple of ${multipleOf}"),
    (Precision, "Must have at most ${precision} decimal places"),
    (Domain, "Domain ${domain} is not allowed"),
    (DomainBlacklist, "Domain ${domain} is blocked"),
    (BusinessOnly, "A business address is required"),
    (Disposable, "Disposable addresses are not allowed"),
    (Protocol, "Protocol must be one of ${protocols}"),
    (Port, "Port ${port} is not allowed"),
    (Localhost, "Localhost is not allowed"),
    (PrivateIp, "Private IP addresses are not allowed"),
    (Tld, "A top-level domain is required"),
    (Path, "A path is required"),
    (Query, "A query string is required"),
    (Fragment, "A fragment is required"),
    (NotHex, "Must be a hex color"),
    (NotRgb, "Must be an RGB color"),
    (NotHsl, "Must be an HSL color"),
    (AlphaNotAllowed, "Transparency is not allowed"),
    (Format, "Must match format ${format}"),
    (Past, "Must be in the past"),
    (Future, "Must be in the future"),
    (Today, "Must be today"),
    (NotToday, "Must not be today"),
    (Weekday, "Must be a weekday"),
    (Weekend, "Must be a weekend"),
    (Hour, "Hour ${hour} is not allowed"),
    (MinuteStep, "Minutes must be in steps of ${minuteStep}"),
    (CardType, "Card type must be one of ${cardType}"),
    (FileType, "File type must be one of ${accept}"),
    (FileExtension, "File extension ${extension} is not allowed"),
    (MinSize, "File must be at least ${minSize} bytes"),
    (MaxSize, "File must be at most ${maxSize} bytes"),
    (IdType, "ID must be of type ${idType}"),
    (Uppercase, "Must contain an uppercase letter"),
    (Lowercase, "Must contain a lowercase letter"),
    (Digits, "Must contain a digit"),
    (Special, "Must contain a special character"),
    (Repeating, "Must not repeat a character three times in a row"),
    (Sequential, "Must not contain sequential characters"),
    (Common, "This password is too common"),
    (Strength, "Password must be at least ${minStrength}"),
    (InvalidBankCode, "Unknown bank code ${bankCode}"),
    (InvalidAccountNumber, "Account number must be 10 to 14 digits"),
    (PlateType, "Must be a ${plateType} license plate"),
    (PassportType, "Must be a ${passportType} passport number"),
];

const EN_FIELDS: &[(&str, Table)] = &[
    ("boolean", &[(Invalid, "Must be a boolean")]),
    ("number", &[(Invalid, "Must be a number")]),
    ("email", &[(Invalid, "Invalid email address")]),
    ("url", &[(Invalid, "Invalid URL")]),
    ("color", &[(Invalid, "Invalid color")]),
    ("date", &[(Invalid, "Invalid date"), (Min, "Must be on or after ${min}"), (Max, "Must be on or before ${max}")]),
    ("datetime", &[(Invalid, "Invalid date and time"), (Min, "Must be at or after ${min}"), (Max, "Must be at or before ${max}")]),
    ("time", &[(Invalid, "Invalid time"), (Min, "Must be at or after ${min}"), (Max, "Must be at or before ${max}")]),
    ("creditCard", &[(Invalid, "Invalid credit card number"), (Checksum, "Invalid credit card number")]),
    ("file", &[(Invalid, "Must be a file")]),
    ("id", &[(Invalid, "Invalid ID")]),
    ("twNationalId", &[(Invalid, "Invalid Taiwan national ID"), (Checksum, "Invalid Taiwan national ID")]),
    ("twBusinessId", &[(Invalid, "Invalid Taiwan business ID"), (Checksum, "Invalid Taiwan business ID")]),
    ("twMobile", &[(Invalid, "Invalid Taiwan mobile number")]),
    ("twTel", &[(Invalid, "Invalid Taiwan telephone number")]),
    ("twFax", &[(Invalid, "Invalid Taiwan fax number")]),
    ("twPostalCode", &[(Invalid, "Invalid Taiwan postal code")]),
    ("twBankAccount", &[(Invalid, "Invalid Taiwan bank account")]),
    ("twLicensePlate", &[(Invalid, "Invalid Taiwan license plate")]),
    ("twPassport", &[(Invalid, "Invalid Taiwan passport number")]),
];

// ============================================================================
// ZH-TW
// ============================================================================

const ZH_TW_COMMON: Table = &[
    (Required, "必填"),
    (Invalid, "無效的值"),
    (NotInWhitelist, "不在允許的清單中"),
    (Min, "不得小於 ${min}"),
    (Max, "不得大於 ${max}"),
    (MinLength, "長度至少 ${min} 個字元"),
    (MaxLength, "長度最多 ${max} 個字元"),
    (StartsWith, "必須以 ${prefix} 開頭"),
    (EndsWith, "必須以 ${suffix} 結尾"),
    (Includes, "必須包含 ${include}"),
    (Excludes, "不得包含 ${exclude}"),
    (Checksum, "檢查碼錯誤"),
    (ShouldBeTrue, "必須為是"),
    (ShouldBeFalse, "必須為否"),
    (Integer, "必須為整數"),
    (Float, "必須為小數"),
    (Finite, "必須為有限數值"),
    (Positive, "必須為正數"),
    (Negative, "必須為負數"),
    (NonNegative, "不得為負數"),
    (NonPositive, "不得為正數"),
    (MultipleOf, "必須為 ${multipleOf} 的倍數"),
    (Precision, "小數位數最多 ${precision} 位"),
    (Domain, "不允許的網域 ${domain}"),
    (DomainBlacklist, "網域 ${domain} 已被封鎖"),
    (BusinessOnly, "必須使用公司信箱"),
    (Disposable, "不允許使用拋棄式信箱"),
    (Protocol, "通訊協定必須為 ${protocols}"),
    (Port, "不允許的連接埠 ${port}"),
    (Localhost, "不允許使用本機位址"),
    (PrivateIp, "不允許使用私人 IP 位址"),
    (Tld, "必須包含頂級網域"),
    (Path, "必須包含路徑"),
    (Query, "必須包含查詢字串"),
    (Fragment, "必須包含片段"),
    (NotHex, "必須為十六進位色碼"),
    (NotRgb, "必須為 RGB 色彩"),
    (NotHsl, "必須為 HSL 色彩"),
    (AlphaNotAllowed, "不允許透明度"),
    (Format, "格式必須為 ${format}"),
    (Past, "必須為過去的時間"),
    (Future, "必須為未來的時間"),
    (Today, "必須為今天"),
    (NotToday, "不得為今天"),
    (Weekday, "必須為平日"),
    (Weekend, "必須為週末"),
    (Hour, "不允許的時段 ${hour} 時"),
    (MinuteStep, "分鐘必須以 ${minuteStep} 分為間隔"),
    (CardType, "卡別必須為 ${cardType}"),
    (FileType, "檔案類型必須為 ${accept}"),
    (FileExtension, "不允許的副檔名 ${extension}"),
    (MinSize, "檔案大小至少 ${minSize} 位元組"),
    (MaxSize, "檔案大小最多 ${maxSize} 位元組"),
    (IdType, "識別碼類型必須為 ${idType}"),
    (Uppercase, "必須包含大寫字母"),
    (Lowercase, "必須包含小寫字母"),
    (Digits, "必須包含數字"),
    (Special, "必須包含特殊字元"),
    (Repeating, "不得連續重複相同字元三次"),
    (Sequential, "不得包含連續字元"),
    (Common, "密碼過於常見"),
    (Strength, "密碼強度至少需為 ${minStrength}"),
    (InvalidBankCode, "無效的銀行代碼 ${bankCode}"),
    (InvalidAccountNumber, "帳號必須為 10 至 14 位數字"),
    (PlateType, "必須為有效的${plateType}車牌"),
    (PassportType, "必須為有效的${passportType}護照號碼"),
];

const ZH_TW_FIELDS: &[(&str, Table)] = &[
    ("boolean", &[(Invalid, "必須為布林值")]),
    ("number", &[(Invalid, "必須為數字")]),
    ("email", &[(Invalid, "無效的電子郵件地址")]),
    ("url", &[(Invalid, "無效的網址")]),
    ("color", &[(Invalid, "無效的色彩")]),
    ("date", &[(Invalid, "無效的日期"), (Min, "日期不得早於 ${min}"), (Max, "日期不得晚於 ${max}")]),
    ("datetime", &[(Invalid, "無效的日期時間"), (Min, "時間不得早於 ${min}"), (Max, "時間不得晚於 ${max}")]),
    ("time", &[(Invalid, "無效的時間"), (Min, "時間不得早於 ${min}"), (Max, "時間不得晚於 ${max}")]),
    ("creditCard", &[(Invalid, "無效的信用卡號碼"), (Checksum, "無效的信用卡號碼")]),
    ("file", &[(Invalid, "必須為檔案")]),
    ("id", &[(Invalid, "無效的識別碼")]),
    ("twNationalId", &[(Invalid, "無效的身分證字號"), (Checksum, "無效的身分證字號")]),
    ("twBusinessId", &[(Invalid, "無效的統一編號"), (Checksum, "無效的統一編號")]),
    ("twMobile", &[(Invalid, "無效的手機號碼")]),
    ("twTel", &[(Invalid, "無效的市話號碼")]),
    ("twFax", &[(Invalid, "無效的傳真號碼")]),
    ("twPostalCode", &[(Invalid, "無效的郵遞區號")]),
    ("twBankAccount", &[(Invalid, "無效的銀行帳號")]),
    ("twLicensePlate", &[(Invalid, "無效的車牌號碼")]),
    ("twPassport", &[(Invalid, "無效的護照號碼")]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_a_template_in_both_locales() {
        for key in MessageKey::ALL {
            for locale in [Locale::EN, Locale::ZH_TW] {
                assert!(
                    builtin_template(&locale, "text", *key).is_some(),
                    "{locale} is missing {key}"
                );
            }
        }
    }

    #[test]
    fn field_table_shadows_common() {
        assert_eq!(
            builtin_template(&Locale::EN, "email", Invalid),
            Some("Invalid email address")
        );
        assert_eq!(builtin_template(&Locale::EN, "text", Invalid), Some("Invalid value"));
    }

    #[test]
    fn unknown_locale_has_no_templates() {
        assert_eq!(builtin_template(&Locale::new("fr"), "text", Required), None);
    }
}

//! Symbolic reasons a field can be rejected.
//!
//! Every rule failure carries exactly one [`MessageKey`]. The key is the
//! stable, typed signal; the human-readable text is produced later from the
//! locale catalogs and the caller's overrides.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! message_keys {
    ($($(#[$meta:meta])* $variant:ident => $text:literal,)+) => {
        /// A symbolic validation failure reason.
        ///
        /// Serialized in camelCase (`notInWhitelist`, `invalidBankCode`, ...),
        /// which is also the key used in locale catalogs and `i18n` overrides.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[non_exhaustive]
        pub enum MessageKey {
            $($(#[$meta])* $variant,)+
        }

        impl MessageKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            /// The catalog key string.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $text,)+
                }
            }
        }

        impl FromStr for MessageKey {
            type Err = UnknownMessageKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(MessageKey::$variant),)+
                    other => Err(UnknownMessageKey(other.to_string())),
                }
            }
        }
    };
}

message_keys! {
    /// Empty input on a required field.
    Required => "required",
    /// Coercion or grammar failure.
    Invalid => "invalid",
    /// Whitelist-only field received an unlisted value.
    NotInWhitelist => "notInWhitelist",
    Min => "min",
    Max => "max",
    MinLength => "minLength",
    MaxLength => "maxLength",
    StartsWith => "startsWith",
    EndsWith => "endsWith",
    Includes => "includes",
    Excludes => "excludes",
    /// A checksum algorithm rejected an otherwise well-formed identifier.
    Checksum => "checksum",
    ShouldBeTrue => "shouldBeTrue",
    ShouldBeFalse => "shouldBeFalse",
    Integer => "integer",
    Float => "float",
    Finite => "finite",
    Positive => "positive",
    Negative => "negative",
    NonNegative => "nonNegative",
    NonPositive => "nonPositive",
    MultipleOf => "multipleOf",
    Precision => "precision",
    Domain => "domain",
    DomainBlacklist => "domainBlacklist",
    BusinessOnly => "businessOnly",
    Disposable => "disposable",
    Protocol => "protocol",
    Port => "port",
    Localhost => "localhost",
    PrivateIp => "privateIp",
    Tld => "tld",
    Path => "path",
    Query => "query",
    Fragment => "fragment",
    NotHex => "notHex",
    NotRgb => "notRgb",
    NotHsl => "notHsl",
    AlphaNotAllowed => "alphaNotAllowed",
    Format => "format",
    Past => "past",
    Future => "future",
    Today => "today",
    NotToday => "notToday",
    Weekday => "weekday",
    Weekend => "weekend",
    Hour => "hour",
    MinuteStep => "minuteStep",
    CardType => "cardType",
    FileType => "fileType",
    FileExtension => "fileExtension",
    MinSize => "minSize",
    MaxSize => "maxSize",
    IdType => "idType",
    Uppercase => "uppercase",
    Lowercase => "lowercase",
    Digits => "digits",
    Special => "special",
    Repeating => "repeating",
    Sequential => "sequential",
    Common => "common",
    Strength => "strength",
    InvalidBankCode => "invalidBankCode",
    InvalidAccountNumber => "invalidAccountNumber",
    PlateType => "plateType",
    PassportType => "passportType",
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that names no [`MessageKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message key `{0}`")]
pub struct UnknownMessageKey(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_serde_name() {
        for key in MessageKey::ALL {
            let json = serde_json::to_value(key).unwrap();
            assert_eq!(json.as_str(), Some(key.as_str()), "{key:?}");
        }
    }

    #[test]
    fn from_str_round_trips() {
        for key in MessageKey::ALL {
            assert_eq!(key.as_str().parse::<MessageKey>().unwrap(), *key);
        }
        assert!("nope".parse::<MessageKey>().is_err());
    }
}

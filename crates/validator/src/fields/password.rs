//! Passwords.
//!
//! Passwords are never trimmed unless `trimMode` says so. Rule order:
//! `minLength` → `maxLength` → uppercase → lowercase → digits → special →
//! repeating → sequential → common/blacklist → strength.

use serde::{Deserialize, Serialize};

use super::check;
use crate::combinators::{Rules, rule_fn};
use crate::foundation::{MessageKey, Validate, ValidationError};
use crate::pipeline::{
    Common, Field, FieldKind, Prepared, TrimMode, WhitelistOrder, coerce, impl_common_options,
};
use crate::rules::{max_length, min_length};

/// Frequently leaked passwords, compared case-insensitively.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "12345678",
    "123456789",
    "1234567890",
    "password",
    "password1",
    "password123",
    "qwerty",
    "qwerty123",
    "qwertyuiop",
    "abc123",
    "111111",
    "000000",
    "iloveyou",
    "admin",
    "admin123",
    "welcome",
    "letmein",
    "monkey",
    "dragon",
    "sunshine",
    "football",
    "baseball",
    "master",
    "princess",
    "1q2w3e4r",
    "zaq12wsx",
    "passw0rd",
];

// ============================================================================
// STRENGTH
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "veryStrong",
        }
    }
}

fn is_special(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Scores a password: one point each for length ≥ 8, length ≥ 12, and
/// the presence of lowercase, uppercase, digit and special characters.
///
/// ```
/// use formosa_validator::fields::{PasswordStrength, password_strength};
///
/// assert_eq!(password_strength("abc"), PasswordStrength::Weak);
/// assert_eq!(password_strength("Abcdefgh1!xyz"), PasswordStrength::VeryStrong);
/// ```
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let score = [
        len >= 8,
        len >= 12,
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_uppercase),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_special),
    ]
    .into_iter()
    .filter(|&hit| hit)
    .count();

    match score {
        0..=2 => PasswordStrength::Weak,
        3 | 4 => PasswordStrength::Medium,
        5 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}

fn has_repeating(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Three ascending code points in a row (`abc`, `123`), case-insensitive.
fn has_sequential(password: &str) -> bool {
    let chars: Vec<u32> = password
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| u32::from(c.to_ascii_lowercase()))
        .collect();
    chars.windows(3).any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1)
}

// ============================================================================
// OPTIONS
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digits: bool,
    pub require_special: bool,
    pub no_repeating: bool,
    pub no_sequential: bool,
    pub block_common: bool,
    pub blacklist: Vec<String>,
    pub min_strength: Option<PasswordStrength>,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            min_length: None,
            max_length: None,
            require_uppercase: false,
            require_lowercase: false,
            require_digits: false,
            require_special: false,
            no_repeating: false,
            no_sequential: false,
            block_common: true,
            blacklist: Vec::new(),
            min_strength: None,
        }
    }
}

impl PasswordOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn require_uppercase(mut self) -> Self {
        self.require_uppercase = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn require_lowercase(mut self) -> Self {
        self.require_lowercase = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn require_digits(mut self) -> Self {
        self.require_digits = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn require_special(mut self) -> Self {
        self.require_special = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn no_repeating(mut self) -> Self {
        self.no_repeating = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn no_sequential(mut self) -> Self {
        self.no_sequential = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn block_common(mut self, block: bool) -> Self {
        self.block_common = block;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn blacklist(mut self, words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.blacklist = words.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_strength(mut self, strength: PasswordStrength) -> Self {
        self.min_strength = Some(strength);
        self
    }
}

impl_common_options!(PasswordOptions => String);

// ============================================================================
// KIND
// ============================================================================

#[derive(Debug)]
pub struct PasswordKind {
    options: PasswordOptions,
    rules: Rules<str>,
}

impl FieldKind for PasswordKind {
    type Value = String;
    type Output = String;
    type Options = PasswordOptions;

    const KIND: &'static str = "password";
    const WHITELIST_ORDER: WhitelistOrder = WhitelistOrder::AfterTransform;
    const TRIM: TrimMode = TrimMode::None;

    fn options(&self) -> &PasswordOptions {
        &self.options
    }

    fn common(&self) -> &Common<String> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<String, ValidationError> {
        coerce::coerce_text(input)
    }

    fn check(&self, value: &String) -> Result<(), ValidationError> {
        self.rules.validate(value)
    }

    fn finish(&self, value: String) -> String {
        value
    }

    fn listed_text(value: &String) -> Option<&str> {
        Some(value)
    }
}

/// Builds a password field.
pub fn password(required: bool, mut options: PasswordOptions) -> Field<PasswordKind> {
    options.common.required = required;

    let mut banned: Vec<String> = options.blacklist.iter().map(|w| w.to_lowercase()).collect();
    if options.block_common {
        banned.extend(COMMON_PASSWORDS.iter().map(|&w| w.to_owned()));
    }

    let rules = Rules::new()
        .push_opt(options.min_length.map(min_length))
        .push_opt(options.max_length.map(max_length))
        .push_if(options.require_uppercase, || {
            check!(MessageKey::Uppercase, |p: &str| p.chars().any(char::is_uppercase))
        })
        .push_if(options.require_lowercase, || {
            check!(MessageKey::Lowercase, |p: &str| p.chars().any(char::is_lowercase))
        })
        .push_if(options.require_digits, || {
            check!(MessageKey::Digits, |p: &str| p.chars().any(|c| c.is_ascii_digit()))
        })
        .push_if(options.require_special, || {
            check!(MessageKey::Special, |p: &str| p.chars().any(is_special))
        })
        .push_if(options.no_repeating, || check!(MessageKey::Repeating, |p: &str| !has_repeating(p)))
        .push_if(options.no_sequential, || check!(MessageKey::Sequential, |p: &str| !has_sequential(p)))
        .push_if(!banned.is_empty(), || {
            check!(MessageKey::Common, |p: &str| !banned.contains(&p.to_lowercase()))
        })
        .push_opt(options.min_strength.map(|min| {
            rule_fn(move |p: &str| {
                if password_strength(p) >= min {
                    Ok(())
                } else {
                    Err(ValidationError::new(MessageKey::Strength).with_param("minStrength", min.as_str()))
                }
            })
        }));

    Field::new(PasswordKind { options, rules })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn code(field: &Field<PasswordKind>, input: &str) -> Option<MessageKey> {
        field.parse(json!(input)).err().and_then(|e| e.code())
    }

    #[rstest]
    #[case("abc", PasswordStrength::Weak)]
    #[case("abcdefgh", PasswordStrength::Weak)]
    #[case("abcdefgh1", PasswordStrength::Medium)]
    #[case("Abcdefgh1", PasswordStrength::Medium)]
    #[case("Abcdefgh1!", PasswordStrength::Strong)]
    #[case("Abcdefgh1!xy", PasswordStrength::VeryStrong)]
    fn strength_scores(#[case] input: &str, #[case] expected: PasswordStrength) {
        assert_eq!(password_strength(input), expected);
    }

    #[rstest]
    #[case("aaab", true)]
    #[case("aabb", false)]
    fn repeating(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(has_repeating(input), expected);
    }

    #[rstest]
    #[case("xABCx", true)]
    #[case("p123", true)]
    #[case("acegi", false)]
    #[case("cba", false)]
    fn sequential(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(has_sequential(input), expected);
    }

    #[test]
    fn whitespace_is_kept() {
        let field = password(true, PasswordOptions::default());
        assert_eq!(field.parse(json!(" s3cret ")).unwrap(), Some(" s3cret ".to_string()));
    }

    #[test]
    fn rule_order() {
        let field = password(
            true,
            PasswordOptions::default()
                .min_length(8)
                .require_uppercase()
                .require_digits()
                .require_special()
                .no_repeating()
                .no_sequential()
                .blacklist(["Tr0ub4dor&3"]),
        );
        assert_eq!(code(&field, "Ab1!"), Some(MessageKey::MinLength));
        assert_eq!(code(&field, "zyxwvuts"), Some(MessageKey::Uppercase));
        assert_eq!(code(&field, "Zyxwvuts"), Some(MessageKey::Digits));
        assert_eq!(code(&field, "Zyxwvut5"), Some(MessageKey::Special));
        assert_eq!(code(&field, "Zyxwww5!"), Some(MessageKey::Repeating));
        assert_eq!(code(&field, "Zyxabc5!"), Some(MessageKey::Sequential));
        assert_eq!(code(&field, "tr0ub4dor&3"), Some(MessageKey::Uppercase));
        assert_eq!(code(&field, "TR0UB4DOR&3"), Some(MessageKey::Common));
        assert_eq!(code(&field, "Zyx9w5!q"), None);
    }

    #[test]
    fn common_passwords_are_blocked_by_default() {
        let field = password(true, PasswordOptions::default());
        assert_eq!(code(&field, "Password123"), Some(MessageKey::Common));
        let open = password(true, PasswordOptions::default().block_common(false));
        assert_eq!(code(&open, "Password123"), None);
    }

    #[test]
    fn minimum_strength() {
        let field = password(true, PasswordOptions::default().min_strength(PasswordStrength::Strong));
        assert_eq!(code(&field, "Abcdefgh1"), Some(MessageKey::Strength));
        assert_eq!(code(&field, "Abcdefgh1!"), None);
    }
}

//! Bank accounts: a 3-digit bank code plus a 10–14 digit account number.
//!
//! Rule order: shape (`invalid`) → known bank (`invalidBankCode`) →
//! allowed banks (`invalidBankCode`) → account length
//! (`invalidAccountNumber`).

use serde::Deserialize;

use super::taiwan_kind;
use crate::algorithms::taiwan::bank::ACCOUNT_DIGITS;
use crate::algorithms::taiwan::{bank_name, split_bank_account};
use crate::combinators::rule_fn;
use crate::foundation::{MessageKey, ValidateExt, ValidationError};
use crate::pipeline::{Common, Field, impl_common_options};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankAccountOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    /// Bank codes to accept; empty accepts every known bank.
    pub allowed_banks: Vec<String>,
}

impl BankAccountOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn allowed_banks(mut self, codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.allowed_banks = codes.into_iter().map(Into::into).collect();
        self
    }
}

impl_common_options!(BankAccountOptions => String);

taiwan_kind!(TwBankAccountKind(BankAccountOptions) = "twBankAccount");

/// Builds a bank-account field.
pub fn bank_account(options: BankAccountOptions) -> Field<TwBankAccountKind> {
    let allowed = options.allowed_banks.clone();
    let rules = rule_fn(move |input: &str| {
        let account = split_bank_account(input).ok_or_else(ValidationError::invalid)?;
        let known = bank_name(&account.bank_code).is_some();
        if !known || (!allowed.is_empty() && !allowed.contains(&account.bank_code)) {
            return Err(ValidationError::new(MessageKey::InvalidBankCode).with_param("bankCode", account.bank_code));
        }
        if !ACCOUNT_DIGITS.contains(&account.account.len()) {
            return Err(ValidationError::new(MessageKey::InvalidAccountNumber));
        }
        Ok(())
    })
    .into_rules();

    Field::new(TwBankAccountKind { options, rules })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::i18n;

    fn code(field: &Field<TwBankAccountKind>, input: &str) -> Option<MessageKey> {
        field.parse(json!(input)).err().and_then(|e| e.code())
    }

    #[rstest]
    #[case("004-1234567890", None)]
    #[case("0041234567890", None)]
    #[case("812 12345678901234", None)]
    #[case("04-1234567890", Some(MessageKey::Invalid))]
    #[case("abc-1234567890", Some(MessageKey::Invalid))]
    #[case("999-1234567890", Some(MessageKey::InvalidBankCode))]
    #[case("004-123456789", Some(MessageKey::InvalidAccountNumber))]
    #[case("004-123456789012345", Some(MessageKey::InvalidAccountNumber))]
    fn accounts(#[case] input: &str, #[case] expected: Option<MessageKey>) {
        let field = bank_account(BankAccountOptions::default());
        assert_eq!(code(&field, input), expected);
    }

    #[test]
    fn allowed_banks_report_the_code() {
        let _en = i18n::scoped_locale("en");
        let field = bank_account(BankAccountOptions::default().allowed_banks(["004", "812"]));
        assert_eq!(code(&field, "004-1234567890"), None);
        let error = field.parse(json!("700-1234567890")).unwrap_err();
        assert_eq!(error.message(), "Unknown bank code 700");
    }
}

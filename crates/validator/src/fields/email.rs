//! Email addresses.
//!
//! Rule order: format → allowed domains → blocked domains → business-only
//! → disposable → length → affixes → membership. Input is lower-cased by
//! default.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::text::{TextBounds, impl_text_bounds};
use crate::algorithms::network::domain_matches;
use crate::combinators::Rules;
use crate::foundation::{MessageKey, Validate, ValidationError};
use crate::pipeline::{
    Casing, Common, Field, FieldKind, Prepared, WhitelistOrder, coerce, impl_common_options,
};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .unwrap()
});

/// Free mailbox providers rejected by `businessOnly`.
pub const FREE_PROVIDERS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "yahoo.com.tw",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "msn.com",
    "icloud.com",
    "me.com",
    "aol.com",
    "protonmail.com",
    "proton.me",
    "gmx.com",
    "mail.com",
    "yandex.com",
    "qq.com",
    "163.com",
    "126.com",
    "pchome.com.tw",
    "hinet.net",
];

/// Throwaway mailbox domains rejected by `noDisposable`.
pub const DISPOSABLE_DOMAINS: &[&str] = &[
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
    "tempmail.com",
    "temp-mail.org",
    "throwawaymail.com",
    "yopmail.com",
    "trashmail.com",
    "getnada.com",
    "maildrop.cc",
    "sharklasers.com",
    "dispostable.com",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(flatten)]
    pub bounds: TextBounds,
    /// Only these domains are accepted.
    pub domains: Vec<String>,
    pub blocked_domains: Vec<String>,
    /// Domain lists also match subdomains.
    pub allow_subdomains: bool,
    pub business_only: bool,
    pub no_disposable: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            bounds: TextBounds::default(),
            domains: Vec::new(),
            blocked_domains: Vec::new(),
            allow_subdomains: true,
            business_only: false,
            no_disposable: false,
        }
    }
}

impl EmailOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn domains(mut self, domains: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn blocked_domains(mut self, domains: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.blocked_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allow_subdomains(mut self, allow: bool) -> Self {
        self.allow_subdomains = allow;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn business_only(mut self) -> Self {
        self.business_only = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn no_disposable(mut self) -> Self {
        self.no_disposable = true;
        self
    }
}

impl_common_options!(EmailOptions => String);
impl_text_bounds!(EmailOptions);

// ============================================================================
// ADDRESS RULE
// ============================================================================

/// Format and domain policy, checked on one split of the address.
#[derive(Debug, Clone)]
struct AddressRule {
    domains: Vec<String>,
    blocked: Vec<String>,
    subdomains: bool,
    business_only: bool,
    no_disposable: bool,
}

impl AddressRule {
    fn matches(&self, host: &str, domain: &str) -> bool {
        if self.subdomains {
            domain_matches(host, domain)
        } else {
            host.eq_ignore_ascii_case(domain)
        }
    }
}

fn domain_error(key: MessageKey, host: &str) -> ValidationError {
    ValidationError::new(key).with_param("domain", host)
}

impl Validate for AddressRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let local_ok = input.split_once('@').is_some_and(|(local, _)| local.len() <= 64);
        if !local_ok || input.len() > 254 || !EMAIL.is_match(input) {
            return Err(ValidationError::invalid());
        }
        let host = input.rsplit_once('@').map_or("", |(_, host)| host);

        if !self.domains.is_empty() && !self.domains.iter().any(|d| self.matches(host, d)) {
            return Err(domain_error(MessageKey::Domain, host));
        }
        if self.blocked.iter().any(|d| self.matches(host, d)) {
            return Err(domain_error(MessageKey::DomainBlacklist, host));
        }
        if self.business_only && FREE_PROVIDERS.iter().any(|d| host.eq_ignore_ascii_case(d)) {
            return Err(domain_error(MessageKey::BusinessOnly, host));
        }
        if self.no_disposable && DISPOSABLE_DOMAINS.iter().any(|d| domain_matches(host, d)) {
            return Err(domain_error(MessageKey::Disposable, host));
        }
        Ok(())
    }
}

// ============================================================================
// KIND
// ============================================================================

#[derive(Debug)]
pub struct EmailKind {
    options: EmailOptions,
    rules: Rules<str>,
}

impl FieldKind for EmailKind {
    type Value = String;
    type Output = String;
    type Options = EmailOptions;

    const KIND: &'static str = "email";
    const WHITELIST_ORDER: WhitelistOrder = WhitelistOrder::AfterTransform;
    const CASING: Casing = Casing::Lower;

    fn options(&self) -> &EmailOptions {
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

/// Builds an email field.
pub fn email(required: bool, mut options: EmailOptions) -> Field<EmailKind> {
    options.common.required = required;

    let address = AddressRule {
        domains: options.domains.clone(),
        blocked: options.blocked_domains.clone(),
        subdomains: options.allow_subdomains,
        business_only: options.business_only,
        no_disposable: options.no_disposable,
    };
    let rules = options.bounds.push_into(Rules::new().push(address));

    Field::new(EmailKind { options, rules })
}

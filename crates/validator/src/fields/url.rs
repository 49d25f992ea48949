//! URLs, parsed with the `url` crate.
//!
//! Rule order: grammar → protocol → host present → allowed domains →
//! blocked domains → localhost → private address → TLD → port → path →
//! query → fragment → length → affixes → membership.

use serde::Deserialize;
use ::url::Url;

use super::text::{TextBounds, impl_text_bounds};
use crate::algorithms::network::{domain_matches, has_tld, is_localhost, is_private_ip};
use crate::combinators::Rules;
use crate::foundation::{MessageKey, Validate, ValidationError};
use crate::pipeline::{
    Common, Field, FieldKind, Prepared, WhitelistOrder, coerce, impl_common_options,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UrlOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(flatten)]
    pub bounds: TextBounds,
    /// Allowed schemes, without `:`.
    pub protocols: Vec<String>,
    pub domains: Vec<String>,
    pub blocked_domains: Vec<String>,
    pub allowed_ports: Vec<u16>,
    pub blocked_ports: Vec<u16>,
    pub block_localhost: bool,
    pub block_private_ips: bool,
    pub require_tld: bool,
    pub must_have_path: bool,
    pub must_have_query: bool,
    pub must_have_fragment: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            bounds: TextBounds::default(),
            protocols: vec!["http".into(), "https".into()],
            domains: Vec::new(),
            blocked_domains: Vec::new(),
            allowed_ports: Vec::new(),
            blocked_ports: Vec::new(),
            block_localhost: false,
            block_private_ips: false,
            require_tld: false,
            must_have_path: false,
            must_have_query: false,
            must_have_fragment: false,
        }
    }
}

impl UrlOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn protocols(mut self, protocols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.protocols = protocols.into_iter().map(Into::into).collect();
        self
    }

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
    pub fn allowed_ports(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.allowed_ports = ports.into_iter().collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn blocked_ports(mut self, ports: impl IntoIterator<Item = u16>) -> Self {
        self.blocked_ports = ports.into_iter().collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn block_localhost(mut self) -> Self {
        self.block_localhost = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn block_private_ips(mut self) -> Self {
        self.block_private_ips = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn require_tld(mut self) -> Self {
        self.require_tld = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn must_have_path(mut self) -> Self {
        self.must_have_path = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn must_have_query(mut self) -> Self {
        self.must_have_query = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn must_have_fragment(mut self) -> Self {
        self.must_have_fragment = true;
        self
    }
}

impl_common_options!(UrlOptions => String);
impl_text_bounds!(UrlOptions);

// ============================================================================
// STRUCTURE RULE
// ============================================================================

#[derive(Debug, Clone)]
struct StructureRule {
    protocols: Vec<String>,
    domains: Vec<String>,
    blocked: Vec<String>,
    allowed_ports: Vec<u16>,
    blocked_ports: Vec<u16>,
    block_localhost: bool,
    block_private_ips: bool,
    require_tld: bool,
    path: bool,
    query: bool,
    fragment: bool,
}

fn fail(key: MessageKey) -> Result<(), ValidationError> {
    Err(ValidationError::new(key))
}

impl Validate for StructureRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Ok(url) = Url::parse(input) else {
            return fail(MessageKey::Invalid);
        };

        let scheme = url.scheme();
        if !self.protocols.is_empty() && !self.protocols.iter().any(|p| p.eq_ignore_ascii_case(scheme)) {
            return Err(ValidationError::new(MessageKey::Protocol)
                .with_param("protocols", self.protocols.as_slice()));
        }

        let Some(host) = url.host() else {
            return fail(MessageKey::Invalid);
        };
        let host_text = url.host_str().unwrap_or_default();

        if !self.domains.is_empty() && !self.domains.iter().any(|d| domain_matches(host_text, d)) {
            return Err(ValidationError::new(MessageKey::Domain).with_param("domain", host_text));
        }
        if self.blocked.iter().any(|d| domain_matches(host_text, d)) {
            return Err(ValidationError::new(MessageKey::DomainBlacklist).with_param("domain", host_text));
        }
        if self.block_localhost && is_localhost(&host) {
            return fail(MessageKey::Localhost);
        }
        if self.block_private_ips && is_private_ip(&host) {
            return fail(MessageKey::PrivateIp);
        }
        if self.require_tld && !has_tld(&host) {
            return fail(MessageKey::Tld);
        }

        if let Some(port) = url.port_or_known_default() {
            let allowed = self.allowed_ports.is_empty() || self.allowed_ports.contains(&port);
            if !allowed || self.blocked_ports.contains(&port) {
                return Err(ValidationError::new(MessageKey::Port).with_param("port", u32::from(port)));
            }
        }

        if self.path && matches!(url.path(), "" | "/") {
            return fail(MessageKey::Path);
        }
        if self.query && url.query().is_none_or(str::is_empty) {
            return fail(MessageKey::Query);
        }
        if self.fragment && url.fragment().is_none_or(str::is_empty) {
            return fail(MessageKey::Fragment);
        }
        Ok(())
    }
}

// ============================================================================
// KIND
// ============================================================================

#[derive(Debug)]
pub struct UrlKind {
    options: UrlOptions,
    rules: Rules<str>,
}

impl FieldKind for UrlKind {
    type Value = String;
    type Output = String;
    type Options = UrlOptions;

    const KIND: &'static str = "url";
    const WHITELIST_ORDER: WhitelistOrder = WhitelistOrder::AfterTransform;

    fn options(&self) -> &UrlOptions {
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

/// Builds a URL field. The output is the input text, not the serialized
/// [`Url`], so accepted values re-parse unchanged.
pub fn url(required: bool, mut options: UrlOptions) -> Field<UrlKind> {
    options.common.required = required;

    let structure = StructureRule {
        protocols: options.protocols.clone(),
        domains: options.domains.clone(),
        blocked: options.blocked_domains.clone(),
        allowed_ports: options.allowed_ports.clone(),
        blocked_ports: options.blocked_ports.clone(),
        block_localhost: options.block_localhost,
        block_private_ips: options.block_private_ips,
        require_tld: options.require_tld,
        path: options.must_have_path,
        query: options.must_have_query,
        fragment: options.must_have_fragment,
    };
    let rules = options.bounds.push_into(Rules::new().push(structure));

    Field::new(UrlKind { options, rules })
}

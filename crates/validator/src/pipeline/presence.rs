//! Emptiness, default and whitelist resolution.

use super::normalize::Prepared;
use super::options::{Common, WhitelistOrder};

/// What the pipeline does with a normalized input before coercion.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Presence<T> {
    /// Whitelisted: accept `text` without further checks.
    Listed { text: String, prepared: Prepared },
    /// Empty with a default: continue with the default value.
    Default(T),
    /// Empty with a default on a whitelist-only field: accept as is.
    TrustedDefault(T),
    /// Empty and required.
    Missing,
    /// Empty and optional: the result is `None`.
    Absent,
    /// Whitelist-only field, value not listed.
    Unlisted,
    /// Continue with coercion.
    Present(Prepared),
}

/// Applies the decision table: whitelist, default, required, absent.
///
/// The whitelist is only consulted here for kinds that compare before the
/// transform.
pub(crate) fn resolve<T: Clone>(
    prepared: Option<Prepared>,
    common: &Common<T>,
    order: WhitelistOrder,
) -> Presence<T> {
    let Some(prepared) = prepared else {
        return match (&common.default_value, common.required) {
            (Some(default), _) if common.whitelist_only => Presence::TrustedDefault(default.clone()),
            (Some(default), _) => Presence::Default(default.clone()),
            (None, true) => Presence::Missing,
            (None, false) => Presence::Absent,
        };
    };

    if order == WhitelistOrder::BeforeTransform {
        if let Some(text) = prepared.listing_text().filter(|t| common.is_listed(t)) {
            return Presence::Listed { text, prepared };
        }
        if common.whitelist_only {
            return Presence::Unlisted;
        }
    }

    Presence::Present(prepared)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> Common<String> {
        Common::default()
    }

    fn text(s: &str) -> Option<Prepared> {
        Some(Prepared::Text(s.into()))
    }

    #[test]
    fn empty_decisions() {
        let mut c = common();
        assert_eq!(resolve(None, &c, WhitelistOrder::BeforeTransform), Presence::Absent);

        c.required = true;
        assert_eq!(resolve(None, &c, WhitelistOrder::BeforeTransform), Presence::Missing);

        c.default_value = Some("d".into());
        assert_eq!(
            resolve(None, &c, WhitelistOrder::BeforeTransform),
            Presence::Default("d".into())
        );

        c.whitelist_only = true;
        assert_eq!(
            resolve(None, &c, WhitelistOrder::BeforeTransform),
            Presence::TrustedDefault("d".into())
        );
    }

    #[test]
    fn whitelist_before_transform() {
        let mut c = common();
        c.whitelist = vec!["N/A".into()];
        assert_eq!(
            resolve(text("N/A"), &c, WhitelistOrder::BeforeTransform),
            Presence::Listed {
                text: "N/A".into(),
                prepared: Prepared::Text("N/A".into())
            }
        );
        assert_eq!(
            resolve(text("x"), &c, WhitelistOrder::BeforeTransform),
            Presence::Present(Prepared::Text("x".into()))
        );

        c.whitelist_only = true;
        assert_eq!(
            resolve(text("x"), &c, WhitelistOrder::BeforeTransform),
            Presence::Unlisted
        );
    }

    #[test]
    fn after_transform_kinds_defer_whitelist() {
        let mut c = common();
        c.whitelist = vec!["N/A".into()];
        c.whitelist_only = true;
        assert_eq!(
            resolve(text("N/A"), &c, WhitelistOrder::AfterTransform),
            Presence::Present(Prepared::Text("N/A".into()))
        );
    }
}

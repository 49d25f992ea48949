//! Template lookup and `${name}` interpolation.

use std::borrow::Cow;

use super::{Locale, MessageOverrides, builtin_template};
use crate::foundation::{MessageKey, Params};

/// Resolves the message for `key` on a `kind` field.
///
/// Precedence: caller override for `locale`, built-in template for
/// `locale`, built-in `en` template, then the key text itself. The result is
/// interpolated with `params`.
///
/// ```
/// use formosa_validator::foundation::{MessageKey, Params};
/// use formosa_validator::i18n::{Locale, MessageOverrides, resolve};
///
/// let overrides = MessageOverrides::new();
/// let mut params = Params::new();
/// params.push(("min".into(), 3i64.into()));
///
/// assert_eq!(
///     resolve(MessageKey::Min, "number", &Locale::ZH_TW, &overrides, &params),
///     "不得小於 3"
/// );
/// ```
#[must_use]
pub fn resolve(
    key: MessageKey,
    kind: &str,
    locale: &Locale,
    overrides: &MessageOverrides,
    params: &Params,
) -> String {
    let template: Cow<'_, str> = overrides
        .get(locale)
        .and_then(|table| table.get(&key))
        .map(|t| Cow::Borrowed(t.as_str()))
        .or_else(|| builtin_template(locale, kind, key).map(Cow::Borrowed))
        .or_else(|| builtin_template(&Locale::EN, kind, key).map(Cow::Borrowed))
        .unwrap_or(Cow::Borrowed(key.as_str()));

    interpolate(&template, params)
}

/// Replaces every `${name}` in `template` with the matching parameter.
///
/// Placeholders without a parameter are left untouched, as is an unclosed
/// `${`.
#[must_use]
pub fn interpolate(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match params.iter().find(|(k, _)| k.as_ref() == name) {
            Some((_, value)) => out.push_str(&value.to_string()),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::foundation::ParamValue;

    fn params(pairs: &[(&'static str, ParamValue)]) -> Params {
        pairs.iter().map(|(k, v)| ((*k).into(), v.clone())).collect()
    }

    #[test]
    fn interpolates_all_occurrences() {
        let p = params(&[("min", ParamValue::Integer(2))]);
        assert_eq!(interpolate("${min} and ${min}", &p), "2 and 2");
    }

    #[test]
    fn missing_params_stay_literal() {
        let p = params(&[("min", ParamValue::Integer(2))]);
        assert_eq!(interpolate("${min}-${max}", &p), "2-${max}");
        assert_eq!(interpolate("open ${min", &p), "open ${min");
    }

    #[test]
    fn lists_join_with_comma() {
        let p = params(&[("protocols", ParamValue::List(vec!["http".into(), "https".into()]))]);
        assert_eq!(
            resolve(MessageKey::Protocol, "url", &Locale::EN, &MessageOverrides::new(), &p),
            "Protocol must be one of http, https"
        );
    }

    #[test]
    fn override_beats_builtin_only_for_its_locale() {
        let mut overrides = MessageOverrides::new();
        overrides.insert(
            Locale::ZH_TW,
            HashMap::from([(MessageKey::Required, "請填寫".to_string())]),
        );

        let none = Params::new();
        assert_eq!(
            resolve(MessageKey::Required, "text", &Locale::ZH_TW, &overrides, &none),
            "請填寫"
        );
        assert_eq!(
            resolve(MessageKey::Required, "text", &Locale::EN, &overrides, &none),
            "Required"
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        assert_eq!(
            resolve(
                MessageKey::Invalid,
                "email",
                &Locale::new("ja"),
                &MessageOverrides::new(),
                &Params::new()
            ),
            "Invalid email address"
        );
    }
}

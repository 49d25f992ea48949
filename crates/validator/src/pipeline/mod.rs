//! The validation pipeline every field kind runs through.
//!
//! ```text
//! input ─► normalize ─► empty? ──yes──► default / required / None
//!                          │
//!                          no ─► whitelist (before) ─► coerce ─► transform
//!                                 ─► whitelist (after) ─► rules ─► output
//! ```
//!
//! A [`FieldKind`] supplies the kind-specific pieces (coercion, the ordered
//! rule list, the output conversion); [`Field`] owns the stage order. The
//! first failing stage ends the call with a single localized [`Issue`].

pub mod coerce;
pub mod normalize;
pub mod options;
mod presence;

use serde_json::Value;

use crate::foundation::{Issue, MessageKey, ParseError, ValidationError};
use crate::i18n;

pub use normalize::Prepared;
pub(crate) use options::impl_common_options;
pub use options::{Casing, Common, CommonOptions, Transform, TrimMode, WhitelistOrder};
use presence::Presence;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The kind-specific half of a field.
pub trait FieldKind {
    /// The value type coercion produces and `transform` maps.
    type Value: Clone + Send + Sync + 'static;
    /// What `parse` returns.
    type Output;
    /// The options struct this kind was built from.
    type Options;

    /// Name used for per-field message tables and logs.
    const KIND: &'static str;
    /// Textual kinds are stringified, trimmed and cased before coercion.
    const TEXTUAL: bool = true;
    const WHITELIST_ORDER: WhitelistOrder = WhitelistOrder::BeforeTransform;
    /// Trimming applied when `trimMode` is not configured.
    const TRIM: TrimMode = TrimMode::Trim;
    /// Case folding applied when `casing` is not configured.
    const CASING: Casing = Casing::None;

    fn options(&self) -> &Self::Options;

    fn common(&self) -> &Common<Self::Value>;

    /// Converts normalized input into the value type.
    fn coerce(&self, input: Prepared) -> Result<Self::Value, ValidationError>;

    /// Runs the ordered rule list; the first failure is returned.
    fn check(&self, value: &Self::Value) -> Result<(), ValidationError>;

    /// Converts an accepted value into the output.
    fn finish(&self, value: Self::Value) -> Self::Output;

    /// Rebuilds a value from a whitelisted string. When this returns `None`
    /// the listed input runs through the full pipeline instead.
    fn from_listed(&self, text: String) -> Option<Self::Value> {
        let _ = text;
        None
    }

    /// The string a transformed value is compared against the whitelist
    /// with, for kinds using [`WhitelistOrder::AfterTransform`].
    fn listed_text(value: &Self::Value) -> Option<&str> {
        let _ = value;
        None
    }
}

// ============================================================================
// FIELD
// ============================================================================

/// A configured validator for one field.
///
/// Construction compiles the options once; `parse` can then be called any
/// number of times, from any thread.
///
/// # Examples
///
/// ```
/// use formosa_validator::fields::{TextOptions, text};
/// use serde_json::json;
///
/// let name = text(true, TextOptions::default().min_length(2)).unwrap();
/// assert_eq!(name.parse(json!("  Ada ")).unwrap(), Some("Ada".to_string()));
/// assert!(name.parse(json!("")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Field<K> {
    kind: K,
}

impl<K: FieldKind> Field<K> {
    pub(crate) fn new(kind: K) -> Self {
        Self { kind }
    }

    /// The options this field was built from.
    pub fn options(&self) -> &K::Options {
        self.kind.options()
    }

    /// The kind-specific half of this field.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Validates `input`.
    ///
    /// Returns `Ok(None)` for empty input on an optional field without a
    /// default. Errors carry the message for the locale active during this
    /// call.
    pub fn parse(&self, input: impl Into<Value>) -> Result<Option<K::Output>, ParseError> {
        let common = self.kind.common();
        let prepared = normalize::prepare(
            input.into(),
            K::TEXTUAL,
            common.trim_mode.unwrap_or(K::TRIM),
            common.casing.unwrap_or(K::CASING),
        );

        let prepared = match presence::resolve(prepared, common, K::WHITELIST_ORDER) {
            Presence::Listed { text, prepared } => match self.kind.from_listed(text) {
                Some(value) => {
                    tracing::trace!(kind = K::KIND, "whitelisted value accepted");
                    return Ok(Some(self.kind.finish(value)));
                }
                None => prepared,
            },
            Presence::TrustedDefault(value) => {
                tracing::trace!(kind = K::KIND, "default accepted on whitelist-only field");
                return Ok(Some(self.kind.finish(value)));
            }
            Presence::Default(value) => {
                tracing::trace!(kind = K::KIND, "default substituted for empty input");
                let value = common.apply_transform(value);
                self.kind.check(&value).map_err(|e| self.fail(e))?;
                return Ok(Some(self.kind.finish(value)));
            }
            Presence::Missing => return Err(self.fail(ValidationError::required())),
            Presence::Absent => return Ok(None),
            Presence::Unlisted => {
                return Err(self.fail(ValidationError::new(MessageKey::NotInWhitelist)));
            }
            Presence::Present(prepared) => prepared,
        };

        self.run(prepared)
    }

    /// Runs `parse` and reports only whether it succeeded.
    pub fn is_valid(&self, input: impl Into<Value>) -> bool {
        self.parse(input).is_ok()
    }

    fn run(&self, prepared: Prepared) -> Result<Option<K::Output>, ParseError> {
        let common = self.kind.common();
        let value = self.kind.coerce(prepared).map_err(|e| self.fail(e))?;
        let value = common.apply_transform(value);

        if K::WHITELIST_ORDER == WhitelistOrder::AfterTransform {
            if K::listed_text(&value).is_some_and(|text| common.is_listed(text)) {
                tracing::trace!(kind = K::KIND, "whitelisted value accepted");
                return Ok(Some(self.kind.finish(value)));
            }
            if common.whitelist_only {
                return Err(self.fail(ValidationError::new(MessageKey::NotInWhitelist)));
            }
        }

        self.kind.check(&value).map_err(|e| self.fail(e))?;
        Ok(Some(self.kind.finish(value)))
    }

    fn fail(&self, error: ValidationError) -> ParseError {
        let common = self.kind.common();
        let locale = i18n::current_locale();
        let message = i18n::resolve(error.key, K::KIND, &locale, &common.i18n, &error.params);
        tracing::debug!(kind = K::KIND, key = %error.key, %locale, "field rejected input");

        ParseError::single(Issue {
            code: error.key,
            message,
            path: common.path.clone(),
            params: error.params,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::combinators::Rules;
    use crate::foundation::Validate;
    use crate::rules::{max_length, min_length};

    struct Word {
        common: Common<String>,
        rules: Rules<str>,
    }

    impl FieldKind for Word {
        type Value = String;
        type Output = String;
        type Options = ();

        const KIND: &'static str = "text";

        fn options(&self) -> &() {
            &()
        }

        fn common(&self) -> &Common<String> {
            &self.common
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

        fn from_listed(&self, text: String) -> Option<String> {
            Some(text)
        }

        fn listed_text(value: &String) -> Option<&str> {
            Some(value)
        }
    }

    fn word(common: Common<String>) -> Field<Word> {
        Field::new(Word {
            common,
            rules: Rules::new().push(min_length(3)).push(max_length(5)),
        })
    }

    fn code(result: Result<Option<String>, ParseError>) -> Option<MessageKey> {
        result.err().and_then(|e| e.code())
    }

    #[test]
    fn empty_optional_is_none() {
        let field = word(Common::default());
        assert_eq!(field.parse(json!(null)).unwrap(), None);
        assert_eq!(field.parse(json!("  ")).unwrap(), None);
    }

    #[test]
    fn empty_required_fails() {
        let field = word(Common {
            required: true,
            ..Common::default()
        });
        assert_eq!(code(field.parse(json!(""))), Some(MessageKey::Required));
    }

    #[test]
    fn default_is_transformed_and_checked() {
        let field = word(Common {
            required: true,
            default_value: Some("toolong".into()),
            ..Common::default()
        });
        assert_eq!(code(field.parse(json!(null))), Some(MessageKey::MaxLength));

        let field = word(Common {
            default_value: Some("toolong".into()),
            transform: Some(Arc::new(|s: String| s[..4].to_string())),
            ..Common::default()
        });
        assert_eq!(field.parse(json!("")).unwrap(), Some("tool".into()));
    }

    #[test]
    fn whitelist_only_trusts_default() {
        let field = word(Common {
            default_value: Some("toolong".into()),
            whitelist_only: true,
            ..Common::default()
        });
        assert_eq!(field.parse(json!(null)).unwrap(), Some("toolong".into()));
    }

    #[test]
    fn whitelist_bypasses_rules() {
        let field = word(Common {
            whitelist: vec!["x".into()],
            ..Common::default()
        });
        assert_eq!(field.parse(json!(" x ")).unwrap(), Some("x".into()));
        assert_eq!(code(field.parse(json!("y"))), Some(MessageKey::MinLength));
    }

    #[test]
    fn transform_runs_after_casing_and_before_rules() {
        let field = word(Common {
            casing: Some(Casing::Upper),
            transform: Some(Arc::new(|s: String| format!("{s}!"))),
            ..Common::default()
        });
        assert_eq!(field.parse(json!("abc")).unwrap(), Some("ABC!".into()));
        assert_eq!(code(field.parse(json!("abcde"))), Some(MessageKey::MaxLength));
    }

    #[test]
    fn integer_valued_floats_are_checked_as_written() {
        let field = word(Common::default());
        assert_eq!(field.parse(json!(1000.0)).unwrap(), Some("1000".into()));
        assert_eq!(code(field.parse(json!(1e21))), Some(MessageKey::MaxLength));
    }

    #[test]
    fn issue_carries_path_and_params() {
        let field = word(Common {
            path: vec!["user".into(), "name".into()],
            ..Common::default()
        });
        let err = field.parse(json!("ab")).unwrap_err();
        let issue = &err.issues[0];
        assert_eq!(issue.path, ["user", "name"]);
        assert_eq!(issue.code, MessageKey::MinLength);
        assert!(issue.params.iter().any(|(k, _)| k == "min"));
    }

    #[test]
    #[should_panic(expected = "transform exploded")]
    fn transform_panics_propagate() {
        let field = word(Common {
            transform: Some(Arc::new(|_: String| -> String { panic!("transform exploded") })),
            ..Common::default()
        });
        let _ = field.parse(json!("abc"));
    }
}

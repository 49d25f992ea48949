//! Options shared by every field kind.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::foundation::MessageKey;
use crate::i18n::{Locale, MessageOverrides};

/// A caller-supplied value transformation, run after trim and casing.
pub type Transform<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// Which whitespace is stripped before any other stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrimMode {
    #[default]
    Trim,
    TrimStart,
    TrimEnd,
    None,
}

impl TrimMode {
    pub(crate) fn apply(self, input: &str) -> &str {
        match self {
            TrimMode::Trim => input.trim(),
            TrimMode::TrimStart => input.trim_start(),
            TrimMode::TrimEnd => input.trim_end(),
            TrimMode::None => input,
        }
    }
}

/// Case folding applied after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Casing {
    #[default]
    None,
    Upper,
    Lower,
    /// Upper-cases the first letter of each whitespace-separated word and
    /// lower-cases the rest.
    Title,
}

impl Casing {
    pub(crate) fn apply(self, input: &str) -> String {
        match self {
            Casing::None => input.to_string(),
            Casing::Upper => input.to_uppercase(),
            Casing::Lower => input.to_lowercase(),
            Casing::Title => {
                let mut out = String::with_capacity(input.len());
                let mut at_word_start = true;
                for c in input.chars() {
                    if c.is_whitespace() {
                        at_word_start = true;
                        out.push(c);
                    } else if at_word_start {
                        at_word_start = false;
                        out.extend(c.to_uppercase());
                    } else {
                        out.extend(c.to_lowercase());
                    }
                }
                out
            }
        }
    }
}

/// Whether a field kind compares whitelist entries against the value before
/// or after the caller's `transform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitelistOrder {
    /// Compare the trimmed, cased input; listed values skip `transform`.
    BeforeTransform,
    /// Compare the transformed value.
    AfterTransform,
}

// ============================================================================
// COMMON OPTIONS
// ============================================================================

/// Knobs every field kind understands.
#[derive(Clone, Deserialize)]
#[serde(
    default,
    rename_all = "camelCase",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Common<T> {
    /// Empty input fails with `required` unless a default is set.
    pub required: bool,
    /// Substituted for empty input, then transformed and checked.
    pub default_value: Option<T>,
    /// Values accepted without running any constraint.
    pub whitelist: Vec<String>,
    /// Reject everything that is not whitelisted.
    pub whitelist_only: bool,
    /// Unset means the kind's own default ([`FieldKind::TRIM`](super::FieldKind::TRIM)).
    pub trim_mode: Option<TrimMode>,
    /// Unset means the kind's own default ([`FieldKind::CASING`](super::FieldKind::CASING)).
    pub casing: Option<Casing>,
    #[serde(skip)]
    pub transform: Option<Transform<T>>,
    /// Message overrides, per locale.
    pub i18n: MessageOverrides,
    /// Copied into every reported issue.
    pub path: Vec<String>,
}

impl<T> Default for Common<T> {
    fn default() -> Self {
        Self {
            required: false,
            default_value: None,
            whitelist: Vec::new(),
            whitelist_only: false,
            trim_mode: None,
            casing: None,
            transform: None,
            i18n: MessageOverrides::new(),
            path: Vec::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Common<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Common")
            .field("required", &self.required)
            .field("default_value", &self.default_value)
            .field("whitelist", &self.whitelist)
            .field("whitelist_only", &self.whitelist_only)
            .field("trim_mode", &self.trim_mode)
            .field("casing", &self.casing)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .field("i18n", &self.i18n)
            .field("path", &self.path)
            .finish()
    }
}

impl<T> Common<T> {
    pub(crate) fn is_listed(&self, text: &str) -> bool {
        self.whitelist.iter().any(|entry| entry == text)
    }

    pub(crate) fn apply_transform(&self, value: T) -> T {
        match &self.transform {
            Some(transform) => transform(value),
            None => value,
        }
    }
}

/// Builder methods for the [`Common`] part of an options struct.
pub trait CommonOptions: Sized {
    type Value;

    fn common_mut(&mut self) -> &mut Common<Self::Value>;

    #[must_use = "builder methods must be chained or built"]
    fn required(mut self, required: bool) -> Self {
        self.common_mut().required = required;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    fn default_value(mut self, value: impl Into<Self::Value>) -> Self {
        self.common_mut().default_value = Some(value.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    fn whitelist(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.common_mut().whitelist = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    fn whitelist_only(mut self, whitelist_only: bool) -> Self {
        self.common_mut().whitelist_only = whitelist_only;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    fn trim_mode(mut self, mode: TrimMode) -> Self {
        self.common_mut().trim_mode = Some(mode);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    fn casing(mut self, casing: Casing) -> Self {
        self.common_mut().casing = Some(casing);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    fn transform(mut self, f: impl Fn(Self::Value) -> Self::Value + Send + Sync + 'static) -> Self {
        self.common_mut().transform = Some(Arc::new(f));
        self
    }

    /// Overrides the template for `key` in `locale`.
    #[must_use = "builder methods must be chained or built"]
    fn message(
        mut self,
        locale: impl Into<Locale>,
        key: MessageKey,
        template: impl Into<String>,
    ) -> Self {
        self.common_mut()
            .i18n
            .entry(locale.into())
            .or_insert_with(HashMap::new)
            .insert(key, template.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    fn path(mut self, path: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.common_mut().path = path.into_iter().map(Into::into).collect();
        self
    }
}

/// Implements [`CommonOptions`] for an options struct with a `common` field.
macro_rules! impl_common_options {
    ($($options:ty => $value:ty),+ $(,)?) => {
        $(
            impl $crate::pipeline::CommonOptions for $options {
                type Value = $value;

                fn common_mut(&mut self) -> &mut $crate::pipeline::Common<$value> {
                    &mut self.common
                }
            }
        )+
    };
}

pub(crate) use impl_common_options;

//! Locale registry and message resolution
//!
//! The active locale is process-wide. It is read each time a field builds
//! an error, never captured when the field is constructed, so one field
//! instance reports in whatever locale is current at `parse` time.
//!
//! ```
//! use formosa_validator::i18n::{self, Locale};
//!
//! let _scope = i18n::scoped_locale("zh_tw");
//! assert_eq!(i18n::current_locale(), Locale::ZH_TW);
//! ```

mod catalog;
mod resolve;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{Mutex, MutexGuard, RwLock};
use serde::{Deserialize, Serialize};

use crate::foundation::MessageKey;

pub use catalog::builtin_template;
pub use resolve::{interpolate, resolve};

/// Caller-supplied message templates: locale → key → template.
pub type MessageOverrides = std::collections::BTreeMap<Locale, HashMap<MessageKey, String>>;

// ============================================================================
// LOCALE
// ============================================================================

/// A normalized locale tag such as `en` or `zh-TW`.
///
/// Underscores become hyphens, the language subtag is lower-cased and a
/// two-letter region is upper-cased, so `zh_tw`, `ZH-tw` and `zh-TW` are the
/// same locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale(Cow<'static, str>);

impl Locale {
    pub const EN: Locale = Locale(Cow::Borrowed("en"));
    pub const ZH_TW: Locale = Locale(Cow::Borrowed("zh-TW"));

    /// Normalizes `tag` into a locale.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        let mut out = String::with_capacity(tag.len());
        for (i, part) in tag.trim().split(['-', '_']).enumerate() {
            if i > 0 {
                out.push('-');
            }
            match (i, part.len()) {
                (0, _) => out.push_str(&part.to_ascii_lowercase()),
                (_, 2) => out.push_str(&part.to_ascii_uppercase()),
                (_, 4) => {
                    let mut chars = part.chars();
                    if let Some(first) = chars.next() {
                        out.push(first.to_ascii_uppercase());
                        out.push_str(&chars.as_str().to_ascii_lowercase());
                    }
                }
                _ => out.push_str(part),
            }
        }
        Self(Cow::Owned(out))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0.into_owned()
    }
}

// ============================================================================
// GLOBAL STATE
// ============================================================================

static CURRENT: LazyLock<RwLock<Locale>> = LazyLock::new(|| RwLock::new(Locale::EN));

static SCOPE_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Replaces the process-wide locale.
pub fn set_locale(tag: impl Into<Locale>) {
    let locale = tag.into();
    tracing::debug!(locale = %locale, "locale changed");
    *CURRENT.write() = locale;
}

/// The process-wide locale.
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT.read().clone()
}

/// Sets the locale until the returned guard drops, then restores the
/// previous one.
///
/// Scopes are serialized: a second `scoped_locale` call blocks until the
/// first guard is gone. Plain [`set_locale`] calls are not affected.
pub fn scoped_locale(tag: impl Into<Locale>) -> LocaleScope {
    let lock = SCOPE_LOCK.lock();
    let previous = current_locale();
    set_locale(tag);
    LocaleScope {
        previous,
        _lock: lock,
    }
}

/// Guard returned by [`scoped_locale`].
#[must_use = "the locale is restored as soon as the scope is dropped"]
pub struct LocaleScope {
    previous: Locale,
    _lock: MutexGuard<'static, ()>,
}

impl fmt::Debug for LocaleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleScope")
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

impl Drop for LocaleScope {
    fn drop(&mut self) {
        *CURRENT.write() = self.previous.clone();
    }
}

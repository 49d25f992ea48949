//! Field kinds: options structs, rule orders and constructors.
//!
//! Every constructor compiles its options into a [`Field`](crate::pipeline::Field)
//! once. Generic kinds take `required` positionally (it overrides
//! `options.common.required`); the Taiwan kinds in [`tw`] read it from
//! their options.
//!
//! | kind | constructor | output |
//! |------|-------------|--------|
//! | `boolean` | [`boolean`] | `bool` |
//! | `number` | [`number`] | `f64` |
//! | `text` | [`text`] | `String` |
//! | `email` | [`email`] | `String` |
//! | `url` | [`url`] | `String` |
//! | `color` | [`color`] | `String` |
//! | `date` | [`date`] | `String` |
//! | `datetime` | [`datetime`] | `String` |
//! | `time` | [`time`] | `String` |
//! | `creditCard` | [`credit_card`] | `String` (digits only) |
//! | `file` | [`file`] | [`FileInfo`] |
//! | `id` | [`id`] | [`IdValue`] |
//! | `password` | [`password`] | `String` |

pub mod boolean;
pub mod color;
pub mod credit_card;
pub mod date;
pub mod datetime;
pub mod email;
pub mod file;
pub mod id;
pub mod number;
pub mod password;
pub mod text;
pub mod time;
pub mod tw;
pub mod url;

use serde::{Deserialize, Deserializer};

pub use boolean::{BooleanKind, BooleanOptions, boolean};
pub use color::{ColorKind, ColorOptions, color};
pub use credit_card::{CreditCardKind, CreditCardOptions, credit_card};
pub use date::{DateKind, DateOptions, date};
pub use datetime::{DateTimeKind, DateTimeOptions, datetime};
pub use email::{EmailKind, EmailOptions, email};
pub use file::{FileInfo, FileKind, FileOptions, file};
pub use id::{IdKind, IdOptions, IdValue, id};
pub use number::{NumberKind, NumberOptions, NumberType, number};
pub use password::{PasswordKind, PasswordOptions, PasswordStrength, password, password_strength};
pub use text::{TextBounds, TextKind, TextOptions, text};
pub use time::{TimeKind, TimeOptions, time};
pub use self::url::{UrlKind, UrlOptions, url};

/// Accepts either a single value or a list for list-valued options
/// (`"startsWith": "a"` and `"startsWith": ["a", "b"]`).
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        One(T),
        Many(Vec<T>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

/// The shared `Arc<dyn MomentParser>` option of the date/time kinds.
pub(crate) fn default_moments() -> std::sync::Arc<dyn crate::algorithms::MomentParser> {
    std::sync::Arc::new(crate::algorithms::ChronoMoments::new())
}

/// Builds a boxed-closure rule list entry for a kind-specific check.
macro_rules! check {
    ($key:expr, |$value:ident : &$ty:ty| $body:expr) => {
        $crate::combinators::rule_fn(move |$value: &$ty| {
            if $body {
                Ok(())
            } else {
                Err($crate::foundation::ValidationError::new($key))
            }
        })
    };
}

pub(crate) use check;

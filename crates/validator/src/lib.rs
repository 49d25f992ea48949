//! # formosa-validator
//!
//! Field validation with a fixed pipeline, locale-aware messages and
//! Taiwan identifier checks.
//!
//! ## Quick Start
//!
//! ```
//! use formosa_validator::prelude::*;
//! use serde_json::json;
//!
//! let age = number(true, NumberOptions::default().min(18.0).number_type(NumberType::Integer)).unwrap();
//! assert_eq!(age.parse(json!("42")).unwrap(), Some(42.0));
//!
//! let err = age.parse(json!(12)).unwrap_err();
//! assert_eq!(err.code(), Some(MessageKey::Min));
//! ```
//!
//! ## Layout
//!
//! - [`pipeline`]: the stage order every field runs through
//!   ([`Field`], [`FieldKind`](pipeline::FieldKind))
//! - [`fields`]: one options struct and constructor per field kind, with the
//!   Taiwan kinds under [`fields::tw`]
//! - [`algorithms`]: Luhn, Taiwan checksums and tables, color/URL/datetime
//!   grammars, all usable without the pipeline
//! - [`i18n`]: the process-wide locale and the `en`/`zh-TW` catalogs
//! - [`foundation`], [`combinators`], [`rules`]: the rule layer kinds build
//!   their ordered constraint lists from
//!
//! ## Declaring fields from JSON
//!
//! Every options struct deserializes from camelCase JSON:
//!
//! ```
//! use formosa_validator::fields::{TextOptions, text};
//! use serde_json::json;
//!
//! let options: TextOptions = serde_json::from_value(json!({
//!     "minLength": 2,
//!     "startsWith": ["A", "B"],
//!     "i18n": { "en": { "startsWith": "Pick a name starting with ${prefix}" } }
//! }))
//! .unwrap();
//! let field = text(true, options).unwrap();
//! assert!(field.parse(json!("Ada")).is_ok());
//! ```

// ValidationError keeps up to three params inline.
#![allow(clippy::result_large_err)]

pub mod algorithms;
pub mod combinators;
pub mod fields;
pub mod foundation;
pub mod i18n;
mod macros;
pub mod pipeline;
pub mod prelude;
pub mod rules;

pub use algorithms::ids::ID_PATTERNS;
pub use algorithms::taiwan::{
    AREA_CODES, BANK_CODES, POSTAL_PREFIXES, POSTAL_SUFFIX_RANGES, detect_national_id_kind,
    validate_taiwan_bank_account, validate_taiwan_business_id, validate_taiwan_fax,
    validate_taiwan_mobile, validate_taiwan_national_id, validate_taiwan_postal_code,
    validate_taiwan_tel,
};
pub use algorithms::{detect_card_type, detect_id_type, validate_credit_card, validate_id};
pub use foundation::{ConfigError, MessageKey, ParseError};
pub use i18n::{Locale, current_locale, set_locale};
pub use pipeline::Field;

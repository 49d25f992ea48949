//! Prelude module for convenient imports.
//!
//! `use formosa_validator::prelude::*;` brings in every field constructor
//! and options struct, the builder trait for shared options, the rule
//! traits and the error types.
//!
//! # Examples
//!
//! ```
//! use formosa_validator::prelude::*;
//! use serde_json::json;
//!
//! let id = national_id(NationalIdOptions::default().required(true));
//! assert!(id.is_valid(json!("A123456789")));
//!
//! let work = email(false, EmailOptions::default().business_only());
//! assert!(!work.is_valid(json!("someone@gmail.com")));
//! ```

// ============================================================================
// FOUNDATION: Traits, keys, errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, Issue, MessageKey, ParseError, Validate, ValidateExt, ValidationError,
};

// ============================================================================
// PIPELINE: Field and shared options
// ============================================================================

pub use crate::pipeline::{Casing, CommonOptions, Field, FieldKind, TrimMode};

// ============================================================================
// FIELDS: Generic kinds
// ============================================================================

pub use crate::fields::{
    BooleanOptions, ColorOptions, CreditCardOptions, DateOptions, DateTimeOptions, EmailOptions,
    FileInfo, FileOptions, IdOptions, IdValue, NumberOptions, NumberType, PasswordOptions,
    PasswordStrength, TextOptions, TimeOptions, UrlOptions, boolean, color, credit_card, date,
    datetime, email, file, id, number, password, text, time, url,
};

// ============================================================================
// FIELDS: Taiwan kinds
// ============================================================================

pub use crate::fields::tw::{
    BankAccountOptions, BusinessIdOptions, FaxOptions, LicensePlateOptions, MobileOptions,
    NationalIdOptions, PassportOptions, PostalCodeOptions, TelOptions, bank_account, business_id,
    fax, license_plate, mobile, national_id, passport, postal_code, tel,
};

// ============================================================================
// ALGORITHMS: Option enums and pure checks
// ============================================================================

pub use crate::algorithms::taiwan::{NationalIdType, PassportType, PlateType, PostalFormat};
pub use crate::algorithms::{
    CardType, ColorFormat, DateTimeFormat, IdType, MomentParser, TimeZone, detect_card_type,
    detect_id_type, validate_credit_card,
};

// ============================================================================
// I18N
// ============================================================================

pub use crate::i18n::{Locale, current_locale, scoped_locale, set_locale};

//! Taiwan-specific field kinds.
//!
//! Unlike the generic kinds, these constructors take `required` from the
//! options (`NationalIdOptions::default().required(true)`).
//!
//! | kind | constructor |
//! |------|-------------|
//! | `twNationalId` | [`national_id`] |
//! | `twBusinessId` | [`business_id`] |
//! | `twMobile` | [`mobile`] |
//! | `twTel` | [`tel`] |
//! | `twFax` | [`fax`] |
//! | `twPostalCode` | [`postal_code`] |
//! | `twBankAccount` | [`bank_account`] |
//! | `twLicensePlate` | [`license_plate`] |
//! | `twPassport` | [`passport`] |

pub mod bank_account;
pub mod business_id;
pub mod documents;
pub mod national_id;
pub mod phone;
pub mod postal_code;

pub use bank_account::{BankAccountOptions, TwBankAccountKind, bank_account};
pub use business_id::{BusinessIdOptions, TwBusinessIdKind, business_id};
pub use documents::{
    LicensePlateOptions, PassportOptions, TwLicensePlateKind, TwPassportKind, license_plate,
    passport,
};
pub use national_id::{NationalIdOptions, TwNationalIdKind, national_id};
pub use phone::{
    FaxOptions, MobileOptions, TelOptions, TwFaxKind, TwMobileKind, TwTelKind, fax, mobile, tel,
};
pub use postal_code::{PostalCodeOptions, TwPostalCodeKind, postal_code};

pub use crate::algorithms::taiwan::{
    AREA_CODES, BANK_CODES, POSTAL_PREFIXES, POSTAL_SUFFIX_RANGES, detect_national_id_kind,
    validate_taiwan_bank_account, validate_taiwan_business_id, validate_taiwan_fax,
    validate_taiwan_mobile, validate_taiwan_national_id, validate_taiwan_postal_code,
    validate_taiwan_tel,
};

/// Declares a string-valued kind backed by a `rules: Rules<str>` list.
///
/// `casing = ..` changes the default case folding; `finish = path`
/// post-processes accepted values (phone normalization).
macro_rules! taiwan_kind {
    (
        $(#[$meta:meta])*
        $kind:ident($options:ty) = $name:literal
        $(; casing = $casing:expr)?
        $(; finish = $finish:path)?
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $kind {
            options: $options,
            rules: $crate::combinators::Rules<str>,
        }

        impl $crate::pipeline::FieldKind for $kind {
            type Value = String;
            type Output = String;
            type Options = $options;

            const KIND: &'static str = $name;
            $(const CASING: $crate::pipeline::Casing = $casing;)?

            fn options(&self) -> &$options {
                &self.options
            }

            fn common(&self) -> &$crate::pipeline::Common<String> {
                &self.options.common
            }

            fn coerce(
                &self,
                input: $crate::pipeline::Prepared,
            ) -> Result<String, $crate::foundation::ValidationError> {
                $crate::pipeline::coerce::coerce_text(input)
            }

            fn check(&self, value: &String) -> Result<(), $crate::foundation::ValidationError> {
                $crate::foundation::Validate::validate(&self.rules, value.as_str())
            }

            fn finish(&self, value: String) -> String {
                $( let value = $finish(&value); )?
                value
            }

            fn from_listed(&self, text: String) -> Option<String> {
                Some(text)
            }
        }
    };
}

pub(crate) use taiwan_kind;

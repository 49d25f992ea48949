//! Taiwan identifier algorithms and reference tables.

pub mod bank;
pub mod business_id;
pub mod documents;
pub mod national_id;
pub mod phone;
pub mod postal;

pub use bank::{BANK_CODES, BankAccount, bank_name, split_bank_account, validate_taiwan_bank_account};
pub use business_id::{business_id_checksum, validate_taiwan_business_id};
pub use documents::{
    PassportType, PlateType, detect_passport_type, detect_plate_type, passport_matches,
    plate_matches,
};
pub use national_id::{
    NationalIdKind, NationalIdType, detect_national_id_kind, national_id_checksum,
    national_id_layout, validate_taiwan_national_id,
};
pub use phone::{
    AREA_CODES, AreaCode, is_mobile, landline_area, normalize_phone, validate_taiwan_fax,
    validate_taiwan_mobile, validate_taiwan_tel,
};
pub use postal::{
    POSTAL_PREFIXES, POSTAL_SUFFIX_RANGES, PostalCode, PostalFormat, postal_county,
    split_postal_code, suffix_in_range, validate_taiwan_postal_code,
};

//! Pure checking algorithms with no knowledge of the pipeline.
//!
//! Every function here takes already-normalized input and answers with a
//! `bool` or an `Option`; field kinds turn those answers into
//! [`MessageKey`](crate::foundation::MessageKey)s.

pub mod color;
pub mod datetime;
pub mod ids;
pub mod luhn;
pub mod network;
pub mod taiwan;

pub use color::{ColorFormat, ParsedColor, parse_color, parse_color_as};
pub use datetime::{ChronoMoments, DateTimeFormat, MomentParser, TimeZone};
pub use ids::{IdType, detect_id_type, validate_id};
pub use luhn::{CardType, detect_card_type, luhn_valid, validate_credit_card};

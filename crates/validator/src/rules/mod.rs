//! Reusable rule families shared by the field kinds.

pub mod content;
pub mod length;
pub mod pattern;
pub mod range;

pub use content::{
    EndsWith, Excludes, Includes, OneOf, StartsWith, ends_with, excludes, includes, one_of,
    starts_with,
};
pub use length::{LengthMode, MaxLength, MinLength, max_length, min_length};
pub use pattern::{MatchesRegex, matches_regex};
pub use range::{InRange, Max, Min, MultipleOf, in_range, max, min, multiple_of};

//! Fixed-offset time zones.

use std::fmt;

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;

/// Named zones without daylight saving time, as `(name, offset seconds)`.
pub const ZONE_NAMES: &[(&str, i32)] = &[
    ("UTC", 0),
    ("GMT", 0),
    ("Etc/UTC", 0),
    ("Asia/Taipei", 8 * 3600),
    ("Asia/Shanghai", 8 * 3600),
    ("Asia/Hong_Kong", 8 * 3600),
    ("Asia/Macau", 8 * 3600),
    ("Asia/Singapore", 8 * 3600),
    ("Asia/Manila", 8 * 3600),
    ("Asia/Tokyo", 9 * 3600),
    ("Asia/Seoul", 9 * 3600),
    ("Asia/Bangkok", 7 * 3600),
    ("Asia/Jakarta", 7 * 3600),
    ("Asia/Kolkata", 5 * 3600 + 1800),
    ("Asia/Dubai", 4 * 3600),
];

/// A time zone as a fixed UTC offset. Accepts `UTC`, `Z`, `±HH:MM`,
/// `±HHMM` or a name from [`ZONE_NAMES`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeZone {
    name: String,
    offset: FixedOffset,
}

fn parse_offset(offset: &str) -> Option<i32> {
    let (sign, digits) = match offset.as_bytes().first()? {
        b'+' => (1, &offset[1..]),
        b'-' => (-1, &offset[1..]),
        _ => return None,
    };
    let digits = digits.replace(':', "");
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    (hours <= 14 && minutes < 60).then_some(sign * (hours * 3600 + minutes * 60))
}

impl TimeZone {
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeZone`] when `name` is not recognised.
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        let seconds = if name == "Z" {
            Some(0)
        } else {
            ZONE_NAMES
                .iter()
                .find(|(known, _)| *known == name)
                .map(|&(_, secs)| secs)
                .or_else(|| parse_offset(name))
        };
        let offset = seconds
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::TimeZone(name.to_string()))?;
        Ok(Self {
            name: name.to_string(),
            offset,
        })
    }

    #[must_use]
    pub fn utc() -> Self {
        Self {
            name: "UTC".to_string(),
            offset: Utc.fix(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeZone({} {})", self.name, self.offset)
    }
}

impl TryFrom<String> for TimeZone {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(&name)
    }
}

impl From<TimeZone> for String {
    fn from(zone: TimeZone) -> Self {
        zone.name
    }
}

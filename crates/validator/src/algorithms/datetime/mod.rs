//! Date and time parsing behind a swappable [`MomentParser`].
//!
//! Field kinds never call `chrono` directly; they go through a
//! `MomentParser` so tests can pin "now" with [`ChronoMoments::at`].

pub mod format;
pub mod zone;

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone as _, Utc};

pub use format::{DateTimeFormat, Token, parse_tokens, tokenize};
pub use zone::{TimeZone, ZONE_NAMES};

/// Parses date/time input and reports the current instant.
pub trait MomentParser: Send + Sync + fmt::Debug {
    /// Parses `input` under `format`. Values without their own offset are
    /// read in `zone` (UTC when `None`).
    fn parse(
        &self,
        input: &str,
        format: &DateTimeFormat,
        zone: Option<&TimeZone>,
    ) -> Option<DateTime<FixedOffset>>;

    /// The instant "past", "future" and "today" compare against.
    fn now(&self) -> DateTime<Utc>;
}

/// The default [`MomentParser`], backed by `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoMoments {
    fixed_now: Option<DateTime<Utc>>,
}

impl ChronoMoments {
    #[must_use]
    pub const fn new() -> Self {
        Self { fixed_now: None }
    }

    /// A parser whose clock is stopped at `instant`.
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self {
            fixed_now: Some(instant),
        }
    }
}

fn localize(naive: NaiveDateTime, zone: Option<&TimeZone>) -> Option<DateTime<FixedOffset>> {
    let offset = zone.map_or_else(|| TimeZone::utc().offset(), TimeZone::offset);
    offset.from_local_datetime(&naive).single()
}

fn parse_iso(input: &str, zone: Option<&TimeZone>) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }
    const LOCAL: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    if let Some(naive) = LOCAL
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(input, f).ok())
    {
        return localize(naive, zone);
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?;
    localize(date.and_hms_opt(0, 0, 0)?, zone)
}

fn parse_unix(input: &str) -> Option<DateTime<FixedOffset>> {
    let digits = input.strip_prefix('-').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let seconds: i64 = input.parse().ok()?;
    DateTime::from_timestamp(seconds, 0).map(|dt| dt.fixed_offset())
}

impl MomentParser for ChronoMoments {
    fn parse(
        &self,
        input: &str,
        format: &DateTimeFormat,
        zone: Option<&TimeZone>,
    ) -> Option<DateTime<FixedOffset>> {
        match format {
            DateTimeFormat::Iso => parse_iso(input, zone),
            DateTimeFormat::Rfc => DateTime::parse_from_rfc2822(input).ok(),
            DateTimeFormat::Unix => parse_unix(input),
            DateTimeFormat::Pattern { tokens, .. } => localize(parse_tokens(input, tokens)?, zone),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }
}

/// Tries each format in order and returns the first successful parse.
pub fn parse_any(
    parser: &dyn MomentParser,
    input: &str,
    formats: &[DateTimeFormat],
    zone: Option<&TimeZone>,
) -> Option<DateTime<FixedOffset>> {
    formats.iter().find_map(|f| parser.parse(input, f, zone))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    use super::*;

    fn parse(input: &str, format: &str, zone: Option<&str>) -> Option<DateTime<FixedOffset>> {
        let zone = zone.map(|z| TimeZone::new(z).unwrap());
        ChronoMoments::new().parse(input, &DateTimeFormat::new(format), zone.as_ref())
    }

    #[rstest]
    #[case("2024-03-01T10:00:00Z")]
    #[case("2024-03-01T10:00:00+08:00")]
    #[case("2024-03-01T10:00:00.123Z")]
    #[case("2024-03-01T10:00:00")]
    #[case("2024-03-01T10:00")]
    #[case("2024-03-01")]
    fn iso_accepts(#[case] input: &str) {
        assert!(parse(input, "ISO", None).is_some());
    }

    #[rstest]
    #[case("2024-13-01")]
    #[case("2024-03-01 10:00")]
    #[case("yesterday")]
    fn iso_rejects(#[case] input: &str) {
        assert!(parse(input, "ISO", None).is_none());
    }

    #[test]
    fn rfc_and_unix() {
        let rfc = parse("Fri, 01 Mar 2024 10:00:00 +0000", "RFC", None).unwrap();
        assert_eq!(rfc.hour(), 10);

        let unix = parse("0", "UNIX", None).unwrap();
        assert_eq!(unix.year(), 1970);
        assert!(parse("-86400", "UNIX", None).is_some());
        assert!(parse("12.5", "UNIX", None).is_none());
        assert!(parse("+5", "UNIX", None).is_none());
    }

    #[test]
    fn local_values_take_the_zone_offset() {
        let taipei = parse("2024-03-01 08:00", "YYYY-MM-DD HH:mm", Some("Asia/Taipei")).unwrap();
        assert_eq!(taipei.with_timezone(&Utc).hour(), 0);

        let explicit = parse("2024-03-01T08:00:00Z", "ISO", Some("Asia/Taipei")).unwrap();
        assert_eq!(explicit.with_timezone(&Utc).hour(), 8);
    }

    #[test]
    fn fixed_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(ChronoMoments::at(instant).now(), instant);
    }

    #[test]
    fn first_matching_format_wins() {
        let formats = [DateTimeFormat::new("YYYY/MM/DD"), DateTimeFormat::Iso];
        let dt = parse_any(&ChronoMoments::new(), "2024-03-01", &formats, None).unwrap();
        assert_eq!(dt.day(), 1);
        assert!(parse_any(&ChronoMoments::new(), "03.01.2024", &formats, None).is_none());
    }
}

//! Token format mini-language.
//!
//! | token  | meaning                     | token | meaning                  |
//! |--------|-----------------------------|-------|--------------------------|
//! | `YYYY` | 4-digit year                | `YY`  | 2-digit year (69 → 1969) |
//! | `MM`   | month, 2 digits             | `M`   | month, 1–2 digits        |
//! | `DD`   | day, 2 digits               | `D`   | day, 1–2 digits          |
//! | `HH`   | hour 0–23, 2 digits         | `H`   | hour 0–23, 1–2 digits    |
//! | `hh`   | hour 1–12, 2 digits         | `h`   | hour 1–12, 1–2 digits    |
//! | `mm`   | minute, 2 digits            | `m`   | minute, 1–2 digits       |
//! | `ss`   | second, 2 digits            | `s`   | second, 1–2 digits       |
//! | `SSS`  | milliseconds                | `A`/`a` | `AM`/`PM`, `am`/`pm`   |
//!
//! Anything else is literal; `[...]` escapes a literal run.
//! `ISO`, `RFC` and `UNIX` name whole-value formats instead.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One element of a token format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Year4,
    Year2,
    Month { padded: bool },
    Day { padded: bool },
    Hour24 { padded: bool },
    Hour12 { padded: bool },
    Minute { padded: bool },
    Second { padded: bool },
    Millis,
    Meridiem { upper: bool },
    Literal(String),
}

const TOKENS: &[(&str, Token)] = &[
    ("YYYY", Token::Year4),
    ("SSS", Token::Millis),
    ("YY", Token::Year2),
    ("MM", Token::Month { padded: true }),
    ("DD", Token::Day { padded: true }),
    ("HH", Token::Hour24 { padded: true }),
    ("hh", Token::Hour12 { padded: true }),
    ("mm", Token::Minute { padded: true }),
    ("ss", Token::Second { padded: true }),
    ("M", Token::Month { padded: false }),
    ("D", Token::Day { padded: false }),
    ("H", Token::Hour24 { padded: false }),
    ("h", Token::Hour12 { padded: false }),
    ("m", Token::Minute { padded: false }),
    ("s", Token::Second { padded: false }),
    ("A", Token::Meridiem { upper: true }),
    ("a", Token::Meridiem { upper: false }),
];

fn push_literal(tokens: &mut Vec<Token>, c: char) {
    if let Some(Token::Literal(s)) = tokens.last_mut() {
        s.push(c);
    } else {
        tokens.push(Token::Literal(c.to_string()));
    }
}

/// Splits a token format into tokens. Unclosed `[` runs to the end.
#[must_use]
pub fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            let body = &rest[1..];
            let (literal, after) = body.split_once(']').unwrap_or((body, ""));
            for c in literal.chars() {
                push_literal(&mut tokens, c);
            }
            rest = after;
            continue;
        }
        if let Some((src, token)) = TOKENS.iter().find(|(src, _)| rest.starts_with(src)) {
            tokens.push(token.clone());
            rest = &rest[src.len()..];
        } else {
            push_literal(&mut tokens, c);
            rest = &rest[c.len_utf8()..];
        }
    }
    tokens
}

// ============================================================================
// FORMAT
// ============================================================================

/// A date/time format: a token pattern or one of the named formats.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateTimeFormat {
    /// RFC 3339 / ISO 8601.
    Iso,
    /// RFC 2822.
    Rfc,
    /// Seconds since the Unix epoch.
    Unix,
    Pattern { source: String, tokens: Vec<Token> },
}

impl DateTimeFormat {
    #[must_use]
    pub fn new(source: &str) -> Self {
        match source {
            "ISO" => Self::Iso,
            "RFC" => Self::Rfc,
            "UNIX" => Self::Unix,
            other => Self::Pattern {
                source: other.to_string(),
                tokens: tokenize(other),
            },
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Iso => "ISO",
            Self::Rfc => "RFC",
            Self::Unix => "UNIX",
            Self::Pattern { source, .. } => source,
        }
    }
}

impl fmt::Debug for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTimeFormat({})", self.as_str())
    }
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DateTimeFormat {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for DateTimeFormat {
    fn from(source: String) -> Self {
        Self::new(&source)
    }
}

impl From<DateTimeFormat> for String {
    fn from(format: DateTimeFormat) -> Self {
        format.as_str().to_string()
    }
}

// ============================================================================
// SCANNING
// ============================================================================

#[derive(Debug, Default)]
struct Parts {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour24: Option<u32>,
    hour12: Option<u32>,
    pm: Option<bool>,
    minute: u32,
    second: u32,
    millis: u32,
}

fn take_digits(input: &mut &str, min: usize, max: usize) -> Option<u32> {
    let len = input.bytes().take(max).take_while(u8::is_ascii_digit).count();
    if len < min {
        return None;
    }
    let (digits, rest) = input.split_at(len);
    *input = rest;
    digits.parse().ok()
}

fn take_meridiem(input: &mut &str, upper: bool) -> Option<bool> {
    let (am, pm) = if upper { ("AM", "PM") } else { ("am", "pm") };
    if let Some(rest) = input.strip_prefix(am) {
        *input = rest;
        Some(false)
    } else if let Some(rest) = input.strip_prefix(pm) {
        *input = rest;
        Some(true)
    } else {
        None
    }
}

fn width(padded: bool) -> (usize, usize) {
    if padded { (2, 2) } else { (1, 2) }
}

/// Parses `input` against `tokens`. Missing date parts default to
/// 1970-01-01 and missing time parts to midnight.
#[must_use]
pub fn parse_tokens(input: &str, tokens: &[Token]) -> Option<NaiveDateTime> {
    let mut rest = input;
    let mut parts = Parts::default();

    for token in tokens {
        match token {
            Token::Year4 => parts.year = Some(i32::try_from(take_digits(&mut rest, 4, 4)?).ok()?),
            Token::Year2 => {
                let yy = i32::try_from(take_digits(&mut rest, 2, 2)?).ok()?;
                parts.year = Some(if yy > 68 { 1900 + yy } else { 2000 + yy });
            }
            Token::Month { padded } => {
                let (min, max) = width(*padded);
                parts.month = Some(take_digits(&mut rest, min, max)?);
            }
            Token::Day { padded } => {
                let (min, max) = width(*padded);
                parts.day = Some(take_digits(&mut rest, min, max)?);
            }
            Token::Hour24 { padded } => {
                let (min, max) = width(*padded);
                parts.hour24 = Some(take_digits(&mut rest, min, max)?);
            }
            Token::Hour12 { padded } => {
                let (min, max) = width(*padded);
                parts.hour12 = Some(take_digits(&mut rest, min, max)?);
            }
            Token::Minute { padded } => {
                let (min, max) = width(*padded);
                parts.minute = take_digits(&mut rest, min, max)?;
            }
            Token::Second { padded } => {
                let (min, max) = width(*padded);
                parts.second = take_digits(&mut rest, min, max)?;
            }
            Token::Millis => parts.millis = take_digits(&mut rest, 3, 3)?,
            Token::Meridiem { upper } => parts.pm = Some(take_meridiem(&mut rest, *upper)?),
            Token::Literal(text) => rest = rest.strip_prefix(text.as_str())?,
        }
    }

    if !rest.is_empty() {
        return None;
    }
    assemble(&parts)
}

fn assemble(parts: &Parts) -> Option<NaiveDateTime> {
    let hour = match (parts.hour24, parts.hour12, parts.pm) {
        (Some(h), None, None) => h,
        (None, Some(h), pm) if (1..=12).contains(&h) => match pm {
            Some(true) if h != 12 => h + 12,
            Some(false) if h == 12 => 0,
            _ => h,
        },
        (None, None, _) => 0,
        _ => return None,
    };

    let date = NaiveDate::from_ymd_opt(
        parts.year.unwrap_or(1970),
        parts.month.unwrap_or(1),
        parts.day.unwrap_or(1),
    )?;
    let time = NaiveTime::from_hms_milli_opt(hour, parts.minute, parts.second, parts.millis)?;
    Some(date.and_time(time))
}

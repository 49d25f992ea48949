//! Calendar dates.
//!
//! Rule order: format → `min` → `max` → past → future → today →
//! not-today → weekdays-only → weekends-only → `includes` → `excludes`.
//! "Today" is the current date in the configured time zone (UTC by default).

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Deserialize;

use super::{default_moments, one_or_many};
use crate::algorithms::datetime::{DateTimeFormat, MomentParser, TimeZone};
use crate::combinators::Rules;
use crate::foundation::{ConfigError, MessageKey, Validate, ValidationError};
use crate::pipeline::{Common, Field, FieldKind, Prepared, coerce, impl_common_options};
use crate::rules::{excludes, includes};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    pub format: DateTimeFormat,
    /// Inclusive lower bound, written in `format`.
    pub min: Option<String>,
    /// Inclusive upper bound, written in `format`.
    pub max: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub includes: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub excludes: Vec<String>,
    pub must_be_past: bool,
    pub must_be_future: bool,
    pub must_be_today: bool,
    pub not_today: bool,
    pub weekdays_only: bool,
    pub weekends_only: bool,
    pub time_zone: Option<TimeZone>,
    #[serde(skip, default = "default_moments")]
    pub moments: Arc<dyn MomentParser>,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            format: DateTimeFormat::new("YYYY-MM-DD"),
            min: None,
            max: None,
            includes: Vec::new(),
            excludes: Vec::new(),
            must_be_past: false,
            must_be_future: false,
            must_be_today: false,
            not_today: false,
            weekdays_only: false,
            weekends_only: false,
            time_zone: None,
            moments: default_moments(),
        }
    }
}

impl DateOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: impl Into<DateTimeFormat>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn includes(mut self, needles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.includes = needles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn excludes(mut self, needles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excludes = needles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn must_be_past(mut self) -> Self {
        self.must_be_past = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn must_be_future(mut self) -> Self {
        self.must_be_future = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn must_be_today(mut self) -> Self {
        self.must_be_today = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn not_today(mut self) -> Self {
        self.not_today = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn weekdays_only(mut self) -> Self {
        self.weekdays_only = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn weekends_only(mut self) -> Self {
        self.weekends_only = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn time_zone(mut self, zone: TimeZone) -> Self {
        self.time_zone = Some(zone);
        self
    }

    /// Replaces the date parser and clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn moments(mut self, moments: impl MomentParser + 'static) -> Self {
        self.moments = Arc::new(moments);
        self
    }
}

impl_common_options!(DateOptions => String);

pub(crate) fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

// ============================================================================
// CALENDAR RULE
// ============================================================================

#[derive(Debug, Clone)]
struct CalendarRule {
    format: DateTimeFormat,
    zone: TimeZone,
    moments: Arc<dyn MomentParser>,
    min: Option<(NaiveDate, String)>,
    max: Option<(NaiveDate, String)>,
    past: bool,
    future: bool,
    today: bool,
    not_today: bool,
    weekdays_only: bool,
    weekends_only: bool,
}

impl CalendarRule {
    fn parse(&self, input: &str) -> Option<NaiveDate> {
        self.moments
            .parse(input, &self.format, Some(&self.zone))
            .map(|dt| dt.date_naive())
    }
}

impl Validate for CalendarRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let date = self.parse(input).ok_or_else(ValidationError::invalid)?;

        if let Some((min, text)) = &self.min
            && date < *min
        {
            return Err(ValidationError::new(MessageKey::Min).with_param("min", text));
        }
        if let Some((max, text)) = &self.max
            && date > *max
        {
            return Err(ValidationError::new(MessageKey::Max).with_param("max", text));
        }

        let today = self
            .moments
            .now()
            .with_timezone(&self.zone.offset())
            .date_naive();
        let failed = [
            (self.past && date >= today, MessageKey::Past),
            (self.future && date <= today, MessageKey::Future),
            (self.today && date != today, MessageKey::Today),
            (self.not_today && date == today, MessageKey::NotToday),
            (self.weekdays_only && is_weekend(date.weekday()), MessageKey::Weekday),
            (self.weekends_only && !is_weekend(date.weekday()), MessageKey::Weekend),
        ]
        .into_iter()
        .find_map(|(failed, key)| failed.then_some(key));

        match failed {
            Some(key) => Err(ValidationError::new(key)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// KIND
// ============================================================================

#[derive(Debug)]
pub struct DateKind {
    options: DateOptions,
    rules: Rules<str>,
}

impl FieldKind for DateKind {
    type Value = String;
    type Output = String;
    type Options = DateOptions;

    const KIND: &'static str = "date";

    fn options(&self) -> &DateOptions {
        &self.options
    }

    fn common(&self) -> &Common<String> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<String, ValidationError> {
        coerce::coerce_text(input)
    }

    fn check(&self, value: &String) -> Result<(), ValidationError> {
        self.rules.validate(value)
    }

    fn finish(&self, value: String) -> String {
        value
    }

    fn from_listed(&self, text: String) -> Option<String> {
        Some(text)
    }
}

/// Builds a date field.
///
/// # Errors
///
/// [`ConfigError::Bound`] when `min` or `max` cannot be read in `format`.
pub fn date(required: bool, mut options: DateOptions) -> Result<Field<DateKind>, ConfigError> {
    options.common.required = required;

    let mut calendar = CalendarRule {
        format: options.format.clone(),
        zone: options.time_zone.clone().unwrap_or_default(),
        moments: Arc::clone(&options.moments),
        min: None,
        max: None,
        past: options.must_be_past,
        future: options.must_be_future,
        today: options.must_be_today,
        not_today: options.not_today,
        weekdays_only: options.weekdays_only,
        weekends_only: options.weekends_only,
    };
    let bound = |option: &'static str, text: &String| {
        calendar
            .parse(text)
            .map(|date| (date, text.clone()))
            .ok_or_else(|| ConfigError::Bound {
                option,
                value: text.clone(),
            })
    };
    let min = options.min.as_ref().map(|text| bound("min", text)).transpose()?;
    let max = options.max.as_ref().map(|text| bound("max", text)).transpose()?;
    calendar.min = min;
    calendar.max = max;

    let rules = Rules::new()
        .push(calendar)
        .push_if(!options.includes.is_empty(), || includes(options.includes.clone()))
        .push_if(!options.excludes.is_empty(), || excludes(options.excludes.clone()));

    Ok(Field::new(DateKind { options, rules }))
}

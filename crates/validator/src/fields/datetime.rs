//! Date-times.
//!
//! Rule order: format (the first listed format that parses wins) → `min`
//! → `max` → past → future → hour window → allowed hours → minute step →
//! weekdays-only → weekends-only.
//!
//! Values without an explicit offset are read in `timeZone` (UTC by
//! default). Bounds are compared as instants; hour, minute and weekday
//! rules look at the wall clock in `timeZone`, or in the value's own offset
//! when no zone is configured.

use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::Deserialize;

use super::date::is_weekend;
use super::{default_moments, one_or_many};
use crate::algorithms::datetime::{DateTimeFormat, MomentParser, TimeZone, parse_any};
use crate::foundation::{ConfigError, MessageKey, Validate, ValidationError};
use crate::pipeline::{Common, Field, FieldKind, Prepared, coerce, impl_common_options};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DateTimeOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(rename = "format", deserialize_with = "one_or_many")]
    pub formats: Vec<DateTimeFormat>,
    pub time_zone: Option<TimeZone>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub min_hour: Option<u32>,
    pub max_hour: Option<u32>,
    pub allowed_hours: Vec<u32>,
    pub minute_step: Option<u32>,
    pub weekdays_only: bool,
    pub weekends_only: bool,
    pub must_be_past: bool,
    pub must_be_future: bool,
    #[serde(skip, default = "default_moments")]
    pub moments: Arc<dyn MomentParser>,
}

impl Default for DateTimeOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            formats: vec![
                DateTimeFormat::Iso,
                DateTimeFormat::new("YYYY-MM-DD HH:mm:ss"),
                DateTimeFormat::new("YYYY-MM-DD HH:mm"),
            ],
            time_zone: None,
            min: None,
            max: None,
            min_hour: None,
            max_hour: None,
            allowed_hours: Vec::new(),
            minute_step: None,
            weekdays_only: false,
            weekends_only: false,
            must_be_past: false,
            must_be_future: false,
            moments: default_moments(),
        }
    }
}

impl DateTimeOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn formats(mut self, formats: impl IntoIterator<Item = impl Into<DateTimeFormat>>) -> Self {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn time_zone(mut self, zone: TimeZone) -> Self {
        self.time_zone = Some(zone);
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
    pub fn hours(mut self, min_hour: u32, max_hour: u32) -> Self {
        self.min_hour = Some(min_hour);
        self.max_hour = Some(max_hour);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allowed_hours(mut self, hours: impl IntoIterator<Item = u32>) -> Self {
        self.allowed_hours = hours.into_iter().collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn minute_step(mut self, step: u32) -> Self {
        self.minute_step = Some(step);
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
    pub fn must_be_past(mut self) -> Self {
        self.must_be_past = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn must_be_future(mut self) -> Self {
        self.must_be_future = true;
        self
    }

    /// Replaces the date parser and clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn moments(mut self, moments: impl MomentParser + 'static) -> Self {
        self.moments = Arc::new(moments);
        self
    }
}

impl_common_options!(DateTimeOptions => String);

// ============================================================================
// MOMENT RULE
// ============================================================================

type Bound = Option<(DateTime<FixedOffset>, String)>;

#[derive(Debug, Clone)]
struct MomentRule {
    formats: Vec<DateTimeFormat>,
    zone: Option<TimeZone>,
    moments: Arc<dyn MomentParser>,
    min: Bound,
    max: Bound,
    past: bool,
    future: bool,
    min_hour: Option<u32>,
    max_hour: Option<u32>,
    allowed_hours: Vec<u32>,
    minute_step: Option<u32>,
    weekdays_only: bool,
    weekends_only: bool,
}

impl MomentRule {
    fn parse(&self, input: &str) -> Option<DateTime<FixedOffset>> {
        parse_any(&*self.moments, input, &self.formats, self.zone.as_ref())
    }

    fn bound(&self, option: &'static str, text: Option<&String>) -> Result<Bound, ConfigError> {
        text.map(|text| {
            self.parse(text)
                .map(|at| (at, text.clone()))
                .ok_or_else(|| ConfigError::Bound {
                    option,
                    value: text.clone(),
                })
        })
        .transpose()
    }
}

fn hour_error(hour: u32) -> ValidationError {
    ValidationError::new(MessageKey::Hour).with_param("hour", hour)
}

impl Validate for MomentRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let at = self.parse(input).ok_or_else(ValidationError::invalid)?;

        if let Some((min, text)) = &self.min
            && at < *min
        {
            return Err(ValidationError::new(MessageKey::Min).with_param("min", text));
        }
        if let Some((max, text)) = &self.max
            && at > *max
        {
            return Err(ValidationError::new(MessageKey::Max).with_param("max", text));
        }

        let now = self.moments.now();
        if self.past && at >= now {
            return Err(ValidationError::new(MessageKey::Past));
        }
        if self.future && at <= now {
            return Err(ValidationError::new(MessageKey::Future));
        }

        let local = match &self.zone {
            Some(zone) => at.with_timezone(&zone.offset()),
            None => at,
        };
        let hour = local.hour();
        if self.min_hour.is_some_and(|min| hour < min) || self.max_hour.is_some_and(|max| hour > max) {
            return Err(hour_error(hour));
        }
        if !self.allowed_hours.is_empty() && !self.allowed_hours.contains(&hour) {
            return Err(hour_error(hour));
        }
        if let Some(step) = self.minute_step
            && local.minute() % step != 0
        {
            return Err(ValidationError::new(MessageKey::MinuteStep).with_param("minuteStep", step));
        }

        let weekend = is_weekend(local.weekday());
        if self.weekdays_only && weekend {
            return Err(ValidationError::new(MessageKey::Weekday));
        }
        if self.weekends_only && !weekend {
            return Err(ValidationError::new(MessageKey::Weekend));
        }
        Ok(())
    }
}

// ============================================================================
// KIND
// ============================================================================

#[derive(Debug)]
pub struct DateTimeKind {
    options: DateTimeOptions,
    rule: MomentRule,
}

impl FieldKind for DateTimeKind {
    type Value = String;
    type Output = String;
    type Options = DateTimeOptions;

    const KIND: &'static str = "datetime";

    fn options(&self) -> &DateTimeOptions {
        &self.options
    }

    fn common(&self) -> &Common<String> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<String, ValidationError> {
        coerce::coerce_text(input)
    }

    fn check(&self, value: &String) -> Result<(), ValidationError> {
        self.rule.validate(value)
    }

    fn finish(&self, value: String) -> String {
        value
    }

    fn from_listed(&self, text: String) -> Option<String> {
        Some(text)
    }
}

/// Builds a date-time field.
///
/// # Errors
///
/// [`ConfigError::Bound`] when a bound cannot be read in any format,
/// [`ConfigError::Zero`] for `minuteStep: 0`.
pub fn datetime(required: bool, mut options: DateTimeOptions) -> Result<Field<DateTimeKind>, ConfigError> {
    options.common.required = required;
    if options.minute_step == Some(0) {
        return Err(ConfigError::Zero { option: "minuteStep" });
    }
    if options.formats.is_empty() {
        options.formats = DateTimeOptions::default().formats;
    }

    let mut rule = MomentRule {
        formats: options.formats.clone(),
        zone: options.time_zone.clone(),
        moments: Arc::clone(&options.moments),
        min: None,
        max: None,
        past: options.must_be_past,
        future: options.must_be_future,
        min_hour: options.min_hour,
        max_hour: options.max_hour,
        allowed_hours: options.allowed_hours.clone(),
        minute_step: options.minute_step,
        weekdays_only: options.weekdays_only,
        weekends_only: options.weekends_only,
    };
    rule.min = rule.bound("min", options.min.as_ref())?;
    rule.max = rule.bound("max", options.max.as_ref())?;

    Ok(Field::new(DateTimeKind { options, rule }))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::algorithms::ChronoMoments;

    fn code(field: &Field<DateTimeKind>, input: &str) -> Option<MessageKey> {
        field.parse(json!(input)).err().and_then(|e| e.code())
    }

    #[rstest]
    #[case("2024-06-15T10:30:00Z", None)]
    #[case("2024-06-15T10:30:00+08:00", None)]
    #[case("2024-06-15 10:30:00", None)]
    #[case("2024-06-15 10:30", None)]
    #[case("2024-06-15 25:30", Some(MessageKey::Invalid))]
    #[case("15/06/2024", Some(MessageKey::Invalid))]
    fn default_formats(#[case] input: &str, #[case] expected: Option<MessageKey>) {
        let field = datetime(true, DateTimeOptions::default()).unwrap();
        assert_eq!(code(&field, input), expected);
    }

    #[test]
    fn bounds_compare_instants_across_offsets() {
        let field = datetime(
            true,
            DateTimeOptions::default()
                .min("2024-06-15T00:00:00Z")
                .max("2024-06-15T23:59:59Z"),
        )
        .unwrap();
        assert_eq!(code(&field, "2024-06-15T07:59:59+08:00"), Some(MessageKey::Min));
        assert_eq!(code(&field, "2024-06-15T08:00:00+08:00"), None);
        assert_eq!(code(&field, "2024-06-15T23:59:59Z"), None);
        assert_eq!(code(&field, "2024-06-16T00:00:00Z"), Some(MessageKey::Max));
    }

    #[test]
    fn zone_applies_to_local_values() {
        let field = datetime(
            true,
            DateTimeOptions::default()
                .time_zone(TimeZone::new("Asia/Taipei").unwrap())
                .max("2024-06-15T00:00:00Z"),
        )
        .unwrap();
        // 08:00 in Taipei is midnight UTC.
        assert_eq!(code(&field, "2024-06-15 08:00"), None);
        assert_eq!(code(&field, "2024-06-15 08:01"), Some(MessageKey::Max));
    }

    #[test]
    fn hours_and_minute_steps_use_wall_clock() {
        let field = datetime(
            true,
            DateTimeOptions::default()
                .time_zone(TimeZone::new("Asia/Taipei").unwrap())
                .hours(9, 17)
                .minute_step(15),
        )
        .unwrap();
        assert_eq!(code(&field, "2024-06-14T01:30:00Z"), None);
        assert_eq!(code(&field, "2024-06-14T12:00:00Z"), Some(MessageKey::Hour));
        assert_eq!(code(&field, "2024-06-14 09:10"), Some(MessageKey::MinuteStep));

        let allowed = datetime(true, DateTimeOptions::default().allowed_hours([9, 14])).unwrap();
        assert_eq!(code(&allowed, "2024-06-14 14:00"), None);
        assert_eq!(code(&allowed, "2024-06-14 15:00"), Some(MessageKey::Hour));
    }

    #[test]
    fn relative_and_weekday_rules() {
        let clock = ChronoMoments::at(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        let field = datetime(true, DateTimeOptions::default().must_be_past().moments(clock)).unwrap();
        assert_eq!(code(&field, "2024-06-15 11:59"), None);
        assert_eq!(code(&field, "2024-06-15 12:00"), Some(MessageKey::Past));

        let weekdays = datetime(true, DateTimeOptions::default().weekdays_only()).unwrap();
        assert_eq!(code(&weekdays, "2024-06-16 10:00"), Some(MessageKey::Weekday));
    }

    #[test]
    fn named_formats() {
        let field = datetime(true, DateTimeOptions::default().formats(["UNIX", "RFC"])).unwrap();
        assert_eq!(code(&field, "1718445600"), None);
        assert_eq!(code(&field, "Sat, 15 Jun 2024 10:00:00 +0000"), None);
        assert_eq!(code(&field, "2024-06-15T10:00:00Z"), Some(MessageKey::Invalid));
    }

    #[test]
    fn configuration_errors() {
        assert!(matches!(
            datetime(false, DateTimeOptions::default().minute_step(0)),
            Err(ConfigError::Zero { option: "minuteStep" })
        ));
        assert!(matches!(
            datetime(false, DateTimeOptions::default().max("soon")),
            Err(ConfigError::Bound { option: "max", .. })
        ));
    }
}

//! Times of day.
//!
//! Rule order: format → `min` → `max` → hour window → minute step.

use std::sync::Arc;

use chrono::{NaiveTime, Timelike};
use serde::Deserialize;

use super::{default_moments, one_or_many};
use crate::algorithms::datetime::{DateTimeFormat, MomentParser, parse_any};
use crate::foundation::{ConfigError, MessageKey, Validate, ValidationError};
use crate::pipeline::{Common, Field, FieldKind, Prepared, coerce, impl_common_options};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeOptions {
    #[serde(flatten)]
    pub common: Common<String>,
    #[serde(rename = "format", deserialize_with = "one_or_many")]
    pub formats: Vec<DateTimeFormat>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub min_hour: Option<u32>,
    pub max_hour: Option<u32>,
    pub minute_step: Option<u32>,
    #[serde(skip, default = "default_moments")]
    pub moments: Arc<dyn MomentParser>,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            common: Common::default(),
            formats: ["HH:mm", "HH:mm:ss", "hh:mm A", "H:mm"]
                .into_iter()
                .map(DateTimeFormat::new)
                .collect(),
            min: None,
            max: None,
            min_hour: None,
            max_hour: None,
            minute_step: None,
            moments: default_moments(),
        }
    }
}

impl TimeOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn formats(mut self, formats: impl IntoIterator<Item = impl Into<DateTimeFormat>>) -> Self {
        self.formats = formats.into_iter().map(Into::into).collect();
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
    pub fn minute_step(mut self, step: u32) -> Self {
        self.minute_step = Some(step);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn moments(mut self, moments: impl MomentParser + 'static) -> Self {
        self.moments = Arc::new(moments);
        self
    }
}

impl_common_options!(TimeOptions => String);

#[derive(Debug, Clone)]
struct ClockRule {
    formats: Vec<DateTimeFormat>,
    moments: Arc<dyn MomentParser>,
    min: Option<(NaiveTime, String)>,
    max: Option<(NaiveTime, String)>,
    min_hour: Option<u32>,
    max_hour: Option<u32>,
    minute_step: Option<u32>,
}

impl ClockRule {
    fn parse(&self, input: &str) -> Option<NaiveTime> {
        parse_any(&*self.moments, input, &self.formats, None).map(|at| at.time())
    }

    fn bound(&self, option: &'static str, text: Option<&String>) -> Result<Option<(NaiveTime, String)>, ConfigError> {
        text.map(|text| {
            self.parse(text)
                .map(|time| (time, text.clone()))
                .ok_or_else(|| ConfigError::Bound {
                    option,
                    value: text.clone(),
                })
        })
        .transpose()
    }
}

impl Validate for ClockRule {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let time = self.parse(input).ok_or_else(ValidationError::invalid)?;

        if let Some((min, text)) = &self.min
            && time < *min
        {
            return Err(ValidationError::new(MessageKey::Min).with_param("min", text));
        }
        if let Some((max, text)) = &self.max
            && time > *max
        {
            return Err(ValidationError::new(MessageKey::Max).with_param("max", text));
        }

        let hour = time.hour();
        if self.min_hour.is_some_and(|min| hour < min) || self.max_hour.is_some_and(|max| hour > max) {
            return Err(ValidationError::new(MessageKey::Hour).with_param("hour", hour));
        }
        if let Some(step) = self.minute_step
            && time.minute() % step != 0
        {
            return Err(ValidationError::new(MessageKey::MinuteStep).with_param("minuteStep", step));
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct TimeKind {
    options: TimeOptions,
    rule: ClockRule,
}

impl FieldKind for TimeKind {
    type Value = String;
    type Output = String;
    type Options = TimeOptions;

    const KIND: &'static str = "time";

    fn options(&self) -> &TimeOptions {
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

/// Builds a time-of-day field.
///
/// # Errors
///
/// [`ConfigError::Bound`] when a bound cannot be read in any format,
/// [`ConfigError::Zero`] for `minuteStep: 0`.
pub fn time(required: bool, mut options: TimeOptions) -> Result<Field<TimeKind>, ConfigError> {
    options.common.required = required;
    if options.minute_step == Some(0) {
        return Err(ConfigError::Zero { option: "minuteStep" });
    }
    if options.formats.is_empty() {
        options.formats = TimeOptions::default().formats;
    }

    let mut rule = ClockRule {
        formats: options.formats.clone(),
        moments: Arc::clone(&options.moments),
        min: None,
        max: None,
        min_hour: options.min_hour,
        max_hour: options.max_hour,
        minute_step: options.minute_step,
    };
    rule.min = rule.bound("min", options.min.as_ref())?;
    rule.max = rule.bound("max", options.max.as_ref())?;

    Ok(Field::new(TimeKind { options, rule }))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn code(field: &Field<TimeKind>, input: &str) -> Option<MessageKey> {
        field.parse(json!(input)).err().and_then(|e| e.code())
    }

    #[rstest]
    #[case("09:30", None)]
    #[case("09:30:15", None)]
    #[case("9:30", None)]
    #[case("09:30 PM", None)]
    #[case("24:00", Some(MessageKey::Invalid))]
    #[case("9.30", Some(MessageKey::Invalid))]
    fn default_formats(#[case] input: &str, #[case] expected: Option<MessageKey>) {
        let field = time(true, TimeOptions::default()).unwrap();
        assert_eq!(code(&field, input), expected);
    }

    #[test]
    fn bounds_accept_any_listed_format() {
        let field = time(true, TimeOptions::default().min("09:00").max("05:30 PM")).unwrap();
        assert_eq!(code(&field, "09:00"), None);
        assert_eq!(code(&field, "17:30"), None);
        assert_eq!(code(&field, "08:59"), Some(MessageKey::Min));
        assert_eq!(code(&field, "17:31"), Some(MessageKey::Max));
    }

    #[test]
    fn hours_then_steps() {
        let field = time(true, TimeOptions::default().hours(8, 18).minute_step(30)).unwrap();
        assert_eq!(code(&field, "07:30"), Some(MessageKey::Hour));
        assert_eq!(code(&field, "08:15"), Some(MessageKey::MinuteStep));
        assert_eq!(code(&field, "18:30"), None);
    }
}

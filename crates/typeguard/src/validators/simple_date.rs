//! Epoch-millisecond date validator
//!
//! Numeric input is disambiguated between seconds and milliseconds by a fixed
//! window: numbers between [`SECONDS_WINDOW_START`] and [`SECONDS_WINDOW_END`]
//! (2020-01-01 and 2050-01-01 in epoch seconds) are taken as seconds, anything
//! else as milliseconds. Millisecond values from 1970-01-19 to 1970-01-30 are
//! therefore misread as seconds; they are outside the accepted range anyway.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::is_nullish;
use crate::foundation::{Coerce, Coercer, ErrorCode, ErrorOptions};
use crate::macros::impl_error_options;
use crate::stringify::{stringify, stringify_datetime};

/// 2020-01-01T00:00:00Z in epoch seconds.
pub const SECONDS_WINDOW_START: i64 = 1_577_836_800;

/// 2050-01-01T00:00:00Z in epoch seconds.
pub const SECONDS_WINDOW_END: i64 = 2_524_608_000;

/// Earliest accepted date, in epoch milliseconds.
pub const MIN_MILLIS: i64 = SECONDS_WINDOW_START * 1000;

/// Latest accepted date, in epoch milliseconds.
pub const MAX_MILLIS: i64 = SECONDS_WINDOW_END * 1000;

// ============================================================================
// SIMPLE DATE
// ============================================================================

/// A UTC instant stored as epoch milliseconds.
///
/// Serializes as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimpleDate(i64);

impl SimpleDate {
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Converts to a chrono timestamp; `None` if outside chrono's range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl From<DateTime<Utc>> for SimpleDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.timestamp_millis())
    }
}

impl From<SimpleDate> for i64 {
    fn from(value: SimpleDate) -> Self {
        value.0
    }
}

impl fmt::Display for SimpleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => f.write_str(&stringify_datetime(&datetime)),
            None => write!(f, "{}", self.0),
        }
    }
}

// ============================================================================
// REQUIRED SIMPLE DATE
// ============================================================================

/// Accepts epoch numbers and date strings between 2020-01-01 and 2050-01-01.
///
/// Strings are tried as RFC 3339, then as `YYYY-MM-DD HH:MM:SS[.fff]` (with a
/// space or `T`) in UTC, then as a bare `YYYY-MM-DD` at UTC midnight.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use typeguard::prelude::*;
///
/// let cx = Coercer::standard();
/// let seconds = required_simple_date().coerce(Some(&json!(1_700_000_000)), &cx).unwrap();
/// let millis = required_simple_date().coerce(Some(&json!(1_700_000_000_000_i64)), &cx).unwrap();
/// assert_eq!(seconds, millis);
/// assert_eq!(seconds.to_string(), "2023-11-14T22:13:20.000Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequiredSimpleDate {
    pub default_value: Option<SimpleDate>,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl RequiredSimpleDate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: SimpleDate) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Range-checks a native timestamp.
    pub fn coerce_datetime<E>(
        &self,
        value: &DateTime<Utc>,
        cx: &Coercer<E>,
    ) -> Result<SimpleDate, E> {
        self.check_range(value.timestamp_millis(), cx)
    }

    fn check_range<E>(&self, millis: i64, cx: &Coercer<E>) -> Result<SimpleDate, E> {
        let date = SimpleDate(millis);
        if (MIN_MILLIS..=MAX_MILLIS).contains(&millis) {
            return Ok(date);
        }
        let min = SimpleDate(MIN_MILLIS).to_string();
        let max = SimpleDate(MAX_MILLIS).to_string();
        let actual = date.to_string();
        let options = self
            .error_options
            .clone()
            .with_param("min", min.clone())
            .with_param("max", max.clone())
            .with_param("actual", actual.clone());
        Err(cx.fail(
            format!("Date is out of range: {actual} must be between {min} and {max}"),
            ErrorCode::OutOfRange,
            &options,
        ))
    }
}

impl_error_options!(RequiredSimpleDate);

fn millis_from_number(value: f64) -> i64 {
    let in_seconds_window =
        (SECONDS_WINDOW_START as f64..=SECONDS_WINDOW_END as f64).contains(&value);
    let millis = if in_seconds_window { value * 1000.0 } else { value };
    // Saturating cast; out-of-range values are rejected by the range check.
    millis.trunc() as i64
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl Coerce for RequiredSimpleDate {
    type Output = SimpleDate;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<SimpleDate, E> {
        if is_nullish(raw) {
            if let Some(default) = self.default_value {
                return Ok(default);
            }
        }

        let millis = match raw {
            Some(Value::Number(n)) => n.as_f64().filter(|f| f.is_finite()).map(millis_from_number),
            Some(Value::String(s)) => parse_text(s).map(|datetime| datetime.timestamp_millis()),
            _ => None,
        };

        match millis {
            Some(millis) => self.check_range(millis, cx),
            None => {
                let code = if is_nullish(raw) {
                    ErrorCode::MissingValue
                } else {
                    ErrorCode::InvalidFormat
                };
                Err(cx.fail(
                    format!("{} is not a valid date", stringify(raw)),
                    code,
                    &self.error_options,
                ))
            }
        }
    }
}

/// Creates a [`RequiredSimpleDate`] validator.
#[must_use]
pub fn required_simple_date() -> RequiredSimpleDate {
    RequiredSimpleDate::new()
}

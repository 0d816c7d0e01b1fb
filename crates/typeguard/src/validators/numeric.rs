//! Numeric validators
//!
//! Numbers are accepted as JSON numbers or as decimal strings. String forms
//! are capped at 15 digits on each side of the point so they always fit the
//! float mantissa exactly.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Number, Value};

use super::is_nullish;
use crate::foundation::{Coerce, Coercer, ErrorCode, ErrorOptions};
use crate::macros::impl_error_options;
use crate::stringify::stringify;

/// Largest integer magnitude a double can represent without gaps (2^53 - 1).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

static INTEGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]{1,15}$").expect("integer pattern compiles"));

static FLOAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]{1,15}([.][0-9]{0,15})?$").expect("float pattern compiles")
});

fn invalid_format<E>(message: String, options: &ErrorOptions, cx: &Coercer<E>) -> E {
    cx.fail(message, ErrorCode::InvalidFormat, options)
}

fn out_of_range<E>(
    message: String,
    bound: (&'static str, String),
    actual: String,
    options: &ErrorOptions,
    cx: &Coercer<E>,
) -> E {
    let options = options
        .clone()
        .with_param(bound.0, bound.1)
        .with_param("actual", actual);
    cx.fail(message, ErrorCode::OutOfRange, &options)
}

// ============================================================================
// REQUIRED INT
// ============================================================================

/// Accepts safe integers and integer strings, with optional inclusive bounds.
///
/// Integral floats such as `3.0` are accepted; `3.5` is rejected rather than
/// truncated. `default_value` is returned for absent or null input without a
/// range check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequiredInt {
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub default_value: Option<i64>,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl RequiredInt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_value(mut self, min: i64) -> Self {
        self.min_value = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_value(mut self, max: i64) -> Self {
        self.max_value = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: i64) -> Self {
        self.default_value = Some(value);
        self
    }

    fn from_number<E>(&self, n: &Number, cx: &Coercer<E>) -> Result<i64, E> {
        if let Some(i) = n.as_i64() {
            if i.unsigned_abs() <= MAX_SAFE_INTEGER.unsigned_abs() {
                return Ok(i);
            }
        } else if let Some(f) = n.as_f64().filter(|f| n.is_f64() && f.is_finite()) {
            let safe = f.abs() <= MAX_SAFE_INTEGER as f64;
            if safe && f.fract() != 0.0 {
                return Err(invalid_format(
                    format!("Invalid value format: {n} is a float (an integer is required)"),
                    &self.error_options,
                    cx,
                ));
            }
            if safe {
                return Ok(f as i64);
            }
        }
        Err(invalid_format(
            format!("Invalid value format: {n} does not look like a safe integer"),
            &self.error_options,
            cx,
        ))
    }

    fn check_range<E>(&self, value: i64, cx: &Coercer<E>) -> Result<i64, E> {
        if let Some(min) = self.min_value.filter(|min| value < *min) {
            return Err(out_of_range(
                format!("Value is out of range: the '{value}' value must not be less than {min}"),
                ("min", min.to_string()),
                value.to_string(),
                &self.error_options,
                cx,
            ));
        }
        if let Some(max) = self.max_value.filter(|max| value > *max) {
            return Err(out_of_range(
                format!("Value is out of range: the '{value}' value must not be greater than {max}"),
                ("max", max.to_string()),
                value.to_string(),
                &self.error_options,
                cx,
            ));
        }
        Ok(value)
    }
}

impl_error_options!(RequiredInt);

impl Coerce for RequiredInt {
    type Output = i64;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<i64, E> {
        if is_nullish(raw) {
            if let Some(default) = self.default_value {
                return Ok(default);
            }
        }

        let value = match raw {
            Some(Value::Number(n)) => self.from_number(n, cx)?,
            Some(Value::String(s)) => match s.parse::<i64>() {
                Ok(parsed) if INTEGER_PATTERN.is_match(s) => parsed,
                _ => {
                    return Err(invalid_format(
                        format!("Invalid value format: '{s}' does not look like a valid integer string"),
                        &self.error_options,
                        cx,
                    ));
                }
            },
            other => {
                let code = if is_nullish(other) {
                    ErrorCode::MissingValue
                } else {
                    ErrorCode::InvalidFormat
                };
                return Err(cx.fail(
                    format!(
                        "Invalid value format: {} does not look like a valid integer",
                        stringify(other)
                    ),
                    code,
                    &self.error_options,
                ));
            }
        };

        self.check_range(value, cx)
    }
}

/// Creates a [`RequiredInt`] validator.
#[must_use]
pub fn required_int() -> RequiredInt {
    RequiredInt::new()
}

// ============================================================================
// REQUIRED FLOAT
// ============================================================================

/// Accepts finite numbers and decimal strings, with optional inclusive bounds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequiredFloat {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub default_value: Option<f64>,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl RequiredFloat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    fn check_range<E>(&self, value: f64, cx: &Coercer<E>) -> Result<f64, E> {
        if let Some(min) = self.min_value.filter(|min| value < *min) {
            return Err(out_of_range(
                format!("Value is out of range: {value} must be greater than or equal to {min}"),
                ("min", min.to_string()),
                value.to_string(),
                &self.error_options,
                cx,
            ));
        }
        if let Some(max) = self.max_value.filter(|max| value > *max) {
            return Err(out_of_range(
                format!("Value is out of range: the '{value}' value must be less than or equal to {max}"),
                ("max", max.to_string()),
                value.to_string(),
                &self.error_options,
                cx,
            ));
        }
        Ok(value)
    }
}

impl_error_options!(RequiredFloat);

impl Coerce for RequiredFloat {
    type Output = f64;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<f64, E> {
        if is_nullish(raw) {
            if let Some(default) = self.default_value {
                return Ok(default);
            }
        }

        let value = match raw {
            Some(Value::Number(n)) => match n.as_f64().filter(|f| f.is_finite()) {
                Some(f) => f,
                None => {
                    return Err(invalid_format(
                        format!("Invalid value format: {n} does not look like a finite float"),
                        &self.error_options,
                        cx,
                    ));
                }
            },
            Some(Value::String(s)) => match s.parse::<f64>() {
                Ok(parsed) if FLOAT_PATTERN.is_match(s) => parsed,
                _ => {
                    return Err(invalid_format(
                        format!("Invalid value format: '{s}' does not look like a valid float string"),
                        &self.error_options,
                        cx,
                    ));
                }
            },
            other => {
                let code = if is_nullish(other) {
                    ErrorCode::MissingValue
                } else {
                    ErrorCode::InvalidFormat
                };
                return Err(cx.fail(
                    format!(
                        "Invalid value format: {} does not look like a valid float",
                        stringify(other)
                    ),
                    code,
                    &self.error_options,
                ));
            }
        };

        self.check_range(value, cx)
    }
}

/// Creates a [`RequiredFloat`] validator.
#[must_use]
pub fn required_float() -> RequiredFloat {
    RequiredFloat::new()
}

// ============================================================================
// TESTS
// ============================================================================

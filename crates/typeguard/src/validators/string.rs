//! String validators

use serde::Deserialize;
use serde_json::{Number, Value};

use super::is_nullish;
use crate::foundation::{Coerce, Coercer, ErrorCode, ErrorOptions};
use crate::macros::impl_error_options;
use crate::stringify::stringify;

// ============================================================================
// REQUIRED STRING
// ============================================================================

/// Accepts strings, and numbers when `accept_number` is set.
///
/// Numbers are rendered in their decimal text form. `default_value` is
/// returned for absent or null input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequiredString {
    pub default_value: Option<String>,
    pub accept_number: bool,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl RequiredString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn accept_number(mut self, accept: bool) -> Self {
        self.accept_number = accept;
        self
    }
}

impl_error_options!(RequiredString);

impl Coerce for RequiredString {
    type Output = String;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<String, E> {
        coerce_string(raw, self.default_value.as_deref(), self.accept_number)
            .ok_or_else(|| self.fail(raw, "is not a string", cx))
    }
}

impl RequiredString {
    fn fail<E>(&self, raw: Option<&Value>, what: &str, cx: &Coercer<E>) -> E {
        let code = if is_nullish(raw) {
            ErrorCode::MissingValue
        } else {
            ErrorCode::InvalidFormat
        };
        cx.fail(
            format!("{} {what}", stringify(raw)),
            code,
            &self.error_options,
        )
    }
}

fn coerce_string(raw: Option<&Value>, default: Option<&str>, accept_number: bool) -> Option<String> {
    if is_nullish(raw) {
        if let Some(default) = default {
            return Some(default.to_owned());
        }
    }
    match raw {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) if accept_number => Some(number_text(n)),
        _ => None,
    }
}

// Floats go through `f64` Display so integral values drop the `.0`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

/// Creates a [`RequiredString`] validator.
#[must_use]
pub fn required_string() -> RequiredString {
    RequiredString::new()
}

// ============================================================================
// NON-EMPTY STRING
// ============================================================================

/// Same coercion as [`RequiredString`], then rejects the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NonEmptyString {
    pub default_value: Option<String>,
    pub accept_number: bool,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl NonEmptyString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn accept_number(mut self, accept: bool) -> Self {
        self.accept_number = accept;
        self
    }
}

impl_error_options!(NonEmptyString);

impl Coerce for NonEmptyString {
    type Output = String;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<String, E> {
        match coerce_string(raw, self.default_value.as_deref(), self.accept_number) {
            Some(s) if !s.is_empty() => Ok(s),
            _ => {
                let code = if is_nullish(raw) {
                    ErrorCode::MissingValue
                } else {
                    ErrorCode::InvalidFormat
                };
                Err(cx.fail(
                    format!("{} is not a non-empty string", stringify(raw)),
                    code,
                    &self.error_options,
                ))
            }
        }
    }
}

/// Creates a [`NonEmptyString`] validator.
#[must_use]
pub fn non_empty_string() -> NonEmptyString {
    NonEmptyString::new()
}

// ============================================================================
// TESTS
// ============================================================================

//! Array validator

use serde::Deserialize;
use serde_json::Value;

use super::is_nullish;
use crate::foundation::{Coerce, Coercer, ErrorCode, ErrorOptions};
use crate::macros::impl_error_options;
use crate::stringify::stringify;

/// Accepts JSON arrays as they are, with optional inclusive length bounds.
///
/// Elements are not inspected; validate them separately, typically with a
/// tag extended by the element index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequiredArray {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub default_value: Option<Vec<Value>>,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl RequiredArray {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: Vec<Value>) -> Self {
        self.default_value = Some(value);
        self
    }

    fn length_error<E>(
        &self,
        message: String,
        bound: (&'static str, usize),
        len: usize,
        cx: &Coercer<E>,
    ) -> E {
        let options = self
            .error_options
            .clone()
            .with_param(bound.0, bound.1.to_string())
            .with_param("actual", len.to_string());
        cx.fail(message, ErrorCode::OutOfRange, &options)
    }
}

impl_error_options!(RequiredArray);

impl Coerce for RequiredArray {
    type Output = Vec<Value>;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<Vec<Value>, E> {
        if is_nullish(raw) {
            if let Some(default) = &self.default_value {
                return Ok(default.clone());
            }
        }

        let Some(Value::Array(items)) = raw else {
            let code = if is_nullish(raw) {
                ErrorCode::MissingValue
            } else {
                ErrorCode::InvalidFormat
            };
            return Err(cx.fail(
                format!("{} is not an array", stringify(raw)),
                code,
                &self.error_options,
            ));
        };

        let len = items.len();
        if let Some(min) = self.min_length.filter(|min| len < *min) {
            return Err(self.length_error(
                format!("The array must contain at least {min} element(s)"),
                ("min", min),
                len,
                cx,
            ));
        }
        if let Some(max) = self.max_length.filter(|max| len > *max) {
            return Err(self.length_error(
                format!("The array must contain at most {max} element(s)"),
                ("max", max),
                len,
                cx,
            ));
        }
        Ok(items.clone())
    }
}

/// Creates a [`RequiredArray`] validator.
#[must_use]
pub fn required_array() -> RequiredArray {
    RequiredArray::new()
}

//! Boolean validator

use serde::Deserialize;
use serde_json::Value;

use super::is_nullish;
use crate::foundation::{Coerce, Coercer, ErrorCode, ErrorOptions};
use crate::macros::impl_error_options;
use crate::stringify::stringify;

/// Accepts booleans and the text tokens `true`, `True`, `TRUE`, `T`,
/// `false`, `False`, `FALSE`, `F`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequiredBool {
    pub default_value: Option<bool>,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl RequiredBool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn default_value(mut self, value: bool) -> Self {
        self.default_value = Some(value);
        self
    }
}

impl_error_options!(RequiredBool);

fn parse_token(token: &str) -> Option<bool> {
    match token {
        "true" | "True" | "TRUE" | "T" => Some(true),
        "false" | "False" | "FALSE" | "F" => Some(false),
        _ => None,
    }
}

impl Coerce for RequiredBool {
    type Output = bool;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<bool, E> {
        if is_nullish(raw) {
            if let Some(default) = self.default_value {
                return Ok(default);
            }
        }
        let parsed = match raw {
            Some(Value::Bool(b)) => Some(*b),
            Some(Value::String(s)) => parse_token(s),
            _ => None,
        };
        parsed.ok_or_else(|| {
            let code = if is_nullish(raw) {
                ErrorCode::MissingValue
            } else {
                ErrorCode::InvalidFormat
            };
            cx.fail(
                format!("{} is not a boolean", stringify(raw)),
                code,
                &self.error_options,
            )
        })
    }
}

/// Creates a [`RequiredBool`] validator.
#[must_use]
pub fn required_bool() -> RequiredBool {
    RequiredBool::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(false), false)]
    #[case(json!("true"), true)]
    #[case(json!("True"), true)]
    #[case(json!("TRUE"), true)]
    #[case(json!("T"), true)]
    #[case(json!("false"), false)]
    #[case(json!("False"), false)]
    #[case(json!("FALSE"), false)]
    #[case(json!("F"), false)]
    fn accepts(#[case] raw: Value, #[case] expected: bool) {
        let cx = Coercer::standard();
        assert_eq!(required_bool().coerce(Some(&raw), &cx).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("yes"))]
    #[case(json!("t"))]
    #[case(json!("tRuE"))]
    #[case(json!(1))]
    #[case(json!(0))]
    #[case(json!([true]))]
    fn rejects(#[case] raw: Value) {
        let cx = Coercer::standard();
        let err = required_bool().coerce(Some(&raw), &cx).unwrap_err();
        assert!(err.has_code(ErrorCode::InvalidFormat));
    }

    #[test]
    fn absent_without_default() {
        let cx = Coercer::standard();
        let err = required_bool().coerce(Some(&json!(null)), &cx).unwrap_err();
        assert_eq!(err.message, "<null> is not a boolean");
        assert!(err.has_code(ErrorCode::MissingValue));
    }

    #[test]
    fn absent_with_default() {
        let cx = Coercer::standard();
        assert!(!required_bool().default_value(false).coerce(None, &cx).unwrap());
    }
}

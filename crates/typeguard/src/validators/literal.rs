//! Literal membership validator
//!
//! Matching is strict: `"1"` never matches `1`, and no coercion is applied
//! before the comparison.

use serde::Deserialize;
use serde_json::Value;

use crate::foundation::{Coerce, Coercer, ErrorCode, ErrorOptions};
use crate::macros::impl_error_options;
use crate::stringify::{stringify, stringify_value};

/// Accepts values equal to one member of the allowed set and returns that
/// member.
///
/// An absent value, or a null the set does not contain, fails as
/// "Missing value"; any other value outside the set fails as "Wrong value".
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use typeguard::prelude::*;
///
/// let cx = Coercer::standard();
/// let level = required_literal(vec!["debug", "info", "warn"]).detailed_error(true);
///
/// assert_eq!(level.coerce(Some(&json!("info")), &cx).unwrap(), "info");
///
/// let err = level.coerce(Some(&json!("trace")), &cx).unwrap_err();
/// assert_eq!(err.message, "Wrong value 'trace', must be one of ['debug', 'info', 'warn']");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequiredLiteral<T> {
    pub allowed: Vec<T>,
    /// Appends the allowed set to failure messages.
    #[serde(default)]
    pub detailed_error: bool,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl<T> RequiredLiteral<T> {
    #[must_use]
    pub fn new(allowed: Vec<T>) -> Self {
        Self {
            allowed,
            detailed_error: false,
            error_options: ErrorOptions::default(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn detailed_error(mut self, detailed: bool) -> Self {
        self.detailed_error = detailed;
        self
    }
}

impl_error_options!(RequiredLiteral<T>);

impl<T> RequiredLiteral<T>
where
    T: Clone + Into<Value>,
{
    fn expected(&self) -> String {
        let items: Vec<String> = self
            .allowed
            .iter()
            .map(|literal| stringify_value(&literal.clone().into()))
            .collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T> Coerce for RequiredLiteral<T>
where
    T: Clone + PartialEq<Value> + Into<Value>,
{
    type Output = T;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<T, E> {
        if let Some(value) = raw {
            if let Some(found) = self.allowed.iter().find(|literal| **literal == *value) {
                return Ok(found.clone());
            }
        }

        let (mut message, code) = match raw {
            None | Some(Value::Null) => ("Missing value".to_owned(), ErrorCode::MissingValue),
            Some(value) => (
                format!("Wrong value {}", stringify(Some(value))),
                ErrorCode::LiteralMismatch,
            ),
        };
        let expected = self.expected();
        if self.detailed_error {
            message.push_str(", must be one of ");
            message.push_str(&expected);
        }
        let options = self.error_options.clone().with_param("expected", expected);
        Err(cx.fail(message, code, &options))
    }
}

/// Creates a [`RequiredLiteral`] validator over `allowed`.
#[must_use]
pub fn required_literal<T>(allowed: Vec<T>) -> RequiredLiteral<T> {
    RequiredLiteral::new(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(1), 1)]
    #[case(json!(3), 3)]
    fn accepts_members(#[case] raw: Value, #[case] expected: i64) {
        let cx = Coercer::standard();
        assert_eq!(required_literal(vec![1_i64, 2, 3]).coerce(Some(&raw), &cx).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("1"))]
    #[case(json!(1.5))]
    #[case(json!(true))]
    fn no_coercion(#[case] raw: Value) {
        let cx = Coercer::standard();
        let err = required_literal(vec![1_i64]).coerce(Some(&raw), &cx).unwrap_err();
        assert!(err.has_code(ErrorCode::LiteralMismatch));
    }

    #[test]
    fn wrong_vs_missing() {
        let cx = Coercer::standard();
        let validator = required_literal(vec![1_i64, 2, 3]);

        let wrong = validator.coerce(Some(&json!(5)), &cx).unwrap_err();
        assert_eq!(wrong.message, "Wrong value 5");
        assert!(wrong.has_code(ErrorCode::LiteralMismatch));

        let missing = validator.coerce(None, &cx).unwrap_err();
        assert_eq!(missing.message, "Missing value");
        assert!(missing.has_code(ErrorCode::MissingValue));

        let null = validator.coerce(Some(&json!(null)), &cx).unwrap_err();
        assert!(null.has_code(ErrorCode::MissingValue));
    }

    #[test]
    fn null_can_be_allowed() {
        let cx = Coercer::standard();
        let validator = required_literal(vec![Value::Null, json!("auto")]);
        assert_eq!(validator.coerce(Some(&json!(null)), &cx).unwrap(), Value::Null);
        assert!(validator.coerce(None, &cx).is_err());
    }

    #[test]
    fn detailed_message() {
        let cx = Coercer::standard();
        let err = required_literal(vec![1_i64, 2])
            .detailed_error(true)
            .tag("mode")
            .coerce(None, &cx)
            .unwrap_err();
        assert_eq!(err.message, "Missing value, must be one of [1, 2]");
        assert_eq!(err.param("expected"), Some("[1, 2]"));
        assert_eq!(err.to_string(), "[mode] Missing value, must be one of [1, 2]");
    }

    #[test]
    fn options_from_config() {
        let validator: RequiredLiteral<String> =
            serde_json::from_value(json!({ "allowed": ["a", "b"], "detailed_error": true })).unwrap();
        assert_eq!(validator.allowed, vec!["a".to_owned(), "b".to_owned()]);
        let err = validator.coerce(Some(&json!("c")), &Coercer::standard()).unwrap_err();
        assert_eq!(err.message, "Wrong value 'c', must be one of ['a', 'b']");
    }
}

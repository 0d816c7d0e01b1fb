//! Variant combinators
//!
//! Every "required" validator gets three derived variants:
//!
//! | Variant | absent | `null` | anything else |
//! |---|---|---|---|
//! | [`optional`](optional_with) | `None` | delegated | delegated |
//! | [`nullable`](nullable_with) | delegated | `None` | delegated |
//! | [`optional_nullable`](optional_nullable_with) | `None` | `None` | delegated |
//!
//! The `*_with` functions work with any closure, so validators that take extra
//! arguments (such as the allowed set of a literal validator) use the same
//! combinators by capturing those arguments:
//!
//! ```
//! use serde_json::json;
//! use typeguard::combinators::optional_with;
//! use typeguard::prelude::*;
//!
//! let cx = Coercer::standard();
//! let colors = ["red", "green"];
//! let pick = |raw: Option<&serde_json::Value>| {
//!     required_literal(colors.to_vec()).coerce(raw, &cx)
//! };
//!
//! assert_eq!(optional_with(None, pick).unwrap(), None);
//! assert_eq!(optional_with(Some(&json!("red")), pick).unwrap(), Some("red"));
//! ```
//!
//! Combinators only intercept the empty cases; errors for other inputs are
//! exactly those of the wrapped validator.

use serde_json::Value;

pub mod nullable;
pub mod optional;
pub mod optional_nullable;

pub use nullable::Nullable;
pub use optional::Optional;
pub use optional_nullable::OptionalNullable;

/// Passes absent input through as `None`, otherwise calls `required`.
#[inline]
pub fn optional_with<'a, T, E, F>(raw: Option<&'a Value>, required: F) -> Result<Option<T>, E>
where
    F: FnOnce(Option<&'a Value>) -> Result<T, E>,
{
    match raw {
        None => Ok(None),
        present => required(present).map(Some),
    }
}

/// Passes explicit null through as `None`, otherwise calls `required`.
#[inline]
pub fn nullable_with<'a, T, E, F>(raw: Option<&'a Value>, required: F) -> Result<Option<T>, E>
where
    F: FnOnce(Option<&'a Value>) -> Result<T, E>,
{
    match raw {
        Some(Value::Null) => Ok(None),
        other => required(other).map(Some),
    }
}

/// Maps absent input and explicit null to `None`, otherwise calls `required`.
#[inline]
pub fn optional_nullable_with<'a, T, E, F>(
    raw: Option<&'a Value>,
    required: F,
) -> Result<Option<T>, E>
where
    F: FnOnce(Option<&'a Value>) -> Result<T, E>,
{
    match raw {
        None | Some(Value::Null) => Ok(None),
        present => required(present).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn must_be_number(raw: Option<&Value>) -> Result<f64, &'static str> {
        raw.and_then(Value::as_f64).ok_or("not a number")
    }

    #[test]
    fn optional_with_cases() {
        assert_eq!(optional_with(None, must_be_number), Ok(None));
        assert_eq!(optional_with(Some(&json!(null)), must_be_number), Err("not a number"));
        assert_eq!(optional_with(Some(&json!(2.5)), must_be_number), Ok(Some(2.5)));
    }

    #[test]
    fn nullable_with_cases() {
        assert_eq!(nullable_with(None, must_be_number), Err("not a number"));
        assert_eq!(nullable_with(Some(&json!(null)), must_be_number), Ok(None));
        assert_eq!(nullable_with(Some(&json!(1)), must_be_number), Ok(Some(1.0)));
    }

    #[test]
    fn optional_nullable_with_cases() {
        assert_eq!(optional_nullable_with(None, must_be_number), Ok(None));
        assert_eq!(optional_nullable_with(Some(&json!(null)), must_be_number), Ok(None));
        assert_eq!(optional_nullable_with(Some(&json!("x")), must_be_number), Err("not a number"));
    }

    #[test]
    fn two_argument_validator_through_closure() {
        let allowed = [1_i64, 2, 3];
        let pick = |raw: Option<&Value>| -> Result<i64, &'static str> {
            let n = raw.and_then(Value::as_i64).ok_or("missing")?;
            allowed.contains(&n).then_some(n).ok_or("wrong")
        };
        assert_eq!(optional_nullable_with(None, pick), Ok(None));
        assert_eq!(optional_nullable_with(Some(&json!(2)), pick), Ok(Some(2)));
        assert_eq!(optional_nullable_with(Some(&json!(5)), pick), Err("wrong"));
    }
}

//! Core traits for the coercion system.

use serde_json::Value;

use crate::foundation::config::Coercer;

// ============================================================================
// CORE COERCE TRAIT
// ============================================================================

/// A "required" validator: turns a raw value into `Output` or fails.
///
/// `raw` is `None` when the value is absent and `Some(&Value::Null)` when it is
/// an explicit null. Failures are built by the coercer's error factory.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use typeguard::foundation::{Coerce, Coercer, ErrorCode, ErrorOptions};
///
/// struct Even;
///
/// impl Coerce for Even {
///     type Output = i64;
///
///     fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<i64, E> {
///         match raw.and_then(Value::as_i64) {
///             Some(n) if n % 2 == 0 => Ok(n),
///             _ => Err(cx.fail("not even", ErrorCode::InvalidFormat, &ErrorOptions::new())),
///         }
///     }
/// }
///
/// let cx = Coercer::standard();
/// assert_eq!(Even.coerce(Some(&json!(4)), &cx).unwrap(), 4);
/// assert!(Even.coerce(Some(&json!(3)), &cx).is_err());
/// ```
pub trait Coerce {
    /// The coerced value type.
    type Output;

    /// Coerces `raw`, failing through `cx`.
    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<Self::Output, E>;
}

impl<C: Coerce + ?Sized> Coerce for &C {
    type Output = C::Output;

    #[inline]
    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<Self::Output, E> {
        (**self).coerce(raw, cx)
    }
}

// ============================================================================
// COERCE EXTENSION TRAIT
// ============================================================================

/// Derives the optional and nullable variants of any [`Coerce`] validator.
///
/// ```
/// use serde_json::json;
/// use typeguard::prelude::*;
///
/// let cx = Coercer::standard();
/// let age = required_int().min_value(0);
///
/// assert_eq!(age.clone().optional().coerce(None, &cx).unwrap(), None);
/// assert_eq!(age.clone().nullable().coerce(Some(&json!(null)), &cx).unwrap(), None);
/// assert_eq!(age.optional_nullable().coerce(Some(&json!(7)), &cx).unwrap(), Some(7));
/// ```
pub trait CoerceExt: Coerce + Sized {
    /// Absent input becomes `None`; everything else is delegated.
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Explicit null becomes `None`; everything else is delegated.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Absent input and explicit null both become `None`.
    fn optional_nullable(self) -> OptionalNullable<Self> {
        OptionalNullable::new(self)
    }
}

impl<T: Coerce> CoerceExt for T {}

pub use crate::combinators::nullable::Nullable;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::optional_nullable::OptionalNullable;

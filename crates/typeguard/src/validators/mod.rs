//! Built-in "required" validators
//!
//! Each validator is an options struct built with a factory function and
//! chained builder methods, then applied with [`Coerce::coerce`]:
//!
//! ```
//! use serde_json::json;
//! use typeguard::prelude::*;
//!
//! let cx = Coercer::standard();
//! let port = required_int().min_value(1).max_value(65_535).tag("port");
//!
//! assert_eq!(port.coerce(Some(&json!("8080")), &cx).unwrap(), 8080);
//! assert!(port.coerce(Some(&json!(0)), &cx).is_err());
//! ```
//!
//! Options structs also deserialize, so rules can live in configuration.
//!
//! [`Coerce::coerce`]: crate::foundation::Coerce::coerce

use serde_json::Value;

pub mod array;
pub mod boolean;
pub mod literal;
pub mod numeric;
pub mod object;
pub mod simple_date;
pub mod string;

pub use array::{RequiredArray, required_array};
pub use boolean::{RequiredBool, required_bool};
pub use literal::{RequiredLiteral, required_literal};
pub use numeric::{MAX_SAFE_INTEGER, RequiredFloat, RequiredInt, required_float, required_int};
pub use object::{DefinedObject, defined_object};
pub use simple_date::{RequiredSimpleDate, SimpleDate, required_simple_date};
pub use string::{NonEmptyString, RequiredString, non_empty_string, required_string};

/// Absent or explicit null.
#[inline]
pub(crate) fn is_nullish(raw: Option<&Value>) -> bool {
    matches!(raw, None | Some(Value::Null))
}

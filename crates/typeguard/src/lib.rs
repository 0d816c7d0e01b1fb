//! # typeguard
//!
//! Coerces untyped input (JSON payloads, query strings, config files) into
//! strongly-typed values, or fails with a structured, path-annotated error
//! built by the host's own error type.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use typeguard::prelude::*;
//!
//! let cx = Coercer::standard();
//! let body = json!({ "name": "probe", "retries": "3", "labels": null });
//! let root = Tag::new("body");
//!
//! let name = non_empty_string().tag(root.next("name"));
//! let retries = required_int().min_value(0).max_value(10).tag(root.next("retries"));
//! let labels = required_array().tag(root.next("labels")).optional_nullable();
//!
//! assert_eq!(name.coerce(body.get("name"), &cx).unwrap(), "probe");
//! assert_eq!(retries.coerce(body.get("retries"), &cx).unwrap(), 3);
//! assert_eq!(labels.coerce(body.get("labels"), &cx).unwrap(), None);
//!
//! let err = retries.coerce(Some(&json!(11)), &cx).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "[body/retries] Value is out of range: the '11' value must not be greater than 10"
//! );
//! ```
//!
//! ## Error Types
//!
//! Validators never construct errors themselves; see [`foundation::config`]
//! for injecting an error factory or installing a process-wide one.
//!
//! ## Built-in Validators
//!
//! - **Text**: [`RequiredString`](validators::RequiredString),
//!   [`NonEmptyString`](validators::NonEmptyString)
//! - **Scalars**: [`RequiredBool`](validators::RequiredBool),
//!   [`RequiredInt`](validators::RequiredInt), [`RequiredFloat`](validators::RequiredFloat)
//! - **Structure**: [`RequiredArray`](validators::RequiredArray),
//!   [`DefinedObject`](validators::DefinedObject)
//! - **Membership**: [`RequiredLiteral`](validators::RequiredLiteral)
//! - **Dates**: [`RequiredSimpleDate`](validators::RequiredSimpleDate)

// Host error types are returned unboxed; their size is the host's choice.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod stringify;
pub mod tag;
pub mod validators;

//! Core coercion types and traits
//!
//! - **Traits**: [`Coerce`], [`CoerceExt`], [`ErrorFactory`]
//! - **Context**: [`Coercer`], the process-wide error function
//! - **Errors**: [`ErrorOptions`], [`ErrorCode`], [`ValidationError`]
//!
//! # Architecture
//!
//! Validators are small option structs implementing [`Coerce`]. They never
//! construct errors directly: every failure goes through
//! [`Coercer::fail`], which hands a message and an [`ErrorOptions`] to the
//! installed [`ErrorFactory`]. The crate therefore never depends on the host's
//! error type.
//!
//! ```rust
//! use serde_json::json;
//! use typeguard::prelude::*;
//!
//! #[derive(Debug)]
//! struct ApiError(String);
//!
//! let cx = Coercer::new(|message: String, options: &ErrorOptions| {
//!     let at = options.tag.as_ref().map(ToString::to_string).unwrap_or_default();
//!     ApiError(format!("{at}: {message}"))
//! });
//!
//! let err = required_bool().tag("enabled").coerce(Some(&json!("yes")), &cx).unwrap_err();
//! assert_eq!(err.0, "enabled: 'yes' is not a boolean");
//! ```

pub mod config;
pub mod error;
pub mod traits;

pub use config::{BoxError, Coercer, ErrorFactory, is_error_function_set, set_error_function};
pub use error::{ErrorCode, ErrorOptions, ValidationError};
pub use traits::{Coerce, CoerceExt};

/// A coercion result using the standard `ValidationError`.
pub type CoerceResult<T> = Result<T, ValidationError>;

//! Prelude module for convenient imports.
//!
//! ```rust
//! use typeguard::prelude::*;
//!
//! let cx = Coercer::standard();
//! let enabled = required_bool().default_value(false).tag("enabled");
//! assert!(!enabled.coerce(None, &cx).unwrap());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, error configuration
// ============================================================================

pub use crate::foundation::{
    BoxError, Coerce, CoerceExt, CoerceResult, Coercer, ErrorCode, ErrorFactory, ErrorOptions,
    ValidationError, is_error_function_set, set_error_function,
};

// ============================================================================
// TAGS AND RENDERING
// ============================================================================

pub use crate::stringify::{stringify, stringify_datetime, stringify_value};
pub use crate::tag::{EmptyTagError, Tag, TagLike, TagValue};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    DefinedObject, NonEmptyString, RequiredArray, RequiredBool, RequiredFloat, RequiredInt,
    RequiredLiteral, RequiredSimpleDate, RequiredString, SimpleDate, defined_object,
    non_empty_string, required_array, required_bool, required_float, required_int,
    required_literal, required_simple_date, required_string,
};

// ============================================================================
// COMBINATORS: Optional and nullable variants
// ============================================================================

pub use crate::combinators::nullable::nullable;
pub use crate::combinators::optional::optional;
pub use crate::combinators::optional_nullable::optional_nullable;
pub use crate::combinators::{
    Nullable, Optional, OptionalNullable, nullable_with, optional_nullable_with, optional_with,
};

//! Failure context and the standard error type.
//!
//! Validators never build an error themselves. They describe the failure with a
//! message and an [`ErrorOptions`] and let the configured
//! [`ErrorFactory`](crate::foundation::ErrorFactory) turn it into the host's
//! error type. [`ValidationError`] is the ready-made choice for hosts without
//! an error hierarchy of their own.
//!
//! String fields use `Cow<'static, str>` so static codes never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::{Tag, TagLike};

// ============================================================================
// ERROR CODE
// ============================================================================

/// Classification assigned by the built-in validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The value has the wrong shape and cannot be coerced.
    InvalidFormat,
    /// The value parses but violates a numeric or length bound.
    OutOfRange,
    /// The value is absent, has no default and is not optional.
    MissingValue,
    /// The value is present but not a member of the allowed set.
    LiteralMismatch,
}

impl ErrorCode {
    /// Stable string form, used as `ErrorOptions::code`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::OutOfRange => "out_of_range",
            Self::MissingValue => "missing_value",
            Self::LiteralMismatch => "literal_mismatch",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ERROR OPTIONS
// ============================================================================

/// Context handed to the error factory together with the message.
///
/// A caller-supplied `code` takes precedence over the code the validator
/// would assign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorOptions {
    /// Where the failing value came from.
    pub tag: Option<Tag>,

    /// Classification, e.g. `"invalid_format"`.
    pub code: Option<Cow<'static, str>>,

    /// Finer classification defined by the caller.
    pub subcode: Option<Cow<'static, str>>,

    /// Extra fields, stored as ordered key-value pairs.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ErrorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag from a tag or a bare segment.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag(mut self, tag: impl Into<TagLike>) -> Self {
        self.tag = Tag::resolve(Some(tag.into()), None);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_subcode(mut self, subcode: impl Into<Cow<'static, str>>) -> Self {
        self.subcode = Some(subcode.into());
        self
    }

    /// Adds an extra field.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up an extra field by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Copy of these options carrying `code` unless the caller set one.
    pub(crate) fn or_code(&self, code: ErrorCode) -> Self {
        let mut options = self.clone();
        if options.code.is_none() {
            options.code = Some(Cow::Borrowed(code.as_str()));
        }
        options
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Standard concrete error produced from a message and [`ErrorOptions`].
///
/// # Examples
///
/// ```
/// use typeguard::foundation::{ErrorOptions, ValidationError};
///
/// let options = ErrorOptions::new().with_tag("age").with_code("out_of_range");
/// let error = ValidationError::from_options("too old".to_owned(), &options);
/// assert_eq!(error.to_string(), "[age] too old");
/// assert_eq!(error.code.as_deref(), Some("out_of_range"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render(tag.as_ref(), message))]
pub struct ValidationError {
    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    pub code: Option<Cow<'static, str>>,

    pub subcode: Option<Cow<'static, str>>,

    /// Where the failing value came from.
    pub tag: Option<Tag>,

    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

fn render(tag: Option<&Tag>, message: &str) -> String {
    match tag {
        Some(tag) => format!("[{tag}] {message}"),
        None => message.to_owned(),
    }
}

impl ValidationError {
    /// Creates an error with only a message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            code: None,
            subcode: None,
            tag: None,
            params: Vec::new(),
        }
    }

    /// Builds an error from a message and its failure context.
    ///
    /// The signature matches the error factory contract, so this function can
    /// be passed to [`Coercer::new`](crate::foundation::Coercer::new) or
    /// [`set_error_function`](crate::foundation::set_error_function) as is.
    pub fn from_options(message: String, options: &ErrorOptions) -> Self {
        Self {
            message: Cow::Owned(message),
            code: options.code.clone(),
            subcode: options.subcode.clone(),
            tag: options.tag.clone(),
            params: options.params.clone(),
        }
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if the error carries the given code.
    #[must_use]
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.code.as_deref() == Some(code.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================

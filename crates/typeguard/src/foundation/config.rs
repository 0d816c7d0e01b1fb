//! Error configuration: how failures become host errors.
//!
//! There are two ways to wire an error type in.
//!
//! ## Injected (preferred)
//!
//! Build a [`Coercer`] around any `Fn(String, &ErrorOptions) -> E` and pass it to
//! validators. Nothing global is touched.
//!
//! ```
//! use serde_json::json;
//! use typeguard::prelude::*;
//!
//! let cx = Coercer::new(ValidationError::from_options);
//! assert_eq!(cx.required(&required_int(), Some(&json!("12"))).unwrap(), 12);
//! ```
//!
//! ## Process-wide
//!
//! Install a function once at startup with [`set_error_function`] and use
//! [`Coercer::global`]. The first installed function wins. Failing through the
//! global coercer before anything is installed panics: that is a setup bug,
//! not bad input.

use std::fmt;
use std::sync::{Arc, OnceLock};

use serde_json::Value;

use crate::combinators::{nullable_with, optional_nullable_with, optional_with};
use crate::foundation::error::{ErrorCode, ErrorOptions, ValidationError};
use crate::foundation::traits::Coerce;

/// Boxed error produced through the process-wide error function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// ERROR FACTORY
// ============================================================================

/// Turns a failure message and its context into the host's error type.
///
/// Implemented for every `Fn(String, &ErrorOptions) -> E + Send + Sync`.
pub trait ErrorFactory: Send + Sync {
    /// The error type handed back to callers.
    type Error;

    /// Builds the error for one failed validation.
    fn make_error(&self, message: String, options: &ErrorOptions) -> Self::Error;
}

impl<F, E> ErrorFactory for F
where
    F: Fn(String, &ErrorOptions) -> E + Send + Sync,
{
    type Error = E;

    #[inline]
    fn make_error(&self, message: String, options: &ErrorOptions) -> E {
        self(message, options)
    }
}

// ============================================================================
// PROCESS-WIDE ERROR FUNCTION
// ============================================================================

type ErrorFunction = Box<dyn Fn(String, &ErrorOptions) -> BoxError + Send + Sync>;

static ERROR_FUNCTION: OnceLock<ErrorFunction> = OnceLock::new();

/// Installs the process-wide error function if none is installed yet.
///
/// Returns `true` if `function` was installed, `false` if an earlier one is kept.
pub fn set_error_function<F, E>(function: F) -> bool
where
    F: Fn(String, &ErrorOptions) -> E + Send + Sync + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    let boxed: ErrorFunction =
        Box::new(move |message: String, options: &ErrorOptions| -> BoxError {
            Box::new(function(message, options))
        });
    let installed = ERROR_FUNCTION.set(boxed).is_ok();
    if installed {
        tracing::debug!(
            error_type = std::any::type_name::<E>(),
            "installed process-wide error function"
        );
    } else {
        tracing::warn!(
            ignored_type = std::any::type_name::<E>(),
            "error function already installed, keeping the first one"
        );
    }
    installed
}

/// Returns true once a process-wide error function is installed.
pub fn is_error_function_set() -> bool {
    ERROR_FUNCTION.get().is_some()
}

/// Builds an error through the process-wide error function.
///
/// # Panics
///
/// Panics if no error function has been installed.
pub(crate) fn invoke(message: String, options: &ErrorOptions) -> BoxError {
    match ERROR_FUNCTION.get() {
        Some(function) => function(message, options),
        None => {
            tracing::error!(%message, "validation failed before an error function was installed");
            panic!(
                "typeguard: no error function installed (call `set_error_function` at startup); \
                 failure was: {message}"
            );
        }
    }
}

// ============================================================================
// COERCER
// ============================================================================

/// Validation context carrying the error construction strategy.
///
/// Cheap to clone and safe to share between threads.
pub struct Coercer<E> {
    factory: Arc<dyn ErrorFactory<Error = E>>,
}

impl<E> Coercer<E> {
    /// Creates a coercer around an error factory.
    pub fn new<F>(factory: F) -> Self
    where
        F: ErrorFactory<Error = E> + 'static,
    {
        Self {
            factory: Arc::new(factory),
        }
    }

    /// Runs a required validator.
    pub fn required<C: Coerce>(&self, rule: &C, raw: Option<&Value>) -> Result<C::Output, E> {
        rule.coerce(raw, self)
    }

    /// Runs a validator, passing absent input through as `None`.
    pub fn optional<C: Coerce>(
        &self,
        rule: &C,
        raw: Option<&Value>,
    ) -> Result<Option<C::Output>, E> {
        optional_with(raw, |raw| rule.coerce(raw, self))
    }

    /// Runs a validator, passing explicit null through as `None`.
    pub fn nullable<C: Coerce>(
        &self,
        rule: &C,
        raw: Option<&Value>,
    ) -> Result<Option<C::Output>, E> {
        nullable_with(raw, |raw| rule.coerce(raw, self))
    }

    /// Runs a validator, mapping both absent input and null to `None`.
    pub fn optional_nullable<C: Coerce>(
        &self,
        rule: &C,
        raw: Option<&Value>,
    ) -> Result<Option<C::Output>, E> {
        optional_nullable_with(raw, |raw| rule.coerce(raw, self))
    }

    /// Hands a failure to the error factory.
    ///
    /// `code` fills `ErrorOptions::code` unless the caller already set one.
    pub fn fail(&self, message: impl Into<String>, code: ErrorCode, options: &ErrorOptions) -> E {
        let message = message.into();
        let options = options.or_code(code);
        tracing::debug!(
            tag = options.tag.as_ref().map(tracing::field::display),
            code = options.code.as_deref(),
            %message,
            "coercion failed"
        );
        self.factory.make_error(message, &options)
    }
}

impl Coercer<BoxError> {
    /// Coercer backed by the process-wide error function.
    ///
    /// The function is looked up at failure time, so this can be created before
    /// [`set_error_function`] runs.
    ///
    /// # Panics
    ///
    /// Failing validations panic while no error function is installed.
    pub fn global() -> Self {
        Self::new(invoke)
    }
}

impl Coercer<ValidationError> {
    /// Coercer producing the standard [`ValidationError`].
    pub fn standard() -> Self {
        Self::new(ValidationError::from_options)
    }
}

impl<E> Clone for Coercer<E> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<E> fmt::Debug for Coercer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coercer")
            .field("error_type", &std::any::type_name::<E>())
            .field("factory", &"<function>")
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Macros shared by the built-in validators.

/// Adds the error-context builder methods to a validator struct.
///
/// The struct must have an `error_options: ErrorOptions` field. Generated
/// methods: `tag`, `code`, `subcode`, `param`, `with_error_options` and the
/// `error_options` getter.
///
/// ```rust,ignore
/// impl_error_options!(RequiredInt);
/// impl_error_options!(RequiredLiteral<T>);
/// ```
macro_rules! impl_error_options {
    ($name:ident $(< $($gen:ident),+ >)?) => {
        impl $(< $($gen),+ >)? $name $(< $($gen),+ >)? {
            /// Sets where failing values are reported, from a tag or a bare segment.
            #[must_use = "builder methods must be chained or built"]
            pub fn tag(mut self, tag: impl Into<$crate::tag::TagLike>) -> Self {
                self.error_options.tag = $crate::tag::Tag::resolve(Some(tag.into()), None);
                self
            }

            /// Overrides the error code assigned on failure.
            #[must_use = "builder methods must be chained or built"]
            pub fn code(mut self, code: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.error_options.code = Some(code.into());
                self
            }

            #[must_use = "builder methods must be chained or built"]
            pub fn subcode(mut self, subcode: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.error_options.subcode = Some(subcode.into());
                self
            }

            /// Adds an extra field passed to the error factory.
            #[must_use = "builder methods must be chained or built"]
            pub fn param(
                mut self,
                key: impl Into<std::borrow::Cow<'static, str>>,
                value: impl Into<std::borrow::Cow<'static, str>>,
            ) -> Self {
                self.error_options.params.push((key.into(), value.into()));
                self
            }

            /// Replaces the whole error context.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_error_options(mut self, options: $crate::foundation::ErrorOptions) -> Self {
                self.error_options = options;
                self
            }

            /// The error context used on failure.
            #[must_use]
            pub fn error_options(&self) -> &$crate::foundation::ErrorOptions {
                &self.error_options
            }
        }
    };
}

pub(crate) use impl_error_options;

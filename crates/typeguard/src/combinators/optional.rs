//! OPTIONAL combinator - absent input passes through

use serde_json::Value;

use crate::foundation::{Coerce, Coercer};

/// Makes a validator accept absent input, returning `None` for it.
///
/// Explicit null is still handed to the inner validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Coerce> Coerce for Optional<V> {
    type Output = Option<V::Output>;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<Self::Output, E> {
        super::optional_with(raw, |raw| self.inner.coerce(raw, cx))
    }
}

pub fn optional<V>(validator: V) -> Optional<V> {
    Optional::new(validator)
}

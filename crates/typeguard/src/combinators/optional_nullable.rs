//! OPTIONAL-NULLABLE combinator - absent input and null both pass through

use serde_json::Value;

use crate::foundation::{Coerce, Coercer};

/// Makes a validator accept absent input and explicit null.
///
/// Both map to the same `None`; the distinction is not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionalNullable<V> {
    pub(crate) inner: V,
}

impl<V> OptionalNullable<V> {
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

impl<V: Coerce> Coerce for OptionalNullable<V> {
    type Output = Option<V::Output>;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<Self::Output, E> {
        super::optional_nullable_with(raw, |raw| self.inner.coerce(raw, cx))
    }
}

pub fn optional_nullable<V>(validator: V) -> OptionalNullable<V> {
    OptionalNullable::new(validator)
}

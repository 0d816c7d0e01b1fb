//! NULLABLE combinator - explicit null passes through

use serde_json::Value;

use crate::foundation::{Coerce, Coercer};

/// Makes a validator accept explicit null, returning `None` for it.
///
/// Absent input is still handed to the inner validator, so a default value
/// or a "missing value" failure applies as usual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<V> {
    pub(crate) inner: V,
}

impl<V> Nullable<V> {
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

impl<V: Coerce> Coerce for Nullable<V> {
    type Output = Option<V::Output>;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<Self::Output, E> {
        super::nullable_with(raw, |raw| self.inner.coerce(raw, cx))
    }
}

pub fn nullable<V>(validator: V) -> Nullable<V> {
    Nullable::new(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::required_bool;
    use serde_json::json;

    #[test]
    fn test_nullable_null() {
        let cx = Coercer::standard();
        assert_eq!(nullable(required_bool()).coerce(Some(&json!(null)), &cx).unwrap(), None);
    }

    #[test]
    fn test_nullable_absent_is_delegated() {
        let cx = Coercer::standard();
        assert!(nullable(required_bool()).coerce(None, &cx).is_err());
        let with_default = nullable(required_bool().default_value(true));
        assert_eq!(with_default.coerce(None, &cx).unwrap(), Some(true));
    }

    #[test]
    fn test_nullable_present() {
        let cx = Coercer::standard();
        assert_eq!(nullable(required_bool()).coerce(Some(&json!("F")), &cx).unwrap(), Some(false));
    }
}

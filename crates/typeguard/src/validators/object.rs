//! Defined-value validator with optional path descent

use serde::Deserialize;
use serde_json::Value;

use crate::foundation::{Coerce, Coercer, ErrorCode, ErrorOptions};
use crate::macros::impl_error_options;
use crate::stringify::stringify;
use crate::tag::{Tag, TagValue};

/// Accepts any non-null value and optionally descends into it.
///
/// Each `path` segment is looked up as a property: keys and indices are
/// interchangeable, so `0` finds the `"0"` key and `"1"` finds index 1. The
/// value found at the end of the path is returned. When a segment is missing,
/// the error tag is extended up to and including that segment.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use typeguard::prelude::*;
///
/// let cx = Coercer::standard();
/// let raw = json!({ "a": { "b": [10, 20] } });
///
/// let value = defined_object().path(["a", "b"]).coerce(Some(&raw), &cx).unwrap();
/// assert_eq!(value, json!([10, 20]));
///
/// let err = defined_object().tag("body").path(["a", "c"]).coerce(Some(&raw), &cx).unwrap_err();
/// assert_eq!(err.to_string(), "[body/a/c] Missing path segment c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefinedObject {
    pub path: Vec<TagValue>,
    #[serde(flatten)]
    pub error_options: ErrorOptions,
}

impl DefinedObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the segments to descend through.
    #[must_use = "builder methods must be chained or built"]
    pub fn path<I>(mut self, path: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TagValue>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    fn options_at(&self, tag: Option<Tag>) -> ErrorOptions {
        ErrorOptions {
            tag,
            ..self.error_options.clone()
        }
    }
}

impl_error_options!(DefinedObject);

// Property lookup: indices address object keys by their decimal text, and
// keys in canonical decimal form address array elements.
fn lookup<'v>(value: &'v Value, segment: &TagValue) -> Option<&'v Value> {
    match (value, segment) {
        (Value::Object(map), TagValue::Key(key)) => map.get(key),
        (Value::Object(map), TagValue::Index(index)) => map.get(&index.to_string()),
        (Value::Array(items), TagValue::Index(index)) => items.get(*index),
        (Value::Array(items), TagValue::Key(key)) => {
            let index = key.parse::<usize>().ok().filter(|index| index.to_string() == *key)?;
            items.get(index)
        }
        _ => None,
    }
}

impl Coerce for DefinedObject {
    type Output = Value;

    fn coerce<E>(&self, raw: Option<&Value>, cx: &Coercer<E>) -> Result<Value, E> {
        let not_defined = |raw: Option<&Value>, tag: Option<Tag>| {
            cx.fail(
                format!("{} is not a defined object", stringify(raw)),
                ErrorCode::MissingValue,
                &self.options_at(tag),
            )
        };

        let mut current = match raw {
            Some(value) if !value.is_null() => value,
            _ => return Err(not_defined(raw, self.error_options.tag.clone())),
        };

        let mut tag = self.error_options.tag.clone();
        for segment in &self.path {
            tag = Some(match tag {
                Some(parent) => parent.next(segment.clone()),
                None => Tag::new(segment.clone()),
            });
            current = match lookup(current, segment) {
                Some(next) => next,
                None => {
                    let options = self.options_at(tag).with_param("segment", segment.to_string());
                    return Err(cx.fail(
                        format!("Missing path segment {segment}"),
                        ErrorCode::MissingValue,
                        &options,
                    ));
                }
            };
        }

        if current.is_null() {
            return Err(not_defined(Some(current), tag));
        }
        Ok(current.clone())
    }
}

/// Creates a [`DefinedObject`] validator.
#[must_use]
pub fn defined_object() -> DefinedObject {
    DefinedObject::new()
}

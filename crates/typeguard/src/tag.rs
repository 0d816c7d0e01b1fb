//! Path tags for locating values inside nested structures.
//!
//! A [`Tag`] is an immutable, append-only list of segments. Each call to
//! [`Tag::next`] copies the segments and appends one more, so a tag can never
//! refer back to itself.
//!
//! # Rendering
//!
//! The root segment is rendered bare, later keys are prefixed with `/` and later
//! indices are rendered as `[n]`:
//!
//! ```
//! use typeguard::tag::Tag;
//!
//! let tag = Tag::new("root").next("items").next(3_usize).next("name");
//! assert_eq!(tag.to_string(), "root/items[3]/name");
//! ```
//!
//! Index segments convert from unsigned integers only (`usize`, `u32`, `u16`,
//! `u8`), so an untyped literal needs a suffix: `next(3_usize)`, not `next(3)`.
//!
//! # Configuration
//!
//! A tag deserializes from a bare segment (`"age"`, `2`) or a non-empty list
//! of segments (`["items", 0]`), and always serializes as the list.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Separator written before every non-root key segment.
pub const KEY_SEPARATOR: char = '/';

// ============================================================================
// SEGMENTS
// ============================================================================

/// A single path segment: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Array index, rendered as `[n]`.
    Index(usize),
    /// Object key, rendered as `/key`.
    Key(String),
}

impl TagValue {
    /// Returns the key, if this segment is one.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    /// Returns the index, if this segment is one.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Key(_) => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

impl From<&str> for TagValue {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<&String> for TagValue {
    fn from(key: &String) -> Self {
        Self::Key(key.clone())
    }
}

impl From<usize> for TagValue {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<u32> for TagValue {
    fn from(index: u32) -> Self {
        Self::Index(index as usize)
    }
}

impl From<u16> for TagValue {
    fn from(index: u16) -> Self {
        Self::Index(usize::from(index))
    }
}

impl From<u8> for TagValue {
    fn from(index: u8) -> Self {
        Self::Index(usize::from(index))
    }
}

// ============================================================================
// TAG
// ============================================================================

/// Location of a value inside a nested structure.
///
/// Always holds at least one segment.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TagRepr", into = "Vec<TagValue>")]
pub struct Tag {
    segments: SmallVec<[TagValue; 4]>,
}

/// Returned when a tag is built from an empty segment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a tag needs at least one segment")]
pub struct EmptyTagError;

/// Accepted shapes when loading a tag from configuration.
#[derive(Deserialize)]
#[serde(untagged)]
enum TagRepr {
    Segment(TagValue),
    Segments(Vec<TagValue>),
}

impl TryFrom<TagRepr> for Tag {
    type Error = EmptyTagError;

    fn try_from(repr: TagRepr) -> Result<Self, Self::Error> {
        match repr {
            TagRepr::Segment(value) => Ok(Self::new(value)),
            TagRepr::Segments(segments) => Self::from_segments(segments),
        }
    }
}

impl From<Tag> for Vec<TagValue> {
    fn from(tag: Tag) -> Self {
        tag.segments.into_vec()
    }
}

impl Tag {
    /// Creates a root tag.
    pub fn new(value: impl Into<TagValue>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(value.into());
        Self { segments }
    }

    /// Creates a tag from segments listed root first.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTagError`] when `segments` yields nothing.
    pub fn from_segments<I>(segments: I) -> Result<Self, EmptyTagError>
    where
        I: IntoIterator,
        I::Item: Into<TagValue>,
    {
        let segments: SmallVec<[TagValue; 4]> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(EmptyTagError);
        }
        Ok(Self { segments })
    }

    /// Creates a tag for `value`, optionally nested under `parent`.
    ///
    /// A bare parent value is first turned into a root tag.
    ///
    /// ```
    /// use typeguard::tag::{Tag, TagLike};
    ///
    /// let tag = Tag::make("name", Some(TagLike::from("user")));
    /// assert_eq!(tag.to_string(), "user/name");
    /// ```
    pub fn make(value: impl Into<TagValue>, parent: Option<TagLike>) -> Self {
        match Self::resolve(parent, None) {
            Some(parent) => parent.next(value),
            None => Self::new(value),
        }
    }

    /// Normalizes "a tag, a bare segment or nothing" plus an optional next
    /// segment into a single optional tag.
    ///
    /// Returns `None` only when both arguments are absent.
    pub fn resolve(tag: Option<TagLike>, next: Option<TagValue>) -> Option<Self> {
        let base = tag.map(|tag| match tag {
            TagLike::Tag(tag) => tag,
            TagLike::Value(value) => Self::new(value),
        });
        match (base, next) {
            (Some(base), Some(next)) => Some(base.next(next)),
            (Some(base), None) => Some(base),
            (None, Some(next)) => Some(Self::new(next)),
            (None, None) => None,
        }
    }

    /// Returns a new tag whose parent is `self`.
    #[must_use]
    pub fn next(&self, segment: impl Into<TagValue>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The leaf segment.
    #[must_use]
    pub fn value(&self) -> &TagValue {
        match self.segments.last() {
            Some(leaf) => leaf,
            None => unreachable!("every constructor pushes a segment"),
        }
    }

    /// The enclosing tag, or `None` for a root tag.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let len = self.segments.len();
        (len > 1).then(|| Self {
            segments: self.segments[..len - 1].iter().cloned().collect(),
        })
    }

    /// All segments, root first.
    #[must_use]
    pub fn segments(&self) -> &[TagValue] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.segments.iter();
        if let Some(root) = segments.next() {
            write!(f, "{root}")?;
        }
        for segment in segments {
            match segment {
                TagValue::Index(index) => write!(f, "[{index}]")?,
                TagValue::Key(key) => write!(f, "{KEY_SEPARATOR}{key}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

impl From<TagValue> for Tag {
    fn from(value: TagValue) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Tag {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<usize> for Tag {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

// ============================================================================
// TAG-LIKE
// ============================================================================

/// Either a full [`Tag`] or a bare segment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLike {
    Tag(Tag),
    Value(TagValue),
}

impl From<Tag> for TagLike {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<&Tag> for TagLike {
    fn from(tag: &Tag) -> Self {
        Self::Tag(tag.clone())
    }
}

impl From<TagValue> for TagLike {
    fn from(value: TagValue) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for TagLike {
    fn from(key: &str) -> Self {
        Self::Value(key.into())
    }
}

impl From<String> for TagLike {
    fn from(key: String) -> Self {
        Self::Value(key.into())
    }
}

impl From<usize> for TagLike {
    fn from(index: usize) -> Self {
        Self::Value(index.into())
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! The text-lookup contract and its error taxonomy.
//!
//! A [`TextProvider`] resolves opaque [`ResourceId`]s into text. The trait
//! covers the full lookup surface an application sees: plain strings,
//! formatted strings, rich text, rich text with a fallback, quantity
//! strings, and string arrays. Storage backends implement it directly;
//! [`Translated`](crate::Translated) implements it by wrapping another
//! provider.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::text::RichText;

/// Crate-wide result alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

/// Opaque handle for one resource entry.
///
/// Ids are assigned by whatever produced the resource table; the lookup
/// layer never interprets them beyond equality. Rendered in hex, the way
/// resource tables conventionally print them.
///
/// ```
/// use reslate::ResourceId;
///
/// let id = ResourceId(0x7f04_0011);
/// assert_eq!(id.to_string(), "0x7f040011");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl From<u32> for ResourceId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Failure modes of a lookup.
///
/// Wrappers are required to pass these through unchanged, so callers can
/// match on them without caring how many layers sit between them and the
/// storage backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    /// No entry exists for the id, or the entry cannot satisfy the
    /// requested shape (e.g. asking for a string array at an id that
    /// stores a plain string).
    #[error("resource {id} not found")]
    NotFound { id: ResourceId },

    /// A formatted lookup resolved its template but failed while
    /// substituting arguments into it.
    #[error("resource {id} failed to format: {reason}")]
    Format { id: ResourceId, reason: String },
}

impl LookupError {
    /// Shorthand for the not-found case.
    #[must_use]
    pub fn not_found(id: ResourceId) -> Self {
        Self::NotFound { id }
    }

    /// Build a substitution failure for `id`.
    #[must_use]
    pub fn format(id: ResourceId, reason: impl Into<String>) -> Self {
        Self::Format {
            id,
            reason: reason.into(),
        }
    }

    /// The id the failed lookup was for.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        match self {
            Self::NotFound { id } | Self::Format { id, .. } => *id,
        }
    }
}

/// The text-lookup contract.
///
/// One implementor is the storage backend itself; another is any wrapper
/// that decorates a provider while presenting the same surface. The
/// contract deliberately says nothing about where text lives or how
/// templates are written. Substitution in [`format`](Self::format) belongs
/// to the provider: callers hand over pre-rendered argument values in
/// positional order and receive the finished string.
pub trait TextProvider {
    /// Resolve `id` to its plain string value.
    fn string(&self, id: ResourceId) -> Result<String>;

    /// Resolve `id` to a template and substitute `args` into it.
    ///
    /// `args` are pre-rendered values in positional order. Substitution
    /// failures surface as [`LookupError::Format`].
    fn format(&self, id: ResourceId, args: &[&str]) -> Result<String>;

    /// Resolve `id` to its rich value, styling spans included.
    fn text(&self, id: ResourceId) -> Result<RichText>;

    /// Resolve `id` to its rich value, or hand back `default` when the id
    /// does not resolve. Total: this operation never reports not-found.
    fn text_or(&self, id: ResourceId, default: RichText) -> RichText;

    /// Resolve `id` to the string for the quantity `count`.
    ///
    /// Negative counts select the same way as their absolute value.
    fn plural(&self, id: ResourceId, count: i64) -> Result<String>;

    /// Resolve `id` to an array of strings.
    fn string_array(&self, id: ResourceId) -> Result<Vec<String>>;
}

impl<P: TextProvider + ?Sized> TextProvider for &P {
    fn string(&self, id: ResourceId) -> Result<String> {
        (**self).string(id)
    }

    fn format(&self, id: ResourceId, args: &[&str]) -> Result<String> {
        (**self).format(id, args)
    }

    fn text(&self, id: ResourceId) -> Result<RichText> {
        (**self).text(id)
    }

    fn text_or(&self, id: ResourceId, default: RichText) -> RichText {
        (**self).text_or(id, default)
    }

    fn plural(&self, id: ResourceId, count: i64) -> Result<String> {
        (**self).plural(id, count)
    }

    fn string_array(&self, id: ResourceId) -> Result<Vec<String>> {
        (**self).string_array(id)
    }
}

impl<P: TextProvider + ?Sized> TextProvider for Box<P> {
    fn string(&self, id: ResourceId) -> Result<String> {
        (**self).string(id)
    }

    fn format(&self, id: ResourceId, args: &[&str]) -> Result<String> {
        (**self).format(id, args)
    }

    fn text(&self, id: ResourceId) -> Result<RichText> {
        (**self).text(id)
    }

    fn text_or(&self, id: ResourceId, default: RichText) -> RichText {
        (**self).text_or(id, default)
    }

    fn plural(&self, id: ResourceId, count: i64) -> Result<String> {
        (**self).plural(id, count)
    }

    fn string_array(&self, id: ResourceId) -> Result<Vec<String>> {
        (**self).string_array(id)
    }
}

impl<P: TextProvider + ?Sized> TextProvider for Arc<P> {
    fn string(&self, id: ResourceId) -> Result<String> {
        (**self).string(id)
    }

    fn format(&self, id: ResourceId, args: &[&str]) -> Result<String> {
        (**self).format(id, args)
    }

    fn text(&self, id: ResourceId) -> Result<RichText> {
        (**self).text(id)
    }

    fn text_or(&self, id: ResourceId, default: RichText) -> RichText {
        (**self).text_or(id, default)
    }

    fn plural(&self, id: ResourceId, count: i64) -> Result<String> {
        (**self).plural(id, count)
    }

    fn string_array(&self, id: ResourceId) -> Result<Vec<String>> {
        (**self).string_array(id)
    }
}

//! Rich text values: a string plus optional attribute spans.
//!
//! Rich lookups resolve to [`RichText`] rather than `String`. Semantically
//! it is still a piece of text; the spans are carried formatting hints
//! (bold ranges, underlined ranges) that renderers may honor and that
//! string-level consumers flatten away with [`RichText::plain_text`].

use std::fmt;

/// Attribute flags for a span of resource text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TextAttrs(pub u16);

impl TextAttrs {
    /// No attributes set.
    pub const NONE: Self = Self(0);
    /// Bold text.
    pub const BOLD: Self = Self(1 << 0);
    /// Italic text.
    pub const ITALIC: Self = Self(1 << 1);
    /// Single underline.
    pub const UNDERLINE: Self = Self(1 << 2);
    /// Strikethrough text.
    pub const STRIKETHROUGH: Self = Self(1 << 3);
    /// Dim / de-emphasized text.
    pub const DIM: Self = Self(1 << 4);

    /// Check if this flags set contains another flags set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Insert flags into this set.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Remove flags from this set.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Check if the flags set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two flag sets (OR operation).
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl core::ops::BitOr for TextAttrs {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for TextAttrs {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A half-open byte range of attributed text.
///
/// Offsets index into the owning [`RichText`]'s content. Spans are carried
/// as-is; a span reaching past the content is simply never honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrSpan {
    /// Byte offset where the attributes start.
    pub start: usize,
    /// Byte offset one past the last attributed byte.
    pub end: usize,
    /// Attributes applied to the range.
    pub attrs: TextAttrs,
}

impl AttrSpan {
    /// Build a span over `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize, attrs: TextAttrs) -> Self {
        Self { start, end, attrs }
    }
}

/// Text that may carry formatting spans.
///
/// ```
/// use reslate::{RichText, TextAttrs};
///
/// let hint = RichText::plain("Press Save").with_span(6, 10, TextAttrs::BOLD);
/// assert_eq!(hint.plain_text(), "Press Save");
/// assert_eq!(hint.spans().len(), 1);
/// assert!(!hint.is_plain());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RichText {
    content: String,
    spans: Vec<AttrSpan>,
}

impl RichText {
    /// Plain text with no spans.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            spans: Vec::new(),
        }
    }

    /// Text with an explicit span list.
    #[must_use]
    pub fn styled(content: impl Into<String>, spans: Vec<AttrSpan>) -> Self {
        Self {
            content: content.into(),
            spans,
        }
    }

    /// Add one span, builder style.
    #[must_use]
    pub fn with_span(mut self, start: usize, end: usize, attrs: TextAttrs) -> Self {
        self.spans.push(AttrSpan::new(start, end, attrs));
        self
    }

    /// The text content, spans ignored.
    #[must_use]
    pub fn plain_text(&self) -> &str {
        &self.content
    }

    /// Consume the value, keeping only the text content.
    #[must_use]
    pub fn into_plain(self) -> String {
        self.content
    }

    /// The carried spans, in insertion order.
    #[must_use]
    pub fn spans(&self) -> &[AttrSpan] {
        &self.spans
    }

    /// True when no spans are carried.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// Content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// True when the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl From<String> for RichText {
    fn from(content: String) -> Self {
        Self::plain(content)
    }
}

impl From<&str> for RichText {
    fn from(content: &str) -> Self {
        Self::plain(content)
    }
}

impl fmt::Display for RichText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

//! The fixed-capacity document buffer and the in-place value writer.
//!
//! A [`Document`] owns a byte buffer whose capacity is fixed at
//! construction and never grows. The occupied length is tracked
//! separately and is always at most `capacity - 1`; the byte at `len` is
//! kept as a NUL terminator so the buffer round-trips unchanged through
//! callers that expect terminated text. All capacity arithmetic counts
//! that terminator: a document of total length `capacity - 1` is the
//! largest that fits.

use crate::error::{EditError, EditResult};
use crate::locate::find_value_span;
use crate::read;
use crate::span::Span;

/// A fixed-capacity, in-place editable markup document.
///
/// # Example
///
/// ```rust
/// use tagedit_core::Document;
///
/// let mut doc = Document::from_bytes(b"<root><item>old</item></root>", 256).unwrap();
/// doc.write_value("item", b"new").unwrap();
/// assert_eq!(doc.as_bytes(), b"<root><item>new</item></root>");
/// assert_eq!(doc.value("item").unwrap(), b"new");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    /// Backing store, allocated once at full capacity.
    storage: Box<[u8]>,
    /// Occupied bytes, excluding the terminator at `storage[len]`.
    len: usize,
}

impl Document {
    /// Create an empty document with the given total capacity.
    ///
    /// Fails with [`EditError::BadParameters`] for a zero capacity, which
    /// could not even hold the terminator.
    pub fn with_capacity(capacity: usize) -> EditResult<Self> {
        if capacity == 0 {
            return Err(EditError::BadParameters);
        }
        Ok(Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        })
    }

    /// Create a document holding `content`, with `capacity` total bytes
    /// of backing store.
    ///
    /// The capacity is the growth headroom every later [`write_value`]
    /// call is checked against, so callers should pass the size they
    /// actually allocated, not `content.len()`. Fails with
    /// [`EditError::DocumentWouldOverflow`] if `content.len() + 1`
    /// exceeds `capacity`.
    ///
    /// [`write_value`]: Document::write_value
    pub fn from_bytes(content: &[u8], capacity: usize) -> EditResult<Self> {
        if capacity == 0 {
            return Err(EditError::BadParameters);
        }
        if content.len() + 1 > capacity {
            return Err(EditError::DocumentWouldOverflow);
        }
        let mut doc = Self::with_capacity(capacity)?;
        doc.storage[..content.len()].copy_from_slice(content);
        doc.len = content.len();
        Ok(doc)
    }

    /// Total allocated capacity of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Currently occupied bytes, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the document holds no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes of growth still available before the document would overflow.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.storage.len() - 1 - self.len
    }

    /// The document's current content.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Locate the named element's value span.
    pub fn value_span(&self, name: &str) -> EditResult<Span> {
        find_value_span(self.as_bytes(), name)
    }

    /// Borrow the named element's value.
    pub fn value(&self, name: &str) -> EditResult<&[u8]> {
        let span = self.value_span(name)?;
        Ok(&self.as_bytes()[span.start..span.end])
    }

    /// Copy the named element's value into `out` with the bounded-copy
    /// contract of [`read::read_value`].
    pub fn read_value(&self, name: &str, out: &mut [u8]) -> EditResult<usize> {
        read::read_value(self.as_bytes(), name, out)
    }

    /// Replace the named element's value in place.
    ///
    /// Everything after the old value (the closing marker and all
    /// subsequent bytes, terminator included) is shifted by the length
    /// difference. When the value grows, the projected total length is
    /// checked against the fixed capacity first; on
    /// [`EditError::DocumentWouldOverflow`] — as on every other failure —
    /// the document is left byte-identical to its pre-call state.
    pub fn write_value(&mut self, name: &str, new_value: &[u8]) -> EditResult<()> {
        let span = find_value_span(self.as_bytes(), name)?;
        let old_len = span.len();
        let new_len = new_value.len();

        if new_len > old_len {
            let projected = self.len + (new_len - old_len);
            if projected + 1 > self.storage.len() {
                return Err(EditError::DocumentWouldOverflow);
            }
        }

        // The tail (closing marker through terminator) must move before
        // the new value is written: a growing value would otherwise
        // clobber tail bytes it still needs to relocate.
        if new_len != old_len {
            self.storage
                .copy_within(span.end..self.len + 1, span.start + new_len);
        }
        self.storage[span.start..span.start + new_len].copy_from_slice(new_value);
        self.len = self.len - old_len + new_len;
        Ok(())
    }
}

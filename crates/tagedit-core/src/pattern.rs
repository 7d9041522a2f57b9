//! Tag match patterns built in fixed-size stack scratch space.
//!
//! The locators match two literal patterns per element name: the opening
//! prefix `<name` and the closing marker `</name>`. Both are formatted
//! into a small stack array scoped to the call, so no allocation and no
//! process-wide scratch state is involved. Names that do not fit the
//! scratch space are rejected with [`EditError::InternalLimitExceeded`].

use crate::error::{EditError, EditResult};

/// Size of the scratch array a pattern is formatted into.
pub const PATTERN_SCRATCH_LEN: usize = 128;

/// A literal match pattern for an element name.
#[derive(Debug, Clone, Copy)]
pub struct TagPattern {
    buf: [u8; PATTERN_SCRATCH_LEN],
    len: usize,
}

impl TagPattern {
    /// Build the opening-tag prefix `<name`.
    ///
    /// The prefix deliberately omits the closing `>` so that opening tags
    /// carrying attributes still match; the locator checks the byte after
    /// the prefix to reject longer-name false positives.
    pub fn open_prefix(name: &str) -> EditResult<Self> {
        Self::build(&[b"<", name.as_bytes()])
    }

    /// Build the literal closing marker `</name>`.
    pub fn closing(name: &str) -> EditResult<Self> {
        Self::build(&[b"</", name.as_bytes(), b">"])
    }

    fn build(parts: &[&[u8]]) -> EditResult<Self> {
        // parts always contain the name as one piece; an empty name would
        // make `<` match any tag in the document.
        if parts.iter().any(|p| p.is_empty()) {
            return Err(EditError::BadParameters);
        }
        let total: usize = parts.iter().map(|p| p.len()).sum();
        if total > PATTERN_SCRATCH_LEN {
            return Err(EditError::InternalLimitExceeded);
        }
        let mut buf = [0u8; PATTERN_SCRATCH_LEN];
        let mut len = 0;
        for part in parts {
            buf[len..len + part.len()].copy_from_slice(part);
            len += part.len();
        }
        Ok(Self { buf, len })
    }

    /// The pattern bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Pattern length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True only for patterns that could never be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

use std::fmt;

/// Failure conditions reported by the editor routines.
///
/// Every routine fails fast with one of these variants and guarantees it
/// has not left a partially written buffer behind: the reader resets its
/// output to an empty string before any failure return, and the writer
/// leaves the document byte-identical to its pre-call state.
///
/// `OutputTooSmall` and `DocumentWouldOverflow` are deliberately separate
/// variants: the first means the *caller's* output buffer cannot hold an
/// extracted value, the second means the *document's own* backing store
/// cannot hold the new total length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// A required argument was missing, empty, or had non-positive capacity.
    BadParameters,
    /// No opening tag for the requested element name exists in the document.
    ElementNotFound,
    /// The opening tag was found but the document is structurally broken
    /// after it: no `>` terminating the opening tag, or no closing marker.
    MalformedDocument,
    /// Reader-side: the caller's output buffer cannot hold the value plus
    /// its terminator. The value is never truncated to fit.
    OutputTooSmall,
    /// Writer-side: the new value would push the document past its fixed
    /// total capacity. The document is left unchanged.
    DocumentWouldOverflow,
    /// The element name is too long for the fixed scratch space used to
    /// build tag match patterns.
    InternalLimitExceeded,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EditError::BadParameters => "missing or empty required argument",
            EditError::ElementNotFound => "element not found",
            EditError::MalformedDocument => "malformed document",
            EditError::OutputTooSmall => "output buffer too small for value",
            EditError::DocumentWouldOverflow => {
                "new value would overflow the document buffer"
            }
            EditError::InternalLimitExceeded => {
                "element name exceeds internal pattern limit"
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for EditError {}

/// Convenience alias used throughout the crate.
pub type EditResult<T> = Result<T, EditError>;

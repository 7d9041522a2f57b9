//! Bounded value extraction into a caller-supplied output buffer.

use crate::error::{EditError, EditResult};
use crate::locate::find_value_span;

/// Copy the named element's value into `out`, followed by a NUL
/// terminator, and return the value's length in bytes.
///
/// The output buffer must be disjoint from the document buffer and large
/// enough for the value plus the terminator: a value of length `n` needs
/// `out.len() > n`. A value that does not fit is never truncated; the
/// call fails with [`EditError::OutputTooSmall`] instead.
///
/// On every failure path `out` is left holding an empty string
/// (`out[0] == 0`), provided `out` itself has non-zero capacity. A
/// zero-capacity `out` fails with [`EditError::BadParameters`] and
/// nothing is written. The document buffer is never modified.
///
/// An empty element `<name></name>` succeeds with length 0.
pub fn read_value(doc: &[u8], name: &str, out: &mut [u8]) -> EditResult<usize> {
    if out.is_empty() {
        return Err(EditError::BadParameters);
    }
    // Empty string up front so every early return leaves `out` in the
    // documented failure state.
    out[0] = 0;

    let span = find_value_span(doc, name)?;
    let value = &doc[span.start..span.end];
    if value.len() >= out.len() {
        return Err(EditError::OutputTooSmall);
    }

    out[..value.len()].copy_from_slice(value);
    out[value.len()] = 0;
    Ok(value.len())
}

//! Element locators: find where a named element's value starts and where
//! its closing marker begins.
//!
//! Both locators are purely lexical. The open locator tolerates
//! attributes on the opening tag by matching the prefix `<name` and then
//! scanning for the tag's terminating `>`. The close locator is a plain
//! forward substring search for `</name>`: it does not track nesting
//! depth, so a value that itself textually contains the closing marker is
//! matched at the first occurrence. That is a documented limitation of
//! this editor, not something the locators try to repair.
//!
//! Substring search goes through `memchr::memmem` (SIMD on supported
//! platforms); single-byte scans use `memchr`.

use memchr::{memchr, memmem};

use crate::error::{EditError, EditResult};
use crate::pattern::TagPattern;
use crate::span::Span;

/// Byte classes that may legally follow `<name` in a genuine opening tag.
///
/// Anything else means the match was a prefix of a longer name, e.g.
/// `<name` inside `<nameOther>`.
#[inline]
fn ends_open_tag_name(b: u8) -> bool {
    b == b'>' || b == b'/' || b.is_ascii_whitespace()
}

/// Find the position of the first byte of the named element's value.
///
/// Matches the opening tag whether or not it carries attributes:
/// for `<tag attr="x">value</tag>` the returned position points at `v`.
///
/// # Errors
///
/// - [`EditError::BadParameters`] for an empty element name.
/// - [`EditError::InternalLimitExceeded`] if the name does not fit the
///   pattern scratch space.
/// - [`EditError::ElementNotFound`] if no genuine opening tag exists.
/// - [`EditError::MalformedDocument`] if an opening tag starts but is
///   never terminated by `>`.
pub fn find_value_start(doc: &[u8], name: &str) -> EditResult<usize> {
    let prefix = TagPattern::open_prefix(name)?;
    let finder = memmem::Finder::new(prefix.as_bytes());

    let mut pos = 0;
    while let Some(idx) = finder.find(&doc[pos..]) {
        let after = pos + idx + prefix.len();
        match doc.get(after) {
            Some(&b) if ends_open_tag_name(b) => {
                // Genuine tag-name match. The value begins right after the
                // `>` that terminates the opening tag.
                return match memchr(b'>', &doc[after..]) {
                    Some(gt) => Ok(after + gt + 1),
                    None => Err(EditError::MalformedDocument),
                };
            }
            Some(_) => {
                // Prefix of a longer name. Resume right after this false
                // match so repeated prefixes never rescan the same region.
                pos = after;
            }
            // Buffer ends mid-name; no further match is possible.
            None => break,
        }
    }
    Err(EditError::ElementNotFound)
}

/// Find the position of the first byte of the literal closing marker
/// `</name>`, searching forward from `from`.
///
/// # Errors
///
/// - [`EditError::BadParameters`] for an empty name or a `from` position
///   past the end of the buffer.
/// - [`EditError::InternalLimitExceeded`] if the name does not fit the
///   pattern scratch space.
/// - [`EditError::ElementNotFound`] if the marker does not occur.
pub fn find_closing_marker(doc: &[u8], from: usize, name: &str) -> EditResult<usize> {
    let marker = TagPattern::closing(name)?;
    let tail = doc.get(from..).ok_or(EditError::BadParameters)?;
    match memmem::find(tail, marker.as_bytes()) {
        Some(idx) => Ok(from + idx),
        None => Err(EditError::ElementNotFound),
    }
}

/// Locate the named element's full value span.
///
/// Combines [`find_value_start`] and [`find_closing_marker`]; a missing
/// closing marker after a found opening tag is reported as
/// [`EditError::MalformedDocument`], since at that point the document
/// rather than the query is at fault.
pub fn find_value_span(doc: &[u8], name: &str) -> EditResult<Span> {
    let start = find_value_start(doc, name)?;
    let end = find_closing_marker(doc, start, name).map_err(|e| match e {
        EditError::ElementNotFound => EditError::MalformedDocument,
        other => other,
    })?;
    Ok(Span::new(start, end))
}

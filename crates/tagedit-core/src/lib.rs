//! # TagEdit Core
//!
//! A bounded tag-value editor for fixed-capacity markup buffers.
//!
//! TagEdit locates a named element in a flat XML-like document, extracts
//! its textual value into a bounded output buffer, and rewrites the value
//! in place, shifting trailing content and refusing any edit that would
//! not fit the buffer's fixed capacity.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagedit_core::Document;
//!
//! let mut doc = Document::from_bytes(b"<root><item>old</item></root>", 128).unwrap();
//! doc.write_value("item", b"new").unwrap();
//!
//! assert_eq!(doc.as_bytes(), b"<root><item>new</item></root>");
//! ```
//!
//! ## Failure guarantees
//!
//! Every routine returns a tagged [`EditError`] and never leaves a
//! half-edited buffer behind:
//!
//! ```rust
//! use tagedit_core::{Document, EditError};
//!
//! let mut doc = Document::from_bytes(b"<tag>short</tag>", 20).unwrap();
//! let before = doc.as_bytes().to_vec();
//!
//! let err = doc.write_value("tag", b"far_too_long_to_fit").unwrap_err();
//! assert_eq!(err, EditError::DocumentWouldOverflow);
//! assert_eq!(doc.as_bytes(), &before[..]);
//! ```
//!
//! ## Limitations
//!
//! This is not an XML parser. Attributes on opening tags are skipped
//! opaquely, there is no namespace, entity, CDATA, or comment handling,
//! and the closing-marker search is purely lexical with no nesting
//! awareness. See [`locate`] for details.

pub mod document;
pub mod error;
pub mod locate;
pub mod pattern;
pub mod read;
pub mod span;

pub use document::Document;
pub use error::{EditError, EditResult};
pub use locate::{find_closing_marker, find_value_span, find_value_start};
pub use read::read_value;
pub use span::Span;

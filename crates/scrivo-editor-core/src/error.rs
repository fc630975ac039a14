//! Error types for buffer operations and document storage.

use thiserror::Error;

/// Errors raised by [`MultilineEdit`](crate::edit::MultilineEdit)
/// operations and by the reflow path's own index validation.
#[derive(Debug, Error)]
pub enum EditError {
    /// A line argument outside `[0, line_count())`.
    #[error("line index {index} out of bounds (line count {count})")]
    LineOutOfBounds { index: usize, count: usize },

    /// A column argument outside the addressed line.
    #[error("position {pos} out of bounds on line {line} (length {len})")]
    PosOutOfBounds { pos: usize, line: usize, len: usize },

    /// A computed reflow span with `from >= to`.
    #[error("line span {from}..{to} is inverted or empty")]
    InvertedSpan { from: usize, to: usize },

    /// Text with an embedded line terminator passed to a single-line
    /// insertion.
    #[error("text contains a line terminator")]
    EmbeddedNewline,
}

/// Errors raised by [`Document`](crate::document::Document) load/save.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Saving a document that has never been given a path.
    #[error("document has no backing path")]
    NoPath,
}

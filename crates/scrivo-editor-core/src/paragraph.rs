//! Paragraph discovery over a line store.
//!
//! A paragraph is a maximal run of contiguous non-blank lines, bounded by
//! blank lines or the buffer edges. Bounds are derived per edit and never
//! stored.

use crate::edit::MutableLines;
use crate::error::EditError;
use crate::text_helpers::is_blank;

/// Half-open line range of a paragraph.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct ParagraphBounds {
    /// First line of the paragraph.
    pub begin: usize,
    /// Exclusive bound: the first blank line below, or the line count.
    pub end: usize,
}

impl ParagraphBounds {
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn contains(&self, line_index: usize) -> bool {
        line_index >= self.begin && line_index < self.end
    }
}

/// Find the paragraph containing `line_index`, or `None` when that line
/// is blank. Fails when `line_index` is out of bounds.
pub fn paragraph_at(
    lines: &dyn MutableLines,
    line_index: usize,
) -> Result<Option<ParagraphBounds>, EditError> {
    if is_blank(&lines.line(line_index)?) {
        return Ok(None);
    }
    let mut begin = line_index;
    while begin > 0 && !is_blank(&lines.line(begin - 1)?) {
        begin -= 1;
    }
    let mut end = line_index + 1;
    while end < lines.line_count() && !is_blank(&lines.line(end)?) {
        end += 1;
    }
    Ok(Some(ParagraphBounds { begin, end }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::LineBuffer;
    use crate::edit::MultilineEdit;

    fn scan(buf: &mut LineBuffer, line_index: usize) -> Option<ParagraphBounds> {
        let mut found = None;
        buf.with_direct_access(&mut |lines, _hot| {
            found = paragraph_at(lines, line_index)?;
            Ok(())
        })
        .unwrap();
        found
    }

    #[test]
    fn test_paragraph_between_blanks() {
        let mut buf = LineBuffer::from_text("a\n\nb\nc\n\nd");
        assert_eq!(scan(&mut buf, 2), Some(ParagraphBounds { begin: 2, end: 4 }));
        assert_eq!(scan(&mut buf, 3), Some(ParagraphBounds { begin: 2, end: 4 }));
    }

    #[test]
    fn test_paragraph_at_buffer_edges() {
        let mut buf = LineBuffer::from_text("a\n\nb\nc\n\nd");
        assert_eq!(scan(&mut buf, 0), Some(ParagraphBounds { begin: 0, end: 1 }));
        assert_eq!(scan(&mut buf, 5), Some(ParagraphBounds { begin: 5, end: 6 }));
    }

    #[test]
    fn test_blank_line_has_no_paragraph() {
        let mut buf = LineBuffer::from_text("a\n \nb");
        assert_eq!(scan(&mut buf, 1), None);
    }

    #[test]
    fn test_whole_buffer_is_one_paragraph() {
        let mut buf = LineBuffer::from_text("a\nb\nc");
        assert_eq!(scan(&mut buf, 1), Some(ParagraphBounds { begin: 0, end: 3 }));
    }

    #[test]
    fn test_out_of_bounds_anchor() {
        let mut buf = LineBuffer::from_text("a");
        let result = buf.with_direct_access(&mut |lines, _hot| {
            paragraph_at(lines, 7).map(|_| ())
        });
        assert!(matches!(
            result,
            Err(EditError::LineOutOfBounds { index: 7, count: 1 })
        ));
    }

    #[test]
    fn test_bounds_helpers() {
        let bounds = ParagraphBounds { begin: 2, end: 5 };
        assert_eq!(bounds.len(), 3);
        assert!(!bounds.is_empty());
        assert!(bounds.contains(2));
        assert!(bounds.contains(4));
        assert!(!bounds.contains(5));
    }
}

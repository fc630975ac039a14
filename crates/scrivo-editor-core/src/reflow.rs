//! Automatic paragraph justification on top of any [`MultilineEdit`].
//!
//! [`ReflowEdit`] forwards every operation to the wrapped store. The one
//! exception is `insert_chars`: when the inserted text is a single space
//! (the user just completed a word) it re-justifies the surrounding
//! paragraph to the wrap column inside one direct-access transaction,
//! keeping the hot point on the same logical character.

use smol_str::SmolStr;

use crate::edit::{DirectAccess, HotPointControl, MultilineEdit, MutableLines};
use crate::error::EditError;
use crate::paragraph::paragraph_at;
use crate::text_helpers::{char_len, wrap_words};
use crate::types::HotPoint;

/// Wrap column used when none is given at construction.
pub const DEFAULT_WRAP_COLUMN: usize = 60;

/// Transparent reflow decorator over a [`MultilineEdit`] store.
///
/// Interface-compatible with the wrapped store: an editor surface calls
/// it exactly as it would call the store itself. The wrap column is
/// fixed at construction.
#[derive(Clone)]
pub struct ReflowEdit<E: MultilineEdit> {
    inner: E,
    wrap_column: usize,
}

impl<E: MultilineEdit> ReflowEdit<E> {
    /// Wrap `inner` with the default wrap column.
    pub fn new(inner: E) -> Self {
        Self::with_wrap_column(inner, DEFAULT_WRAP_COLUMN)
    }

    pub fn with_wrap_column(inner: E, wrap_column: usize) -> Self {
        Self { inner, wrap_column }
    }

    pub fn wrap_column(&self) -> usize {
        self.wrap_column
    }

    /// Get direct access to the wrapped store.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Get direct mutable access to the wrapped store.
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: MultilineEdit> MultilineEdit for ReflowEdit<E> {
    fn line_count(&self) -> usize {
        self.inner.line_count()
    }

    fn line(&self, index: usize) -> Result<SmolStr, EditError> {
        self.inner.line(index)
    }

    fn hot_point(&self) -> HotPoint {
        self.inner.hot_point()
    }

    fn tab_seq(&self) -> SmolStr {
        self.inner.tab_seq()
    }

    fn delete_char(&mut self, pos: usize, line_index: usize) -> Result<char, EditError> {
        self.inner.delete_char(pos, line_index)
    }

    fn delete_region(&mut self, from_x: usize, from_y: usize, to_x: usize, to_y: usize) -> bool {
        self.inner.delete_region(from_x, from_y, to_x, to_y)
    }

    fn insert_region(&mut self, x: usize, y: usize, lines: &[SmolStr]) -> bool {
        self.inner.insert_region(x, y, lines)
    }

    fn insert_chars(&mut self, pos: usize, line_index: usize, text: &str) -> Result<(), EditError> {
        // The new text must be visible to the paragraph scan, so forward
        // first.
        self.inner.insert_chars(pos, line_index, text)?;
        if text == " " {
            let wrap_column = self.wrap_column;
            self.inner.with_direct_access(&mut |lines, hot| {
                align_paragraph(lines, hot, line_index, wrap_column)
            })?;
        }
        Ok(())
    }

    fn merge_lines(&mut self, first_line_index: usize) -> Result<(), EditError> {
        self.inner.merge_lines(first_line_index)
    }

    fn split_lines(&mut self, pos: usize, line_index: usize) -> Result<SmolStr, EditError> {
        self.inner.split_lines(pos, line_index)
    }

    fn with_direct_access(&mut self, action: DirectAccess) -> Result<(), EditError> {
        self.inner.with_direct_access(action)
    }
}

/// Re-justify the paragraph around `line_index` to `wrap_column`.
///
/// Does nothing when the anchor line is blank or when every line of the
/// paragraph already fits. Meant to run inside a direct-access
/// transaction.
pub fn align_paragraph(
    lines: &mut dyn MutableLines,
    hot: &mut dyn HotPointControl,
    line_index: usize,
    wrap_column: usize,
) -> Result<(), EditError> {
    let Some(bounds) = paragraph_at(lines, line_index)? else {
        return Ok(());
    };
    // First line that actually overflows the wrap column; everything
    // above it stays untouched.
    let mut starting_line = bounds.begin;
    while starting_line < bounds.end && char_len(&lines.line(starting_line)?) <= wrap_column {
        starting_line += 1;
    }
    if starting_line == bounds.end {
        tracing::trace!(
            target: "scrivo::reflow",
            line_index,
            "paragraph already fits the wrap column"
        );
        return Ok(());
    }
    reflow_span(lines, hot, starting_line, bounds.end, wrap_column)
}

/// Rebreak the lines in `[from, to)` at word boundaries so each comes
/// out no longer than `wrap_column` chars (a single word longer than the
/// column keeps its own line), remapping the hot point to the same
/// logical character. The span is validated and every new line computed
/// before the first write; a failure leaves the store untouched.
pub fn reflow_span(
    lines: &mut dyn MutableLines,
    hot: &mut dyn HotPointControl,
    from: usize,
    to: usize,
    wrap_column: usize,
) -> Result<(), EditError> {
    let count = lines.line_count();
    if from >= to {
        return Err(EditError::InvertedSpan { from, to });
    }
    if to > count {
        return Err(EditError::LineOutOfBounds {
            index: to - 1,
            count,
        });
    }
    let old: Vec<SmolStr> = (from..to).map(|i| lines.line(i)).collect::<Result<_, _>>()?;
    let words: Vec<&str> = old
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect();
    let new = wrap_words(&words, wrap_column);
    let new_hot = remap_hot_point(&old, &new, hot.hot_point(), from, to);

    let old_len = to - from;
    let new_len = new.len();
    let shared = old_len.min(new_len);
    for (i, text) in new.iter().take(shared).enumerate() {
        lines.set_line(from + i, text)?;
    }
    if new_len > old_len {
        for (i, text) in new.iter().enumerate().skip(shared) {
            lines.insert_line(from + i, text)?;
        }
    } else {
        for _ in new_len..old_len {
            lines.remove_line(from + new_len)?;
        }
    }
    hot.set_hot_point(new_hot);

    tracing::debug!(
        target: "scrivo::reflow",
        from,
        to,
        new_len,
        "re-justified span"
    );
    Ok(())
}

/// Map the hot point across a span rebreak.
///
/// Positions above the span are untouched; positions below shift by the
/// span's line-count delta. Inside the span the same logical character
/// is tracked by counting the non-space chars that precede it (a measure
/// stable under the whitespace collapsing done by the rebreak), stepping
/// across one separator afterwards when the old position sat right after
/// one, as it does when the user has just typed a space.
fn remap_hot_point(
    old: &[SmolStr],
    new: &[String],
    hot: HotPoint,
    from: usize,
    to: usize,
) -> HotPoint {
    if hot.y < from {
        return hot;
    }
    if hot.y >= to {
        return HotPoint::new(hot.x, hot.y - (to - from) + new.len());
    }

    let mut solid = 0usize;
    let mut after_space = false;
    for (offset, line) in old.iter().enumerate() {
        let row = from + offset;
        if row > hot.y {
            break;
        }
        let limit = if row == hot.y { hot.x } else { usize::MAX };
        for (i, ch) in line.chars().enumerate() {
            if i >= limit {
                break;
            }
            if ch.is_whitespace() {
                after_space = solid > 0;
            } else {
                solid += 1;
                after_space = false;
            }
        }
        if row < hot.y {
            // The line break itself separated words.
            after_space = solid > 0;
        }
    }
    if solid == 0 {
        return HotPoint::new(0, from);
    }

    let mut remaining = solid;
    for (offset, line) in new.iter().enumerate() {
        let line_len = char_len(line);
        for (col, ch) in line.chars().enumerate() {
            if !ch.is_whitespace() {
                remaining -= 1;
                if remaining == 0 {
                    let mut x = col + 1;
                    let mut y = from + offset;
                    if after_space {
                        if x < line_len {
                            x += 1;
                        } else if offset + 1 < new.len() {
                            x = 0;
                            y += 1;
                        }
                    }
                    return HotPoint::new(x, y);
                }
            }
        }
    }
    // More leading chars than the new span holds; land at its end.
    match new.last() {
        Some(last) => HotPoint::new(char_len(last), from + new.len() - 1),
        None => HotPoint::new(0, from),
    }
}

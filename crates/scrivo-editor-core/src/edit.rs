//! Buffer capability contract for line-oriented editable text stores.
//!
//! `MultilineEdit` is the seam between an editor surface and a concrete
//! store: read lines and the hot point, mutate characters, regions, and
//! whole lines, and run a direct-access transaction for compound edits.
//! A decorator such as [`ReflowEdit`](crate::reflow::ReflowEdit) wraps
//! any implementation transparently.

use smol_str::SmolStr;

use crate::error::EditError;
use crate::types::HotPoint;

/// Mutable view of the line store granted inside a direct-access
/// transaction. All methods are index-checked.
pub trait MutableLines {
    fn line_count(&self) -> usize;

    fn line(&self, index: usize) -> Result<SmolStr, EditError>;

    fn set_line(&mut self, index: usize, text: &str) -> Result<(), EditError>;

    /// Insert a new line before `index`; `index == line_count()` appends.
    fn insert_line(&mut self, index: usize, text: &str) -> Result<(), EditError>;

    fn remove_line(&mut self, index: usize) -> Result<(), EditError>;
}

/// Mutable view of the hot point granted inside a direct-access
/// transaction.
pub trait HotPointControl {
    fn hot_point(&self) -> HotPoint;

    fn set_hot_point(&mut self, hot: HotPoint);
}

// The plain pair is its own control; buffers that keep the hot point as a
// field can hand it out directly.
impl HotPointControl for HotPoint {
    fn hot_point(&self) -> HotPoint {
        *self
    }

    fn set_hot_point(&mut self, hot: HotPoint) {
        *self = hot;
    }
}

/// A direct-access transaction body: invoked exactly once, synchronously,
/// with exclusive access to the line store and hot point.
pub type DirectAccess<'a> =
    &'a mut dyn FnMut(&mut dyn MutableLines, &mut dyn HotPointControl) -> Result<(), EditError>;

/// Contract for a line-oriented editable text store.
///
/// All columns are char offsets (Unicode scalar values), not bytes.
/// Implementations keep the hot point addressing the same logical
/// character across their own mutations.
pub trait MultilineEdit {
    fn line_count(&self) -> usize;

    fn line(&self, index: usize) -> Result<SmolStr, EditError>;

    fn hot_point(&self) -> HotPoint;

    fn hot_point_x(&self) -> usize {
        self.hot_point().x
    }

    fn hot_point_y(&self) -> usize {
        self.hot_point().y
    }

    /// The buffer's tab-expansion string.
    fn tab_seq(&self) -> SmolStr;

    /// Remove and return the char at `pos` in the line at `line_index`.
    fn delete_char(&mut self, pos: usize, line_index: usize) -> Result<char, EditError>;

    /// Delete the region between `(from_x, from_y)` inclusive and
    /// `(to_x, to_y)` exclusive, joining the boundary lines when the
    /// region spans several. The region is ordered row-major; returns
    /// `false` (no mutation) when it is inverted or out of range.
    fn delete_region(&mut self, from_x: usize, from_y: usize, to_x: usize, to_y: usize) -> bool;

    /// Insert a sequence of lines at `(x, y)`, splitting the target line
    /// at the column when more than one line is inserted. Returns `false`
    /// (no mutation) when the anchor is out of range.
    fn insert_region(&mut self, x: usize, y: usize, lines: &[SmolStr]) -> bool;

    /// Insert text at `pos` in the line at `line_index`. The text must
    /// not contain line terminators.
    fn insert_chars(&mut self, pos: usize, line_index: usize, text: &str)
        -> Result<(), EditError>;

    /// Join `first_line_index` and the following line, removing the
    /// separator.
    fn merge_lines(&mut self, first_line_index: usize) -> Result<(), EditError>;

    /// Split the line at `pos`, returning the text moved to the newly
    /// created following line.
    fn split_lines(&mut self, pos: usize, line_index: usize) -> Result<SmolStr, EditError>;

    /// Run `action` exactly once with exclusive, coherent access to the
    /// line store and hot point. The action executes before this call
    /// returns; no other mutation interleaves with it.
    fn with_direct_access(&mut self, action: DirectAccess) -> Result<(), EditError>;
}

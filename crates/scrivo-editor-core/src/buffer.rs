//! `Vec<String>`-backed line store implementing [`MultilineEdit`].

use smol_str::SmolStr;

use crate::edit::{DirectAccess, MultilineEdit, MutableLines};
use crate::error::EditError;
use crate::text_helpers::{byte_of_char, char_len};
use crate::types::HotPoint;

/// The concrete line store handed to direct-access transactions.
#[derive(Clone, Debug, Default)]
struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    fn check(&self, index: usize) -> Result<(), EditError> {
        if index < self.lines.len() {
            Ok(())
        } else {
            Err(EditError::LineOutOfBounds {
                index,
                count: self.lines.len(),
            })
        }
    }
}

impl MutableLines for LineStore {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Result<SmolStr, EditError> {
        self.check(index)?;
        Ok(SmolStr::new(&self.lines[index]))
    }

    fn set_line(&mut self, index: usize, text: &str) -> Result<(), EditError> {
        self.check(index)?;
        self.lines[index] = text.to_string();
        Ok(())
    }

    fn insert_line(&mut self, index: usize, text: &str) -> Result<(), EditError> {
        if index > self.lines.len() {
            return Err(EditError::LineOutOfBounds {
                index,
                count: self.lines.len(),
            });
        }
        self.lines.insert(index, text.to_string());
        Ok(())
    }

    fn remove_line(&mut self, index: usize) -> Result<(), EditError> {
        self.check(index)?;
        self.lines.remove(index);
        Ok(())
    }
}

/// Line-oriented editable buffer: the reference store behind
/// [`MultilineEdit`].
///
/// Columns are char offsets. Every mutation keeps the hot point on the
/// same logical character, then clamps it back into bounds; the hot
/// point stays on an existing line whenever one exists.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    lines: LineStore,
    hot: HotPoint,
    tab_seq: SmolStr,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            lines: LineStore::default(),
            hot: HotPoint::origin(),
            tab_seq: SmolStr::new("\t"),
        }
    }
}

impl LineBuffer {
    /// An empty buffer: no lines, hot point at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from text, splitting on `'\n'` and stripping a trailing
    /// `'\r'` per line.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self::from_lines(lines)
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines: LineStore { lines },
            ..Self::default()
        }
    }

    /// Replace the tab-expansion string.
    pub fn with_tab_seq(mut self, tab_seq: impl Into<SmolStr>) -> Self {
        self.tab_seq = tab_seq.into();
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines.lines
    }

    /// Whole buffer as newline-joined text.
    pub fn text(&self) -> String {
        self.lines.lines.join("\n")
    }

    /// Move the hot point, clamping it into bounds.
    pub fn set_hot_point(&mut self, hot: HotPoint) {
        self.hot = hot;
        self.clamp_hot();
    }

    fn clamp_hot(&mut self) {
        let count = self.lines.line_count();
        if count == 0 {
            self.hot = HotPoint::origin();
            return;
        }
        if self.hot.y >= count {
            self.hot.y = count - 1;
        }
        let len = char_len(&self.lines.lines[self.hot.y]);
        if self.hot.x > len {
            self.hot.x = len;
        }
    }

    fn pos_to_byte(&self, pos: usize, line_index: usize) -> Result<usize, EditError> {
        let line = &self.lines.lines[line_index];
        byte_of_char(line, pos).ok_or(EditError::PosOutOfBounds {
            pos,
            line: line_index,
            len: char_len(line),
        })
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl MultilineEdit for LineBuffer {
    fn line_count(&self) -> usize {
        self.lines.line_count()
    }

    fn line(&self, index: usize) -> Result<SmolStr, EditError> {
        self.lines.line(index)
    }

    fn hot_point(&self) -> HotPoint {
        self.hot
    }

    fn tab_seq(&self) -> SmolStr {
        self.tab_seq.clone()
    }

    fn delete_char(&mut self, pos: usize, line_index: usize) -> Result<char, EditError> {
        self.lines.check(line_index)?;
        let byte = self.pos_to_byte(pos, line_index)?;
        let line = &mut self.lines.lines[line_index];
        if byte >= line.len() {
            // pos == char length: there is no char there to remove.
            return Err(EditError::PosOutOfBounds {
                pos,
                line: line_index,
                len: char_len(line),
            });
        }
        let removed = line.remove(byte);
        if self.hot.y == line_index && self.hot.x > pos {
            self.hot.x -= 1;
        }
        self.clamp_hot();
        Ok(removed)
    }

    fn delete_region(&mut self, from_x: usize, from_y: usize, to_x: usize, to_y: usize) -> bool {
        let count = self.lines.line_count();
        let from = HotPoint::new(from_x, from_y);
        let to = HotPoint::new(to_x, to_y);
        if from_y >= count || to_y >= count || to < from {
            return false;
        }
        let Some(from_byte) = byte_of_char(&self.lines.lines[from_y], from_x) else {
            return false;
        };
        let Some(to_byte) = byte_of_char(&self.lines.lines[to_y], to_x) else {
            return false;
        };
        if from_y == to_y {
            self.lines.lines[from_y].replace_range(from_byte..to_byte, "");
        } else {
            let tail = self.lines.lines[to_y][to_byte..].to_string();
            let head = &mut self.lines.lines[from_y];
            head.truncate(from_byte);
            head.push_str(&tail);
            self.lines.lines.drain(from_y + 1..=to_y);
        }
        // Positions inside the region collapse to its start; positions
        // beyond shift left/up.
        let hot = self.hot;
        self.hot = if hot < from {
            hot
        } else if hot < to {
            from
        } else if hot.y == to_y {
            HotPoint::new(from_x + (hot.x - to_x), from_y)
        } else {
            HotPoint::new(hot.x, hot.y - (to_y - from_y))
        };
        self.clamp_hot();
        true
    }

    fn insert_region(&mut self, x: usize, y: usize, lines: &[SmolStr]) -> bool {
        if lines.is_empty() {
            return true;
        }
        if self.lines.line_count() == 0 {
            if x != 0 || y != 0 {
                return false;
            }
            self.lines.lines = lines.iter().map(|line| line.to_string()).collect();
            self.clamp_hot();
            return true;
        }
        if y >= self.lines.line_count() {
            return false;
        }
        let Some(byte) = byte_of_char(&self.lines.lines[y], x) else {
            return false;
        };
        let n = lines.len();
        if n == 1 {
            self.lines.lines[y].insert_str(byte, &lines[0]);
        } else {
            let tail = self.lines.lines[y].split_off(byte);
            self.lines.lines[y].push_str(&lines[0]);
            let mut insert_at = y + 1;
            for middle in &lines[1..n - 1] {
                self.lines.lines.insert(insert_at, middle.to_string());
                insert_at += 1;
            }
            let mut last = lines[n - 1].to_string();
            last.push_str(&tail);
            self.lines.lines.insert(insert_at, last);
        }
        let hot = self.hot;
        if hot.y == y && hot.x >= x {
            self.hot = if n == 1 {
                HotPoint::new(hot.x + char_len(&lines[0]), y)
            } else {
                HotPoint::new(char_len(&lines[n - 1]) + (hot.x - x), y + n - 1)
            };
        } else if hot.y > y {
            self.hot = HotPoint::new(hot.x, hot.y + n - 1);
        }
        self.clamp_hot();
        true
    }

    fn insert_chars(&mut self, pos: usize, line_index: usize, text: &str) -> Result<(), EditError> {
        if text.contains(['\n', '\r']) {
            return Err(EditError::EmbeddedNewline);
        }
        self.lines.check(line_index)?;
        let byte = self.pos_to_byte(pos, line_index)?;
        self.lines.lines[line_index].insert_str(byte, text);
        if self.hot.y == line_index && self.hot.x >= pos {
            self.hot.x += char_len(text);
        }
        Ok(())
    }

    fn merge_lines(&mut self, first_line_index: usize) -> Result<(), EditError> {
        let count = self.lines.line_count();
        if first_line_index + 1 >= count {
            return Err(EditError::LineOutOfBounds {
                index: first_line_index + 1,
                count,
            });
        }
        let first_len = char_len(&self.lines.lines[first_line_index]);
        let next = self.lines.lines.remove(first_line_index + 1);
        self.lines.lines[first_line_index].push_str(&next);
        let hot = self.hot;
        if hot.y == first_line_index + 1 {
            self.hot = HotPoint::new(first_len + hot.x, first_line_index);
        } else if hot.y > first_line_index + 1 {
            self.hot.y -= 1;
        }
        self.clamp_hot();
        Ok(())
    }

    fn split_lines(&mut self, pos: usize, line_index: usize) -> Result<SmolStr, EditError> {
        self.lines.check(line_index)?;
        let byte = self.pos_to_byte(pos, line_index)?;
        let rest = self.lines.lines[line_index].split_off(byte);
        let remainder = SmolStr::new(&rest);
        self.lines.lines.insert(line_index + 1, rest);
        let hot = self.hot;
        if hot.y == line_index && hot.x >= pos {
            self.hot = HotPoint::new(hot.x - pos, line_index + 1);
        } else if hot.y > line_index {
            self.hot.y += 1;
        }
        self.clamp_hot();
        Ok(remainder)
    }

    fn with_direct_access(&mut self, action: DirectAccess) -> Result<(), EditError> {
        let result = action(&mut self.lines, &mut self.hot);
        self.clamp_hot();
        result
    }
}

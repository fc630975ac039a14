//! Char-offset helpers and the word-wrapping primitive.
//!
//! Columns throughout the crate are char offsets; these helpers do the
//! byte conversion at `String` mutation sites and implement the greedy
//! fill used by paragraph reflow.

/// Char length of a line.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at `char_idx`; `char_idx == char_len(s)` maps
/// to `s.len()`. `None` beyond that.
pub fn byte_of_char(s: &str, char_idx: usize) -> Option<usize> {
    s.char_indices()
        .map(|(byte_idx, _)| byte_idx)
        .chain(std::iter::once(s.len()))
        .nth(char_idx)
}

/// A line is blank when it trims to empty.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Greedy word wrap: fill each line up to `wrap_column` chars, breaking
/// only between words. A single word longer than the column gets a line
/// of its own, unsplit.
pub fn wrap_words(words: &[&str], wrap_column: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in words {
        let word_len = char_len(word);
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= wrap_column {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

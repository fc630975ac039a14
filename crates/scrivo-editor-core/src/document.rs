//! Plain-text document storage: load and save the line store.
//!
//! No popups and no host runtime; callers decide where files live. The
//! modified flag follows the usual notepad discipline: set by the editing
//! surface after a change, cleared by a successful save.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DocumentError;

/// A file-backed (or not-yet-backed) text document.
#[derive(Clone, Debug, Default)]
pub struct Document {
    path: Option<PathBuf>,
    modified: bool,
}

impl Document {
    /// A fresh document with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path`, returning the document and its lines. CRLF line
    /// terminators are normalized away; a trailing newline does not
    /// produce a trailing empty line.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, Vec<String>), DocumentError> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let lines = split_text(&text);
        Ok((
            Self {
                path: Some(path),
                modified: false,
            },
            lines,
        ))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.as_deref().and_then(Path::file_name)?.to_str()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Save `lines` to the backing path, clearing the modified flag.
    /// Fails with [`DocumentError::NoPath`] when the document was never
    /// given one.
    pub fn save<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), DocumentError> {
        let Some(path) = self.path.clone() else {
            return Err(DocumentError::NoPath);
        };
        self.write_to(&path, lines)
    }

    /// Save `lines` to `path`, adopting it as the backing path.
    pub fn save_as<S: AsRef<str>>(
        &mut self,
        path: impl Into<PathBuf>,
        lines: &[S],
    ) -> Result<(), DocumentError> {
        let path = path.into();
        self.write_to(&path, lines)?;
        self.path = Some(path);
        Ok(())
    }

    fn write_to<S: AsRef<str>>(&mut self, path: &Path, lines: &[S]) -> Result<(), DocumentError> {
        fs::write(path, join_text(lines))?;
        self.modified = false;
        Ok(())
    }
}

fn split_text(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    if text.ends_with('\n') {
        lines.pop();
    }
    lines
}

fn join_text<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(line.as_ref());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("scrivo-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_fresh_document() {
        let doc = Document::new();
        assert!(doc.path().is_none());
        assert!(doc.file_name().is_none());
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.save(&["line"]),
            Err(DocumentError::NoPath)
        ));
    }

    #[test]
    fn test_save_as_then_open_round_trip() {
        let path = temp_path("round-trip.txt");
        let mut doc = Document::new();
        doc.mark_modified();
        doc.save_as(&path, &["alpha", "beta", ""]).unwrap();
        assert!(!doc.is_modified());
        assert_eq!(doc.file_name(), Some("round-trip.txt"));

        let (opened, lines) = Document::open(&path).unwrap();
        assert_eq!(lines, ["alpha", "beta", ""]);
        assert_eq!(opened.path(), Some(path.as_path()));
        assert!(!opened.is_modified());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_open_normalizes_crlf() {
        let path = temp_path("crlf.txt");
        fs::write(&path, "one\r\ntwo\r\n").unwrap();
        let (_, lines) = Document::open(&path).unwrap();
        assert_eq!(lines, ["one", "two"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_open_missing_file_fails() {
        let result = Document::open(temp_path("does-not-exist.txt"));
        assert!(matches!(result, Err(DocumentError::Io(_))));
    }

    #[test]
    fn test_split_and_join_text() {
        assert_eq!(split_text("a\nb\n"), ["a", "b"]);
        assert_eq!(split_text("a\nb"), ["a", "b"]);
        assert_eq!(split_text(""), Vec::<String>::new());
        assert_eq!(join_text(&["a", "b"]), "a\nb\n");
    }
}

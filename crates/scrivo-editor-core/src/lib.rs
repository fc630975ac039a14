//! scrivo-editor-core: line-oriented editable buffers with automatic
//! paragraph reflow.
//!
//! This crate provides:
//! - `MultilineEdit` trait - the capability contract for line-oriented
//!   editable text stores
//! - `LineBuffer` - a `Vec<String>`-backed implementation
//! - `ReflowEdit<E>` - a transparent decorator that re-justifies the
//!   paragraph around the hot point when a typed space completes a word
//! - `Document` - plain-text load/save for the line store

pub mod buffer;
pub mod document;
pub mod edit;
pub mod error;
pub mod paragraph;
pub mod reflow;
pub mod text_helpers;
pub mod types;

pub use buffer::LineBuffer;
pub use document::Document;
pub use edit::{DirectAccess, HotPointControl, MultilineEdit, MutableLines};
pub use error::{DocumentError, EditError};
pub use paragraph::{ParagraphBounds, paragraph_at};
pub use reflow::{DEFAULT_WRAP_COLUMN, ReflowEdit, align_paragraph, reflow_span};
pub use smol_str::SmolStr;
pub use text_helpers::{byte_of_char, char_len, is_blank, wrap_words};
pub use types::HotPoint;

//! The single text change produced by a hook.

use ropey::Rope;
use thiserror::Error;

use crate::Tendril;

pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditError {
  #[error("edit range is reversed (from={from}, to={to})")]
  ReversedRange { from: usize, to: usize },
  #[error("edit range exceeds document (to={to}, len={len})")]
  RangeExceedsText { to: usize, len: usize },
  #[error("cursor exceeds edited document (cursor={cursor}, len={len})")]
  CursorExceedsText { cursor: usize, len: usize },
}

/// Replace chars `from..to` with `insert`, then put the cursor at `cursor`.
///
/// `from`/`to` index the document the edit was computed for; `cursor`
/// indexes the document after the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
  pub from:   usize,
  pub to:     usize,
  pub insert: Tendril,
  pub cursor: usize,
}

impl Edit {
  pub fn insert(at: usize, text: impl Into<Tendril>, cursor: usize) -> Self {
    Self {
      from: at,
      to: at,
      insert: text.into(),
      cursor,
    }
  }

  pub fn delete(from: usize, to: usize) -> Self {
    Self {
      from,
      to,
      insert: Tendril::new(),
      cursor: from,
    }
  }

  /// Leaves the text alone and only moves the cursor.
  pub fn move_cursor(cursor: usize) -> Self {
    Self::insert(cursor, Tendril::new(), cursor)
  }

  /// True if applying the edit leaves the text unchanged.
  pub fn is_text_noop(&self) -> bool {
    self.from == self.to && self.insert.is_empty()
  }

  /// Length in chars of the document after the edit.
  pub fn len_after(&self, len_before: usize) -> usize {
    len_before - (self.to - self.from) + self.insert.chars().count()
  }

  /// Builds the edited document. `doc` itself is left untouched.
  pub fn apply(&self, doc: &Rope) -> Result<Rope> {
    let len = doc.len_chars();
    if self.from > self.to {
      return Err(EditError::ReversedRange {
        from: self.from,
        to:   self.to,
      });
    }
    if self.to > len {
      return Err(EditError::RangeExceedsText { to: self.to, len });
    }
    let new_len = self.len_after(len);
    if self.cursor > new_len {
      return Err(EditError::CursorExceedsText {
        cursor: self.cursor,
        len:    new_len,
      });
    }

    let mut doc = doc.clone();
    doc.remove(self.from..self.to);
    doc.insert(self.from, &self.insert);
    Ok(doc)
  }
}

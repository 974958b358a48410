//! Caller-side cursor state.
//!
//! The hosting widget reports its selection as a `(start, end)` pair of char
//! offsets. Insertion heuristics only make sense for a collapsed selection;
//! replacing selected text is the caller's job, so the hooks collapse
//! anything wider to its end.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
  pub start: usize,
  pub end:   usize,
}

impl Selection {
  /// Builds a selection from two offsets in any order.
  pub fn new(a: usize, b: usize) -> Self {
    Self {
      start: a.min(b),
      end:   a.max(b),
    }
  }

  pub fn point(pos: usize) -> Self {
    Self {
      start: pos,
      end:   pos,
    }
  }

  pub fn is_collapsed(&self) -> bool {
    self.start == self.end
  }

  pub fn len(&self) -> usize {
    self.end - self.start
  }

  pub fn is_empty(&self) -> bool {
    self.is_collapsed()
  }

  /// The insertion point, clamped to a document of `len_chars` chars.
  pub fn cursor(&self, len_chars: usize) -> usize {
    if !self.is_collapsed() {
      tracing::debug!(
        start = self.start,
        end = self.end,
        "collapsing selection to its end"
      );
    }
    if self.end > len_chars {
      tracing::debug!(cursor = self.end, len_chars, "cursor past end of document");
    }
    self.end.min(len_chars)
  }

  /// Both ends clamped to a document of `len_chars` chars.
  pub fn clamp(self, len_chars: usize) -> Self {
    Self::new(self.start.min(len_chars), self.end.min(len_chars))
  }
}

impl From<usize> for Selection {
  fn from(pos: usize) -> Self {
    Self::point(pos)
  }
}

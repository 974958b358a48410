//! Line ending detection and stripping.
//!
//! Documents are split on LF only; a CRLF document keeps its `\r` at the end
//! of each line, so [`trim_line_ending`] strips both forms.

use ropey::RopeSlice;

#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  #[default]
  LF,
}

impl LineEnding {
  #[inline]
  pub const fn len_chars(&self) -> usize {
    match self {
      Self::Crlf => 2,
      Self::LF => 1,
    }
  }

  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\u{000D}\u{000A}",
      Self::LF => "\u{000A}",
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      _ => None,
    }
  }
}

/// Returns the passed line's line ending, if any.
pub fn get_line_ending(line: RopeSlice) -> Option<LineEnding> {
  let len = line.len_chars();
  let char_back = |n: usize| len.checked_sub(n).map(|i| line.char(i));
  match (char_back(2), char_back(1)) {
    (Some('\r'), Some('\n')) => Some(LineEnding::Crlf),
    (_, Some('\n')) => Some(LineEnding::LF),
    _ => None,
  }
}

/// Attempts to detect what line ending the passed document uses.
///
/// Only the first hundred lines are inspected; the first ending found wins.
pub fn auto_detect_line_ending(doc: RopeSlice) -> Option<LineEnding> {
  doc.lines().take(100).find_map(get_line_ending)
}

/// Returns `line` without its trailing line ending.
pub fn trim_line_ending(line: RopeSlice) -> RopeSlice {
  let mut end = line.len_chars();
  if end > 0 && line.char(end - 1) == '\n' {
    end -= 1;
  }
  if end > 0 && line.char(end - 1) == '\r' {
    end -= 1;
  }
  line.slice(..end)
}

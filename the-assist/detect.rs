//! Indent width detection for documents loaded from elsewhere.

use ropey::RopeSlice;
use the_core::{
  chars::leading_indent_len,
  line_ending::trim_line_ending,
};

const MAX_DETECTED_WIDTH: usize = 8;

/// Guesses the indent width of `doc` from the steps between the leading
/// spaces of consecutive non-blank lines.
///
/// Returns `None` when the document has no space indentation to go by or
/// indents with tabs. Ties go to the narrower width.
pub fn detect_indent_width(doc: RopeSlice) -> Option<usize> {
  let mut histogram = [0usize; MAX_DETECTED_WIDTH + 1];
  let mut prev_indent = 0;

  for line in doc.lines().take(1000) {
    let line = trim_line_ending(line);
    let indent = leading_indent_len(line.chars());
    if indent == line.len_chars() {
      continue;
    }
    if line.chars().take(indent).any(|ch| ch == '\t') {
      return None;
    }

    if let Some(step) = indent.checked_sub(prev_indent) {
      if (1..=MAX_DETECTED_WIDTH).contains(&step) {
        histogram[step] += 1;
      }
    }
    prev_indent = indent;
  }

  let (width, &count) = histogram
    .iter()
    .enumerate()
    .rev()
    .max_by_key(|&(_, count)| *count)?;
  tracing::trace!(width, count, "detected indent width");
  (count > 0).then_some(width)
}

#[cfg(test)]
mod test {
  use ropey::Rope;

  use super::*;

  fn detect(text: &str) -> Option<usize> {
    detect_indent_width(Rope::from(text).slice(..))
  }

  #[test]
  fn two_and_four() {
    assert_eq!(detect("a {\n  b {\n    c\n  }\n}\n"), Some(2));
    assert_eq!(detect("a {\n    b {\n        c\n    }\n}\n"), Some(4));
  }

  #[test]
  fn blank_lines_are_ignored() {
    assert_eq!(detect("a {\n\n    \n    b\n}"), Some(4));
  }

  #[test]
  fn nothing_to_detect() {
    assert_eq!(detect(""), None);
    assert_eq!(detect("a\nb\nc"), None);
    assert_eq!(detect("a {\n\tb\n}"), None);
  }

  #[test]
  fn majority_wins() {
    assert_eq!(detect("a\n  b\nc\n  d\ne\n    f\n"), Some(2));
  }
}

//! Indentation inference from delimiter depth.
//!
//! The suggested indent for a new line is the number of regular (nesting)
//! delimiters left open by the text before it. Delimiters in strings and
//! comments are ignored when [`AssistConfig::context_aware`] is set; without
//! it every occurrence counts literally.
//!
//! ```
//! use the_assist::{AssistConfig, indent::{indent_string, suggested_indent}};
//!
//! let config = AssistConfig::default();
//! let level = suggested_indent(["function f() {", "  if (x) {"], &config);
//! assert_eq!(level, 2);
//! assert_eq!(indent_string(level, &config), "    ");
//! ```

use ropey::RopeSlice;
use the_core::{
  chars::char_is_indent,
  line_ending::trim_line_ending,
};

use crate::{
  AssistConfig,
  lexer::{
    LexState,
    scan_line,
  },
};

/// Running depth over a sequence of lines.
#[derive(Debug)]
struct DepthScanner<'a> {
  config: &'a AssistConfig,
  state:  LexState,
  depth:  usize,
}

impl<'a> DepthScanner<'a> {
  fn new(config: &'a AssistConfig) -> Self {
    Self {
      config,
      state: LexState::Code,
      depth: 0,
    }
  }

  /// Feeds one line and returns the level that line itself should sit at.
  fn feed<I>(&mut self, line: I) -> usize
  where
    I: Iterator<Item = char> + Clone,
  {
    let level = if self.state == LexState::Code && self.is_lone_closer(line.clone()) {
      self.depth.saturating_sub(1)
    } else {
      self.depth
    };

    let config = self.config;
    let pairs = &config.pairs;
    let depth = &mut self.depth;
    let mut count = |ch: char| {
      if pairs.is_regular_brace(ch) {
        *depth += 1;
      } else if pairs.is_regular_close(ch) {
        *depth = depth.saturating_sub(1);
      }
    };

    if config.context_aware {
      self.state = scan_line(self.state, line, pairs, count);
    } else {
      line.for_each(&mut count);
    }

    level
  }

  fn is_lone_closer(&self, line: impl Iterator<Item = char>) -> bool {
    let mut rest = line.filter(|&ch| !ch.is_whitespace());
    matches!(
      (rest.next(), rest.next()),
      (Some(ch), None) if self.config.pairs.is_regular_close(ch)
    )
  }
}

/// Indentation level for the line following `preceding_lines`.
///
/// The last element is the (possibly partial) line the cursor sits on.
/// Closers never take the depth below zero, so a stray `}` does not cancel a
/// later opener.
pub fn suggested_indent<I, S>(preceding_lines: I, config: &AssistConfig) -> usize
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut scanner = DepthScanner::new(config);
  for line in preceding_lines {
    scanner.feed(line.as_ref().chars());
  }
  scanner.depth
}

/// Expected level of every line in `lines`.
///
/// A line holding nothing but a closing delimiter sits one level below the
/// depth it closes.
pub fn line_levels<I, S>(lines: I, config: &AssistConfig) -> Vec<usize>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut scanner = DepthScanner::new(config);
  lines
    .into_iter()
    .map(|line| scanner.feed(line.as_ref().chars()))
    .collect()
}

/// [`suggested_indent`] over the text of `doc` before the char offset
/// `cursor`, which is clamped to the document length.
pub fn suggested_indent_at(doc: RopeSlice, cursor: usize, config: &AssistConfig) -> usize {
  let cursor = cursor.min(doc.len_chars());
  let mut scanner = DepthScanner::new(config);
  for line in doc.slice(..cursor).lines() {
    scanner.feed(trim_line_ending(line).chars());
  }
  tracing::trace!(cursor, depth = scanner.depth, "suggested indent");
  scanner.depth
}

/// `level` repetitions of the indent unit.
pub fn indent_string(level: usize, config: &AssistConfig) -> String {
  " ".repeat(level * config.unit_width())
}

/// Level of an existing indentation prefix, rounded down to whole units.
pub fn indent_level_of(line: impl IntoIterator<Item = char>, config: &AssistConfig) -> usize {
  let width = line
    .into_iter()
    .take_while(|&ch| char_is_indent(ch))
    .map(|ch| if ch == '\t' { config.unit_width() } else { 1 })
    .sum::<usize>();
  width / config.unit_width()
}

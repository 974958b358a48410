//! Minimal code/string/comment classification.
//!
//! Indentation is inferred by counting delimiters, and delimiters that sit
//! inside string literals or comments must not count. This is not a real
//! tokenizer: it knows C-family comments (`//`, `/* */`), the quote-like
//! delimiters of the [`PairTable`] and backslash escapes, nothing else.
//!
//! Quotes other than the backtick close at the end of their line, so an
//! unbalanced apostrophe (`don't`, a Rust lifetime) only hides the rest of
//! that one line.

use crate::pairs::PairTable;

/// Quote that may span lines (template literals).
const MULTILINE_QUOTE: char = '`';

/// Lexer state carried from the end of one line to the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexState {
  #[default]
  Code,
  BlockComment,
  Str(char),
}

/// Walks one line, calling `on_code` for every char in code context, and
/// returns the state the next line starts in.
pub fn scan_line(
  mut state: LexState,
  line: impl IntoIterator<Item = char>,
  pairs: &PairTable,
  mut on_code: impl FnMut(char),
) -> LexState {
  let mut chars = line.into_iter().peekable();

  while let Some(ch) = chars.next() {
    match state {
      LexState::Code => {
        match ch {
          '/' if chars.peek() == Some(&'/') => return LexState::Code,
          '/' if chars.peek() == Some(&'*') => {
            chars.next();
            state = LexState::BlockComment;
          },
          quote if pairs.is_quote(quote) => state = LexState::Str(quote),
          _ => on_code(ch),
        }
      },
      LexState::BlockComment => {
        if ch == '*' && chars.peek() == Some(&'/') {
          chars.next();
          state = LexState::Code;
        }
      },
      LexState::Str(quote) => {
        if ch == '\\' {
          chars.next();
        } else if ch == quote {
          state = LexState::Code;
        }
      },
    }
  }

  match state {
    LexState::Str(quote) if quote != MULTILINE_QUOTE => LexState::Code,
    state => state,
  }
}

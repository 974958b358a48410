//! Bracket and quote pair table.
//!
//! A [`PairTable`] maps each opening delimiter to its closing counterpart and
//! tells the two kinds of pairs apart:
//!
//! - **regular** pairs (`{}`, `[]`, `()`) have distinct open and close chars.
//!   They nest, so they drive indentation depth and expand onto three lines
//!   when Enter is pressed between them.
//! - **quote-like** pairs (`""`, `''`, ``` `` ```) use the same char on both
//!   sides and carry no depth.
//!
//! ```
//! use the_assist::pairs::PairTable;
//!
//! let pairs = PairTable::default();
//! assert_eq!(pairs.closing_char_for('('), Some(')'));
//! assert!(pairs.is_brace_pair('[', ']'));
//! assert!(pairs.is_regular_brace('{'));
//! assert!(!pairs.is_regular_brace('"'));
//! assert_eq!(pairs.closing_char_for('x'), None);
//! ```

use serde::{
  Deserialize,
  Serialize,
};
use smallvec::SmallVec;
use thiserror::Error;

pub const DEFAULT_PAIRS: &[(char, char)] = &[
  ('{', '}'),
  ('[', ']'),
  ('(', ')'),
  ('"', '"'),
  ('\'', '\''),
  ('`', '`'),
];

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PairTableError {
  #[error("delimiter '{ch}' is used by more than one pair")]
  DuplicateDelimiter { ch: char },
  #[error("delimiter '{ch}' cannot be a line ending or indentation char")]
  InvalidDelimiter { ch: char },
}

/// A single opening/closing delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
  pub open:  char,
  pub close: char,
}

impl Pair {
  /// true if open == close
  pub fn same(&self) -> bool {
    self.open == self.close
  }

  /// Regular pairs nest and affect indentation.
  pub fn is_regular(&self) -> bool {
    !self.same()
  }
}

impl From<(char, char)> for Pair {
  fn from((open, close): (char, char)) -> Self {
    Self { open, close }
  }
}

impl From<&(char, char)> for Pair {
  fn from(&(open, close): &(char, char)) -> Self {
    Self { open, close }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(char, char)>", into = "Vec<(char, char)>")]
pub struct PairTable(SmallVec<[Pair; 8]>);

impl PairTable {
  /// Builds a table, rejecting delimiters claimed by more than one pair.
  pub fn new<V, A>(pairs: V) -> Result<Self, PairTableError>
  where
    V: IntoIterator<Item = A>,
    A: Into<Pair>,
  {
    let mut table: SmallVec<[Pair; 8]> = SmallVec::new();

    for pair in pairs {
      let pair = pair.into();
      for ch in [pair.open, pair.close] {
        if matches!(ch, ' ' | '\t' | '\r' | '\n') {
          return Err(PairTableError::InvalidDelimiter { ch });
        }
        if table.iter().any(|p| p.open == ch || p.close == ch) {
          return Err(PairTableError::DuplicateDelimiter { ch });
        }
      }
      table.push(pair);
    }

    Ok(Self(table))
  }

  pub fn pairs(&self) -> &[Pair] {
    &self.0
  }

  pub fn get_by_open(&self, ch: char) -> Option<&Pair> {
    self.0.iter().find(|pair| pair.open == ch)
  }

  pub fn get_by_close(&self, ch: char) -> Option<&Pair> {
    self.0.iter().find(|pair| pair.close == ch)
  }

  pub fn is_open_brace(&self, ch: char) -> bool {
    self.get_by_open(ch).is_some()
  }

  pub fn is_close_brace(&self, ch: char) -> bool {
    self.get_by_close(ch).is_some()
  }

  /// True if `left` opens a pair that `right` closes.
  pub fn is_brace_pair(&self, left: char, right: char) -> bool {
    self
      .get_by_open(left)
      .is_some_and(|pair| pair.close == right)
  }

  /// True for openers of nesting pairs; false for quotes and non-delimiters.
  pub fn is_regular_brace(&self, ch: char) -> bool {
    self.get_by_open(ch).is_some_and(Pair::is_regular)
  }

  pub fn is_regular_close(&self, ch: char) -> bool {
    self.get_by_close(ch).is_some_and(Pair::is_regular)
  }

  pub fn is_quote(&self, ch: char) -> bool {
    self.get_by_open(ch).is_some_and(Pair::same)
  }

  /// Closing delimiter for `ch`, or `None` when `ch` opens nothing.
  pub fn closing_char_for(&self, ch: char) -> Option<char> {
    self.get_by_open(ch).map(|pair| pair.close)
  }

  pub fn opening_char_for(&self, ch: char) -> Option<char> {
    self.get_by_close(ch).map(|pair| pair.open)
  }
}

impl Default for PairTable {
  fn default() -> Self {
    Self(DEFAULT_PAIRS.iter().map(Pair::from).collect())
  }
}

impl TryFrom<Vec<(char, char)>> for PairTable {
  type Error = PairTableError;

  fn try_from(pairs: Vec<(char, char)>) -> Result<Self, Self::Error> {
    Self::new(pairs)
  }
}

impl From<PairTable> for Vec<(char, char)> {
  fn from(table: PairTable) -> Self {
    table
      .0
      .iter()
      .map(|pair| (pair.open, pair.close))
      .collect()
  }
}

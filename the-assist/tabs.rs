//! Tab to space normalization.
//!
//! Every tab becomes one indent unit of spaces, regardless of column. Text
//! passed through [`expand_tabs`] never contains a tab, so expanding twice is
//! the same as expanding once.

use std::borrow::Cow;

use crate::AssistConfig;

pub fn expand_tabs<'a>(text: &'a str, config: &AssistConfig) -> Cow<'a, str> {
  if !text.contains('\t') {
    return Cow::Borrowed(text);
  }
  Cow::Owned(text.replace('\t', &" ".repeat(config.unit_width())))
}

/// Expands tabs and moves the char offset `cursor` along with the text.
pub fn expand_tabs_with_cursor(
  text: &str,
  cursor: usize,
  config: &AssistConfig,
) -> (String, usize) {
  let tabs_before = text
    .chars()
    .take(cursor)
    .filter(|&ch| ch == '\t')
    .count();
  let cursor = cursor.min(text.chars().count()) + tabs_before * (config.unit_width() - 1);
  (expand_tabs(text, config).into_owned(), cursor)
}

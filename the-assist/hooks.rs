//! Keystroke hooks.
//!
//! The hosting widget calls one hook per key press with the current document
//! and selection, and applies the returned [`Edit`]. Hooks never look at
//! anything but their arguments, so the same keystroke on the same text
//! always produces the same edit.
//!
//! # Typed characters
//!
//! [`on_char`] decides between, in order:
//!
//! 1. **Tab** - insert one indent unit of spaces
//! 2. **Skip close** - the typed closer is already right of the cursor, just
//!    move past it: `(|)` + `)` -> `()|`
//! 3. **Re-indent closer** - a regular closer typed on an otherwise blank
//!    line moves that line to the level the closer belongs at
//! 4. **Insert pair** - an opener is inserted with its closer, the cursor
//!    between them: `abc: |` + `{` -> `abc: {|}`
//! 5. **Insert single** - anything else
//!
//! # Enter
//!
//! [`on_enter`] inserts a line break indented to the open delimiter depth.
//! Between an empty pair it expands the pair onto three lines:
//!
//! ```text
//! f(){|}   ->   f(){
//!                 |
//!               }
//! ```
//!
//! # Text set from outside
//!
//! Text that does not come from a key press goes through [`on_set_text`] or
//! [`Input::Text`], which only expand tabs. Pairing never runs for it, so
//! replacing the whole document programmatically does not sprout closers.
//!
//! ```
//! use ropey::Rope;
//! use the_assist::{AssistConfig, Input, Selection, hooks::handle};
//!
//! let config = AssistConfig::default();
//! let doc = Rope::from("abc: ");
//! let edit = handle(&doc, Selection::point(5), Input::Char('{'), &config);
//! assert_eq!(edit.apply(&doc).unwrap(), "abc: {}");
//! assert_eq!(edit.cursor, 6);
//! ```

use ropey::{
  Rope,
  RopeSlice,
};
use the_core::{
  chars::{
    CharCategory,
    categorize_char,
    char_is_indent,
  },
  line_ending::{
    auto_detect_line_ending,
    trim_line_ending,
  },
};

use crate::{
  AssistConfig,
  Tendril,
  edit::Edit,
  indent::{
    indent_string,
    suggested_indent_at,
  },
  pairs::Pair,
  selection::Selection,
  tabs::{
    expand_tabs,
    expand_tabs_with_cursor,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
  /// A single typed character.
  Char(char),
  Enter,
  Backspace,
  /// Pasted or otherwise inserted text.
  Text(&'a str),
}

pub fn handle(doc: &Rope, selection: Selection, input: Input, config: &AssistConfig) -> Edit {
  match input {
    Input::Char(ch) => on_char(doc, selection, ch, config),
    Input::Enter => on_enter(doc, selection, config),
    Input::Backspace => on_backspace(doc, selection, config),
    Input::Text(text) => on_insert_text(doc, selection, text, config),
  }
}

pub fn on_char(doc: &Rope, selection: Selection, ch: char, config: &AssistConfig) -> Edit {
  let text = doc.slice(..);
  let cursor = selection.cursor(text.len_chars());

  match ch {
    '\n' | '\r' => return on_enter(doc, selection, config),
    '\t' => {
      let unit = indent_string(1, config);
      let end = cursor + unit.len();
      return Edit::insert(cursor, unit, end);
    },
    _ => {},
  }

  let pairs = &config.pairs;

  if pairs.is_close_brace(ch) && text.get_char(cursor) == Some(ch) {
    tracing::trace!(cursor, "skipping over closer '{}'", ch);
    return Edit::move_cursor(cursor + 1);
  }

  if pairs.is_regular_close(ch) {
    if let Some(edit) = reindent_closer(text, cursor, ch, config) {
      return edit;
    }
  }

  let mut insert = Tendril::new();
  insert.push(ch);

  if let Some(pair) = pairs.get_by_open(ch) {
    if should_close(text, cursor, pair, config) {
      insert.push(pair.close);
      tracing::trace!(cursor, "auto pair {}{}", pair.open, pair.close);
    }
  }

  Edit::insert(cursor, insert, cursor + 1)
}

/// True if typing `pair.open` at `cursor` should also insert `pair.close`.
fn should_close(text: RopeSlice, cursor: usize, pair: &Pair, config: &AssistConfig) -> bool {
  if !config.guard_word_chars {
    return true;
  }

  let is_word = |ch: Option<char>| ch.is_some_and(|ch| categorize_char(ch) == CharCategory::Word);
  let next = text.get_char(cursor);
  let prev = cursor.checked_sub(1).and_then(|pos| text.get_char(pos));
  !is_word(next) && (pair.is_regular() || !is_word(prev))
}

/// Re-indents a line that will hold nothing but the closer `ch`.
fn reindent_closer(
  text: RopeSlice,
  cursor: usize,
  ch: char,
  config: &AssistConfig,
) -> Option<Edit> {
  let line = text.char_to_line(cursor);
  let line_start = text.line_to_char(line);
  let line_end = line_start + trim_line_ending(text.line(line)).len_chars();
  if cursor > line_end {
    return None;
  }

  let is_blank = |slice: RopeSlice| slice.chars().all(char_is_indent);
  let before = text.slice(line_start..cursor);
  if !is_blank(before) || !is_blank(text.slice(cursor..line_end)) {
    return None;
  }

  let level = suggested_indent_at(text, line_start, config).saturating_sub(1);
  let indent = indent_string(level, config);
  if before == indent.as_str() {
    return None;
  }

  tracing::trace!(line, level, "re-indenting closer '{}'", ch);
  let mut insert = Tendril::from(indent.as_str());
  insert.push(ch);
  Some(Edit {
    from: line_start,
    to: cursor,
    cursor: line_start + indent.len() + 1,
    insert,
  })
}

pub fn on_enter(doc: &Rope, selection: Selection, config: &AssistConfig) -> Edit {
  let text = doc.slice(..);
  let cursor = selection.cursor(text.len_chars());
  let line_ending = auto_detect_line_ending(text).unwrap_or_default();
  let level = suggested_indent_at(text, cursor, config);

  let pairs = &config.pairs;
  let prev = cursor.checked_sub(1).and_then(|pos| text.get_char(pos));
  let next = text.get_char(cursor);
  let expand = match (prev, next) {
    (Some(left), Some(right)) if pairs.is_brace_pair(left, right) => {
      Some(pairs.is_regular_brace(left))
    },
    _ => None,
  };

  let mut insert = Tendril::new();
  insert.push_str(line_ending.as_str());
  insert.push_str(&indent_string(level, config));
  let end = cursor + insert.chars().count();

  if let Some(regular) = expand {
    let outer = if regular { level.saturating_sub(1) } else { level };
    insert.push_str(line_ending.as_str());
    insert.push_str(&indent_string(outer, config));
  }

  tracing::trace!(cursor, level, ?expand, "enter");
  Edit::insert(cursor, insert, end)
}

/// Deletes the char before the cursor, or both halves of an empty pair.
///
/// A non-collapsed selection is deleted as a whole.
pub fn on_backspace(doc: &Rope, selection: Selection, config: &AssistConfig) -> Edit {
  let text = doc.slice(..);
  let selection = selection.clamp(text.len_chars());
  if !selection.is_collapsed() {
    return Edit::delete(selection.start, selection.end);
  }

  let cursor = selection.end;
  if cursor == 0 {
    return Edit::move_cursor(0);
  }

  let prev = text.char(cursor - 1);
  if text
    .get_char(cursor)
    .is_some_and(|next| config.pairs.is_brace_pair(prev, next))
  {
    return Edit::delete(cursor - 1, cursor + 1);
  }

  if prev == '\n' && cursor >= 2 && text.char(cursor - 2) == '\r' {
    return Edit::delete(cursor - 2, cursor);
  }

  Edit::delete(cursor - 1, cursor)
}

/// Inserts `inserted` at the cursor with tabs expanded and no pairing.
pub fn on_insert_text(
  doc: &Rope,
  selection: Selection,
  inserted: &str,
  config: &AssistConfig,
) -> Edit {
  let cursor = selection.cursor(doc.len_chars());
  let inserted = expand_tabs(inserted, config);
  let end = cursor + inserted.chars().count();
  Edit::insert(cursor, &*inserted, end)
}

/// Normalizes a document set programmatically, keeping the cursor on the
/// same char.
pub fn on_set_text(text: &str, cursor: usize, config: &AssistConfig) -> (String, usize) {
  expand_tabs_with_cursor(text, cursor, config)
}

#[cfg(test)]
mod test {
  use super::*;

  fn run(doc: &str, cursor: usize, input: Input, config: &AssistConfig) -> (String, usize) {
    let doc = Rope::from(doc);
    let edit = handle(&doc, Selection::point(cursor), input, config);
    (edit.apply(&doc).unwrap().to_string(), edit.cursor)
  }

  fn typed(doc: &str, cursor: usize, ch: char) -> (String, usize) {
    run(doc, cursor, Input::Char(ch), &AssistConfig::default())
  }

  fn enter(doc: &str, cursor: usize) -> (String, usize) {
    run(doc, cursor, Input::Enter, &AssistConfig::default())
  }

  fn backspace(doc: &str, cursor: usize) -> (String, usize) {
    run(doc, cursor, Input::Backspace, &AssistConfig::default())
  }

  fn owned(text: &str, cursor: usize) -> (String, usize) {
    (text.to_string(), cursor)
  }

  #[test]
  fn typing_opener_inserts_pair() {
    assert_eq!(typed("abc: ", 5, '{'), owned("abc: {}", 6));
    assert_eq!(typed("", 0, '('), owned("()", 1));
    assert_eq!(typed("f", 1, '['), owned("f[]", 2));
    assert_eq!(typed("x = ", 4, '"'), owned("x = \"\"", 5));
    assert_eq!(typed("ab", 1, '`'), owned("a``b", 2));
  }

  #[test]
  fn typing_plain_char() {
    assert_eq!(typed("ab", 1, 'x'), owned("axb", 2));
    assert_eq!(typed("ab", 2, ';'), owned("ab;", 3));
  }

  #[test]
  fn typing_closer_skips_existing() {
    assert_eq!(typed("()", 1, ')'), owned("()", 2));
    assert_eq!(typed("\"\"", 1, '"'), owned("\"\"", 2));
    assert_eq!(typed("f(x)", 3, ')'), owned("f(x)", 4));
    assert_eq!(typed("()", 2, ')'), owned("())", 3));
  }

  #[test]
  fn tab_inserts_indent_unit() {
    assert_eq!(typed("ab", 1, '\t'), owned("a  b", 3));
    let config = AssistConfig::default().with_indent_width(4);
    assert_eq!(run("", 0, Input::Char('\t'), &config), owned("    ", 4));
  }

  #[test]
  fn guarded_pairing() {
    let config = AssistConfig::default().with_guard_word_chars(true);
    assert_eq!(run("dont", 3, Input::Char('\''), &config), owned("don't", 4));
    assert_eq!(run("f x", 1, Input::Char('('), &config), owned("f() x", 2));
    assert_eq!(run("fx", 1, Input::Char('('), &config), owned("f(x", 2));
    assert_eq!(run("f", 1, Input::Char('('), &config), owned("f()", 2));

    // without the guard every opener pairs
    assert_eq!(typed("dont", 3, '\''), owned("don''t", 4));
  }

  #[test]
  fn closer_on_blank_line_is_reindented() {
    assert_eq!(
      typed("if (x) {\n  a\n  ", 15, '}'),
      owned("if (x) {\n  a\n}", 14)
    );
    assert_eq!(
      typed("a {\n  b [\n      ", 16, ']'),
      owned("a {\n  b [\n  ]", 13)
    );
    // already at the right level
    assert_eq!(typed("a {\n", 4, '}'), owned("a {\n}", 5));
    // code on the line keeps it as typed
    assert_eq!(typed("a {\n  x", 7, '}'), owned("a {\n  x}", 8));
    // quote-like closers are never re-indented
    assert_eq!(typed("a {\n    ", 8, '"'), owned("a {\n    \"\"", 9));
  }

  #[test]
  fn enter_indents_to_depth() {
    assert_eq!(enter("a {", 3), owned("a {\n  ", 6));
    assert_eq!(enter("a {\n  b(", 8), owned("a {\n  b(\n    ", 13));
    assert_eq!(enter("x", 1), owned("x\n", 2));
    assert_eq!(enter("", 0), owned("\n", 1));
  }

  #[test]
  fn enter_between_regular_pair_expands() {
    assert_eq!(enter("f(){}", 4), owned("f(){\n  \n}", 7));
    assert_eq!(
      enter("a {\n  g([])\n}", 9),
      owned("a {\n  g([\n      \n    ])\n}", 16)
    );

    let config = AssistConfig::default().with_indent_width(4);
    assert_eq!(run("{}", 1, Input::Enter, &config), owned("{\n    \n}", 6));
  }

  #[test]
  fn enter_between_quotes_keeps_level() {
    assert_eq!(enter("x = ``", 5), owned("x = `\n\n`", 6));
    assert_eq!(enter("a {\n  ''", 7), owned("a {\n  '\n  \n  '", 10));
  }

  #[test]
  fn enter_uses_document_line_ending() {
    assert_eq!(enter("a {\r\n  b {", 10), owned("a {\r\n  b {\r\n    ", 16));
    assert_eq!(enter("x\r\n{}", 4), owned("x\r\n{\r\n  \r\n}", 8));
  }

  #[test]
  fn enter_ignores_braces_in_strings() {
    assert_eq!(enter("s = \"{\";", 8), owned("s = \"{\";\n", 9));
    let literal = AssistConfig::default().with_context_aware(false);
    assert_eq!(
      run("s = \"{\";", 8, Input::Enter, &literal),
      owned("s = \"{\";\n  ", 11)
    );
  }

  #[test]
  fn backspace_deletes_pairs() {
    assert_eq!(backspace("()", 1), owned("", 0));
    assert_eq!(backspace("a\"\"b", 2), owned("ab", 1));
    assert_eq!(backspace("(x)", 2), owned("()", 1));
    assert_eq!(backspace("ab", 0), owned("ab", 0));
    assert_eq!(backspace("ab", 2), owned("a", 1));
    assert_eq!(backspace("a\r\nb", 3), owned("ab", 1));
  }

  #[test]
  fn backspace_deletes_selection() {
    let doc = Rope::from("hello world");
    let edit = on_backspace(
      &doc,
      Selection::new(5, 11),
      &AssistConfig::default(),
    );
    assert_eq!(edit.apply(&doc).unwrap(), "hello");
    assert_eq!(edit.cursor, 5);
  }

  #[test]
  fn selection_is_collapsed_to_its_end() {
    let doc = Rope::from("ab");
    let edit = on_char(&doc, Selection::new(0, 1), '(', &AssistConfig::default());
    assert_eq!(edit.apply(&doc).unwrap(), "a()b");
    assert_eq!(edit.cursor, 2);
  }

  #[test]
  fn out_of_range_cursor_is_clamped() {
    assert_eq!(typed("ab", 10, '{'), owned("ab{}", 3));
    assert_eq!(enter("ab", 10), owned("ab\n", 3));
    assert_eq!(backspace("ab", 10), owned("a", 1));
  }

  #[test]
  fn external_text_never_pairs() {
    let config = AssistConfig::default().with_indent_width(4);
    assert_eq!(
      run("x", 1, Input::Text("\t(\"{"), &config),
      owned("x    (\"{", 8)
    );
    assert_eq!(
      on_set_text("if (x) {\n\ty\n}", 11, &config),
      owned("if (x) {\n    y\n}", 14)
    );
  }

  quickcheck::quickcheck! {
    fn edits_apply_to_their_document(text: String, cursor: usize, ch: char) -> bool {
      let doc = Rope::from(text.as_str());
      let config = AssistConfig::default();
      let selection = Selection::point(cursor % (doc.len_chars() + 1));
      [Input::Char(ch), Input::Enter, Input::Backspace, Input::Text(&text)]
        .into_iter()
        .all(|input| {
          let edit = handle(&doc, selection, input, &config);
          edit
            .apply(&doc)
            .is_ok_and(|new_doc| !new_doc.chars().any(|c| c == '\t') || text.contains('\t'))
        })
    }
  }
}

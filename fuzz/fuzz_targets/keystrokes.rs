#![no_main]

use libfuzzer_sys::fuzz_target;
use ropey::Rope;
use the_assist::{
  AssistConfig,
  Input,
  Selection,
  hooks::handle,
};

const MAX_INITIAL_BYTES: usize = 8 * 1024;
const MAX_KEYS: usize = 256;
const TYPED: &[u8] = b"{}[]()\"'`/* x\n";

fn decode_key(byte: u8) -> Input<'static> {
  match byte % 16 {
    0 => Input::Enter,
    1 => Input::Backspace,
    2 => Input::Text("\t{\n"),
    3 => Input::Char('\t'),
    _ => Input::Char(TYPED[usize::from(byte) % TYPED.len()] as char),
  }
}

// Replays a keystroke sequence, feeding each edit back in as the next
// document. Every edit must apply cleanly and keep the document tab-free.
fuzz_target!(|data: &[u8]| {
  let Some((&flags, rest)) = data.split_first() else {
    return;
  };
  let split = rest.len().min(MAX_INITIAL_BYTES) / 2;
  let (initial, keys) = rest.split_at(split);

  let config = AssistConfig::default()
    .with_indent_width(usize::from(flags % 8) + 1)
    .with_context_aware(flags & 0x10 != 0)
    .with_guard_word_chars(flags & 0x20 != 0);

  let initial = String::from_utf8_lossy(initial).replace('\t', " ");
  let mut doc = Rope::from(initial.as_str());
  let mut cursor = doc.len_chars() / 2;

  for &key in keys.iter().take(MAX_KEYS) {
    let edit = handle(&doc, Selection::point(cursor), decode_key(key), &config);
    doc = edit
      .apply(&doc)
      .expect("hook produced an edit that does not fit");
    assert!(!doc.chars().any(|ch| ch == '\t'));
    cursor = edit.cursor;
  }
});

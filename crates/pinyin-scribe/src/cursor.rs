//! Plain-text helpers for committing results at a cursor
//!
//! The editor owns the text run and the cursor; these functions only work
//! out what to replace. Offsets are byte offsets into the text run and must
//! fall on `char` boundaries.

use crate::tone::apply_tone;

/// Syllable typed immediately before the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableSpan {
  /// The letters (`a-z`, `A-Z`, `ü`, `Ü`)
  pub text: String,
  /// Byte offset where the letters start
  pub start: usize,
}

impl SyllableSpan {
  /// Byte offset just past the letters
  pub fn end(&self) -> usize {
    self.start + self.text.len()
  }
}

/// Result of replacing a span of the text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanEdit {
  /// Text run after the replacement
  pub text: String,
  /// Cursor offset just after the inserted text
  pub cursor: usize,
}

fn is_pinyin_letter(c: char) -> bool {
  c.is_ascii_alphabetic() || c == 'ü' || c == 'Ü'
}

/// Finds the run of pinyin letters ending at `cursor`
///
/// Stops at spaces, punctuation, digits and Chinese characters.
///
/// ```
/// use pinyin_scribe::cursor::syllable_before_cursor;
///
/// let span = syllable_before_cursor("我爱nihao", "我爱nihao".len()).unwrap();
/// assert_eq!(span.text, "nihao");
/// assert_eq!(span.start, "我爱".len());
/// ```
pub fn syllable_before_cursor(text: &str, cursor: usize) -> Option<SyllableSpan> {
  let before = text.get(..cursor)?;

  let start = before
    .char_indices()
    .rev()
    .take_while(|&(_, c)| is_pinyin_letter(c))
    .last()
    .map(|(idx, _)| idx)?;

  Some(SyllableSpan {
    text: before[start..].to_string(),
    start,
  })
}

/// Replaces `[start, end)` of `text` with `replacement`
///
/// `None` when the range is reversed, out of bounds or splits a character.
pub fn replace_span(text: &str, start: usize, end: usize, replacement: &str) -> Option<SpanEdit> {
  if start > end {
    return None;
  }
  let head = text.get(..start)?;
  let tail = text.get(end..)?;

  Some(SpanEdit {
    text: format!("{head}{replacement}{tail}"),
    cursor: start + replacement.len(),
  })
}

/// Applies `tone` to the syllable right before `cursor`
///
/// `None` when there is no syllable there or `tone` is not 1-4.
///
/// ```
/// use pinyin_scribe::cursor::apply_tone_before_cursor;
///
/// let edit = apply_tone_before_cursor("ni hao", 6, 3).unwrap();
/// assert_eq!(edit.text, "ni hǎo");
/// assert_eq!(edit.cursor, "ni hǎo".len());
/// ```
pub fn apply_tone_before_cursor(text: &str, cursor: usize, tone: u8) -> Option<SpanEdit> {
  if !(1..=4).contains(&tone) {
    return None;
  }
  let span = syllable_before_cursor(text, cursor)?;
  let toned = apply_tone(&span.text, tone);
  replace_span(text, span.start, span.end(), &toned)
}

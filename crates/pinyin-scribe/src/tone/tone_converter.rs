//! Tone mark placement
//!
//! Places one tone diacritic on a pinyin syllable using the standard rules:
//!
//! 1. the first `a` or `e`,
//! 2. otherwise the `o` of `ou`,
//! 3. otherwise the last vowel (`a e i o u ü v`).
//!
//! The replacement glyph always comes from the lowercase row of the
//! [`ToneTable`], so an uppercase vowel is replaced by a lowercase toned one.

use super::tone_table::{ToneTable, to_lower};

/// Vowels considered by the last-vowel rule.
const VOWELS: [char; 7] = ['a', 'e', 'i', 'o', 'u', 'ü', 'v'];

/// Applies tone `tone` (1-4) to `text`.
///
/// - Any other tone number leaves `text` untouched.
/// - Trailing ASCII digits (a typed tone suffix such as `hao3`) are dropped before marking.
/// - Text without any vowel comes back without its digit suffix but otherwise unchanged.
///
/// ```
/// use pinyin_scribe::tone::apply_tone;
///
/// assert_eq!(apply_tone("hao", 3), "hǎo");
/// assert_eq!(apply_tone("dou", 4), "dòu");
/// assert_eq!(apply_tone("gui", 1), "guī");
/// assert_eq!(apply_tone("gui", 0), "gui");
/// ```
pub fn apply_tone(text: &str, tone: u8) -> String {
  if !(1..=4).contains(&tone) {
    return text.to_string();
  }

  let clean = text.trim_end_matches(|c: char| c.is_ascii_digit());

  match mark_position(clean) {
    Some((idx, letter)) => match ToneTable::toned(letter, tone) {
      Some(glyph) => splice(clean, idx, letter, glyph),
      None => clean.to_string(),
    },
    None => clean.to_string(),
  }
}

/// Finds the byte offset and letter that receives the mark.
fn mark_position(text: &str) -> Option<(usize, char)> {
  // Rule 1: first `a` or `e`, whichever comes first
  if let Some(found) = text.char_indices().find(|&(_, c)| c == 'a' || c == 'e') {
    return Some(found);
  }

  // Rule 2: the `o` of `ou`
  if let Some(idx) = text.find("ou") {
    return Some((idx, 'o'));
  }

  // Rule 3: last vowel, scanning right to left
  text.char_indices().rev().find(|&(_, c)| VOWELS.contains(&to_lower(c)))
}

/// Replaces the letter at byte offset `idx` with `glyph`.
fn splice(text: &str, idx: usize, letter: char, glyph: &str) -> String {
  let mut out = String::with_capacity(text.len() + glyph.len());
  out.push_str(&text[..idx]);
  out.push_str(glyph);
  out.push_str(&text[idx + letter.len_utf8()..]);
  out
}

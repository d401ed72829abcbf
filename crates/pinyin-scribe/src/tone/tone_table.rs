//! Tone mark table
//!
//! Maps a base letter to its five tone forms: index 0 is the bare letter,
//! indices 1-4 are tones 1-4.

/// One row per base letter, in palette order.
///
/// `v` is the keyboard stand-in for `ü` and shares its toned forms.
/// `n` and `m` carry the syllabic nasal forms; the toned glyphs without a
/// precomposed codepoint are written as base letter + combining mark.
const ROWS: [(char, [&str; 5]); 9] = [
  ('a', ["a", "ā", "á", "ǎ", "à"]),
  ('e', ["e", "ē", "é", "ě", "è"]),
  ('i', ["i", "ī", "í", "ǐ", "ì"]),
  ('o', ["o", "ō", "ó", "ǒ", "ò"]),
  ('u', ["u", "ū", "ú", "ǔ", "ù"]),
  ('ü', ["ü", "ǖ", "ǘ", "ǚ", "ǜ"]),
  ('v', ["v", "ǖ", "ǘ", "ǚ", "ǜ"]),
  ('n', ["n", "n\u{304}", "ń", "ň", "ǹ"]),
  ('m', ["m", "m\u{304}", "ḿ", "m\u{30c}", "m\u{300}"]),
];

/// Static lookup over the tone rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneTable;

impl ToneTable {
  /// Returns all five forms of `letter`, looked up by its lowercase identity.
  ///
  /// ```
  /// use pinyin_scribe::tone::ToneTable;
  ///
  /// assert_eq!(ToneTable::forms('A'), Some(&["a", "ā", "á", "ǎ", "à"]));
  /// assert_eq!(ToneTable::forms('x'), None);
  /// ```
  pub fn forms(letter: char) -> Option<&'static [&'static str; 5]> {
    let letter = to_lower(letter);
    ROWS.iter().find(|(base, _)| *base == letter).map(|(_, forms)| forms)
  }

  /// Returns the form of `letter` for `tone` (0 = bare, 1-4 = tones).
  ///
  /// `None` when the letter has no row or the tone is above 4.
  pub fn toned(letter: char, tone: u8) -> Option<&'static str> {
    Self::forms(letter).and_then(|forms| forms.get(usize::from(tone)).copied())
  }

  /// Base letters in table order.
  pub fn letters() -> impl Iterator<Item = char> {
    ROWS.iter().map(|(base, _)| *base)
  }
}

/// Lowercase a single char, keeping it when the lowercase mapping expands.
pub(crate) fn to_lower(c: char) -> char {
  let mut lower = c.to_lowercase();
  match (lower.next(), lower.next()) {
    (Some(l), None) => l,
    _ => c,
  }
}

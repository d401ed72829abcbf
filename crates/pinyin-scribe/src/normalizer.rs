//! Text normalization for comparisons
//!
//! Two folds are used by the searchers:
//! - [`normalize_general`] for free text (glosses, examples)
//! - [`normalize_romanization`] for pinyin, where `ü` folds to `v`

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block (U+0300..=U+036F)
fn is_combining_mark(c: char) -> bool {
  ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Canonicalizes free text for comparison.
///
/// Lowercased, NFD decomposed with combining marks removed, `đ` folded to
/// `d` and trimmed.
///
/// ```
/// use pinyin_scribe::normalizer::normalize_general;
///
/// assert_eq!(normalize_general("  Xin Chào "), "xin chao");
/// assert_eq!(normalize_general("Đi"), "di");
/// ```
pub fn normalize_general(text: &str) -> String {
  text
    .to_lowercase()
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .map(|c| if c == 'đ' { 'd' } else { c })
    .collect::<String>()
    .trim()
    .to_string()
}

/// Canonicalizes pinyin for comparison.
///
/// Lowercases, folds `ü` and its toned forms to `v`, then strips every
/// remaining diacritic and trims. Input is composed first so a decomposed
/// `u` + diaeresis folds the same way as the precomposed letter.
///
/// ```
/// use pinyin_scribe::normalizer::normalize_romanization;
///
/// assert_eq!(normalize_romanization("Nǚ Hái"), "nv hai");
/// assert_eq!(normalize_romanization(" lǜsè "), "lvse");
/// ```
pub fn normalize_romanization(text: &str) -> String {
  text
    .to_lowercase()
    .nfc()
    .map(|c| match c {
      'ü' | 'ǖ' | 'ǘ' | 'ǚ' | 'ǜ' => 'v',
      other => other,
    })
    .collect::<String>()
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .collect::<String>()
    .trim()
    .to_string()
}

use unicode_normalization::UnicodeNormalization;

/// Remove diacritics from a word.
///
/// The word is decomposed (NFD) and every non-ASCII character is dropped, so
/// characters without an ASCII base letter disappear entirely.
///
/// ```
/// use ptstem::support::remove_diacritics;
///
/// assert_eq!(remove_diacritics("canção"), "cancao");
/// ```
pub fn remove_diacritics(word: &str) -> String {
    word.nfd().filter(char::is_ascii).collect()
}

//! R1, R2 and RV regions of a word.
//!
//! Regions are suffixes of the word they are computed from:
//!
//! - `R1` starts after the first non-vowel that follows a vowel,
//!   or is empty if there is no such non-vowel.
//! - `R2` is the `R1` region of `R1`.
//! - `RV`: if the second letter is a consonant, it starts after the next
//!   vowel; if the first two letters are vowels, after the next consonant;
//!   otherwise (consonant then vowel) at the third letter. Words of two
//!   letters or less have an empty `RV`.
//!
//! Regions must be recomputed every time the word changes.
//!
//! # Examples
//!
//! ```
//! use ptstem::stemmer::region::Regions;
//!
//! let regions = Regions::of("rapidamente");
//! assert_eq!(regions.r1, "idamente");
//! assert_eq!(regions.r2, "amente");
//! assert_eq!(regions.rv, "pidamente");
//! ```

/// Check if a character is a Portuguese vowel.
pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'â' | 'ê' | 'ô'
    )
}

/// Byte offset of the character at `index`, or the word length past the end.
fn offset(word: &str, chars: &[(usize, char)], index: usize) -> usize {
    chars.get(index).map_or(word.len(), |&(byte, _)| byte)
}

/// Region after the first vowel followed by a non-vowel.
pub fn find_r(word: &str) -> &str {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    chars
        .windows(2)
        .position(|pair| is_vowel(pair[0].1) && !is_vowel(pair[1].1))
        .map_or("", |i| &word[offset(word, &chars, i + 2)..])
}

/// The RV region.
pub fn find_rv(word: &str) -> &str {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    if chars.len() <= 2 {
        return "";
    }

    let rest = &chars[2..];
    let start = if !is_vowel(chars[1].1) {
        rest.iter().position(|&(_, c)| is_vowel(c)).map(|p| p + 3)
    } else if is_vowel(chars[0].1) {
        rest.iter().position(|&(_, c)| !is_vowel(c)).map(|p| p + 3)
    } else {
        Some(2)
    };

    start.map_or("", |i| &word[offset(word, &chars, i)..])
}

/// The regions of one version of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions<'a> {
    pub r1: &'a str,
    pub r2: &'a str,
    pub rv: &'a str,
}

impl<'a> Regions<'a> {
    /// Compute all regions of `word`.
    pub fn of(word: &'a str) -> Self {
        let r1 = find_r(word);
        Regions {
            r1,
            r2: find_r(r1),
            rv: find_rv(word),
        }
    }
}

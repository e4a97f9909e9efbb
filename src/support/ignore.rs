//! Words that bypass stemming.

use std::fs;
use std::path::Path;

use ahash::AHashSet;
use log::debug;

use crate::error::Result;

/// A set of words returned verbatim by the front end.
///
/// Words are trimmed and lowercased on insertion so membership checks match
/// the normalized words the stemmer operates on.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    words: AHashSet<String>,
}

impl IgnoreList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a list from a file with one word per line. Blank lines are
    /// skipped.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut list = Self::new();
        list.load_file(path)?;
        Ok(list)
    }

    /// Add the words of a file with one word per line.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let before = self.words.len();
        self.extend(content.lines());
        let added = self.words.len() - before;
        debug!("loaded {} ignored words from {}", added, path.display());
        Ok(added)
    }

    /// Add one word.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    /// Check whether a normalized word is ignored.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }
}

impl<S: AsRef<str>> Extend<S> for IgnoreList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_words_are_normalized() {
        let list: IgnoreList = ["  Lisboa ", "PORTUGAL", ""].into_iter().collect();

        assert_eq!(list.len(), 2);
        assert!(list.contains("lisboa"));
        assert!(list.contains("portugal"));
        assert!(!list.contains("Lisboa"));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Coimbra").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "braga  ").unwrap();

        let list = IgnoreList::from_path(file.path()).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains("coimbra"));
        assert!(list.contains("braga"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = IgnoreList::from_path(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(crate::error::StemmerError::Io(_))));
    }

    #[test]
    fn test_clear() {
        let mut list: IgnoreList = ["porto"].into_iter().collect();
        list.clear();
        assert!(list.is_empty());
    }
}

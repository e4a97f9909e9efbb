//! Reverse-indexed suffix tree.
//!
//! A [`SuffixTree`] stores suffixes keyed by their characters read from the
//! end of the string, so matching a word walks it backwards from its last
//! character. Every node reached during the walk is either:
//!
//! - absent (the parent has no edge for the next character, so the walk ends),
//! - intermediate (the node only continues a longer suffix), or
//! - terminal (a suffix ends here and carries a value).
//!
//! Intermediate and terminal nodes are told apart by the node's [`Slot`], not
//! by inspecting the value, so `T` may be `()`, `0` or any other "empty"
//! looking value.
//!
//! # Examples
//!
//! ```
//! use ptstem::suffix_tree::SuffixTree;
//!
//! let mut tree = SuffixTree::new();
//! tree.insert("s", 1);
//! tree.insert("as", 2);
//!
//! assert_eq!(tree.longest_suffix_and_value("casas"), Some(("as", &2)));
//! assert_eq!(tree.longest_suffix("cantor"), None);
//!
//! let matches = tree.matched_suffixes_and_values("casas");
//! assert_eq!(matches, vec![("s", &1), ("as", &2)]);
//! ```

use ahash::AHashMap;

/// Marks whether a suffix ends at a node.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<T> {
    /// The node only exists to reach a longer suffix.
    Intermediate,
    /// A suffix ends at this node.
    Terminal(T),
}

#[derive(Debug, Clone)]
struct SuffixTreeNode<T> {
    edges: AHashMap<char, SuffixTreeNode<T>>,
    slot: Slot<T>,
}

impl<T> SuffixTreeNode<T> {
    fn new() -> Self {
        SuffixTreeNode {
            edges: AHashMap::new(),
            slot: Slot::Intermediate,
        }
    }

    fn edge(&self, c: char) -> Option<&SuffixTreeNode<T>> {
        self.edges.get(&c)
    }

    fn edge_or_insert(&mut self, c: char) -> &mut SuffixTreeNode<T> {
        self.edges.entry(c).or_insert_with(SuffixTreeNode::new)
    }

    fn value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Terminal(value) => Some(value),
            Slot::Intermediate => None,
        }
    }
}

/// A trie of suffixes indexed from the last character backwards.
#[derive(Debug, Clone)]
pub struct SuffixTree<T> {
    root: SuffixTreeNode<T>,
    len: usize,
}

impl<T> Default for SuffixTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SuffixTree<T> {
    /// Create an empty suffix tree.
    pub fn new() -> Self {
        SuffixTree {
            root: SuffixTreeNode::new(),
            len: 0,
        }
    }

    /// Number of suffixes stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree holds no suffix at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `suffix` with `value`, creating any missing nodes along the
    /// reversed path.
    ///
    /// Re-inserting a suffix overwrites its value; the previous value is
    /// returned.
    pub fn insert(&mut self, suffix: &str, value: T) -> Option<T> {
        let mut node = &mut self.root;
        for c in suffix.chars().rev() {
            node = node.edge_or_insert(c);
        }

        match std::mem::replace(&mut node.slot, Slot::Terminal(value)) {
            Slot::Terminal(previous) => Some(previous),
            Slot::Intermediate => {
                self.len += 1;
                None
            }
        }
    }

    /// Check whether the entire `word` is stored as a suffix.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars().rev() {
            match node.edge(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.value().is_some()
    }

    /// Walk `word` backwards and yield every terminal node met on the way,
    /// shortest suffix first.
    fn terminals<'a, 'w>(&'a self, word: &'w str) -> impl Iterator<Item = (&'w str, &'a T)> {
        let mut node = &self.root;
        word.char_indices()
            .rev()
            .map_while(move |(index, c)| {
                node = node.edge(c)?;
                Some((index, node))
            })
            .filter_map(move |(index, node)| node.value().map(|value| (&word[index..], value)))
    }

    /// Get the longest stored suffix of `word` together with its value.
    ///
    /// The deepest *terminal* node wins; intermediate nodes reached after it
    /// do not count as matches.
    pub fn longest_suffix_and_value<'w>(&self, word: &'w str) -> Option<(&'w str, &T)> {
        self.terminals(word).last()
    }

    /// Get the value attached to the longest stored suffix of `word`.
    pub fn longest_suffix_value(&self, word: &str) -> Option<&T> {
        self.longest_suffix_and_value(word).map(|(_, value)| value)
    }

    /// Get the longest stored suffix of `word`.
    pub fn longest_suffix<'w>(&self, word: &'w str) -> Option<&'w str> {
        self.longest_suffix_and_value(word).map(|(suffix, _)| suffix)
    }

    /// Get every stored suffix of `word` with its value, ordered from the
    /// shortest match to the longest.
    pub fn matched_suffixes_and_values<'w>(&self, word: &'w str) -> Vec<(&'w str, &T)> {
        self.terminals(word).collect()
    }
}

impl<T: Clone> SuffixTree<T> {
    /// Build a tree where every suffix carries the same value.
    pub fn from_suffixes<I, S>(value: T, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = SuffixTree::new();
        for suffix in suffixes {
            tree.insert(suffix.as_ref(), value.clone());
        }
        tree
    }
}

impl<S: AsRef<str>> FromIterator<S> for SuffixTree<()> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SuffixTree::from_suffixes((), iter)
    }
}

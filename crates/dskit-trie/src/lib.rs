//! Lowercasing character trie for dskit.
//!
//! Words are folded to lowercase on insert and lookup, so the trie is
//! case-insensitive throughout. [`Trie::suggestions`] walks to the prefix
//! node and collects up to a bounded number of complete words in
//! lexicographic order; each suggestion carries the full prefix.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    // BTreeMap keeps suggestions in lexicographic order.
    children: BTreeMap<char, TrieNode>,
    terminus: bool,
}

/// A case-insensitive prefix tree over words.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, folded to lowercase. Empty words and re-inserts of a
    /// known word leave the trie unchanged.
    pub fn add(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for c in word.chars().flat_map(char::to_lowercase) {
            current = current.children.entry(c).or_default();
        }

        if !current.terminus {
            current.terminus = true;
            self.len += 1;
        }
    }

    /// Insert every word in the iterator.
    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.add(word);
        }
    }

    /// Whether `word` was inserted as a complete word (not merely a prefix
    /// of one).
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.find_node(word).is_some_and(|node| node.terminus)
    }

    /// Up to `limit` complete words starting with `prefix`, in lexicographic
    /// order, each carrying the full prefix. Unknown prefix yields an empty
    /// vec; the empty prefix enumerates from the root.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut results = Vec::new();

        if let Some(node) = self.find_node(prefix) {
            let built: String = prefix.chars().flat_map(char::to_lowercase).collect();
            collect_words(node, &built, limit, &mut results);
        }

        results
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in prefix.chars().flat_map(char::to_lowercase) {
            current = current.children.get(&c)?;
        }
        Some(current)
    }
}

fn collect_words(node: &TrieNode, built: &str, limit: usize, results: &mut Vec<String>) {
    if results.len() >= limit {
        return;
    }
    if node.terminus {
        results.push(built.to_string());
    }

    for (c, child) in &node.children {
        if results.len() >= limit {
            return;
        }
        let mut next = String::with_capacity(built.len() + c.len_utf8());
        next.push_str(built);
        next.push(*c);
        collect_words(child, &next, limit, results);
    }
}

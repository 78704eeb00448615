use crate::alphabet::normalize;
use crate::wordlist::index::Index;
use crate::wordlist::trienode::TrieNode;

/// An ordered, mutable set of lowercase words keyed by character sequence.
///
/// Words are normalized to lowercase on insertion and lookup, so the set is
/// case-insensitive. Enumeration is always alphabetical. There is no removal;
/// nodes persist for the trie's lifetime.
#[derive(Debug)]
pub struct Trie {
    root: TrieNode,
    size: usize,
    max_depth: usize,
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: TrieNode::new('\0'),
            size: 0,
            max_depth: 0,
        }
    }

    /// Adds `word` to the set. Idempotent: re-inserting an already stored
    /// word changes nothing. The empty string is a valid zero-length word --
    /// inserting it marks the root terminal and counts toward `size`.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        let mut depth = 0;
        for c in word.chars().map(normalize) {
            node = node.get_or_create_child(c);
            depth += 1;
        }
        if !node.is_terminal {
            node.is_terminal = true;
            self.size += 1;
            if depth > self.max_depth {
                self.max_depth = depth;
            }
        }
    }

    /// Whether `word` was inserted as a complete word. A strict prefix of a
    /// stored word reports false even though its path exists in the tree.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars().map(normalize) {
            match node.get_child(c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_terminal
    }

    /// Count of distinct stored words.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length, in characters, of the longest word inserted so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Every stored word, in alphabetical order.
    ///
    /// Depth-first walk; the accumulated path lives in one buffer that is
    /// pushed and popped across sibling branches rather than rebuilt per node.
    pub fn enumerate_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.size);
        let mut path = String::with_capacity(self.max_depth);
        Self::collect_words(&self.root, &mut path, &mut words);
        words
    }

    fn collect_words(node: &TrieNode, path: &mut String, words: &mut Vec<String>) {
        if node.is_terminal {
            words.push(path.clone());
        }
        for child in node.children.values() {
            path.push(child.letter);
            Self::collect_words(child, path, words);
            path.pop();
        }
    }
}

impl Default for Trie {
    fn default() -> Trie {
        Trie::new()
    }
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        self.insert(word);
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

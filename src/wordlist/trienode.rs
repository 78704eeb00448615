use std::collections::BTreeMap;

use derive_new::new;

/// One character position in some word(s) stored in the trie.
///
/// Children live in a `BTreeMap` so that iterating them always yields
/// ascending character order; the tree-wide alphabetical enumeration falls out
/// of that with no per-visit sort. Each child is owned by exactly one parent.
#[derive(new, Debug)]
pub(crate) struct TrieNode {
    // '\0' on the root, which stands for the empty prefix.
    pub(crate) letter: char,
    #[new(default)]
    pub(crate) is_terminal: bool,
    #[new(default)]
    pub(crate) children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// The single allocation point in the structure: a node is created only
    /// when no child with this letter exists yet.
    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| TrieNode::new(c))
    }
}

pub mod index;
pub mod trie;
pub mod trienode;
pub mod wordlist;

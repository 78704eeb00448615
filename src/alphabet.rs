/// The trie is case-insensitive: every character is lowercased on the way in,
/// for insertion and lookup alike. This is the only normalization applied --
/// no trimming, no stripping of non-letter characters.
pub fn normalize(c: char) -> char {
    c.to_ascii_lowercase()
}

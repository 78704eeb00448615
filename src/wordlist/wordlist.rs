use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use delegate::delegate;
use typed_builder::TypedBuilder;

use crate::wordlist::index::Index;
use crate::wordlist::trie::Trie;

/// A set of words backed by a [`Trie`], filled from a word file or an
/// in-memory list.
pub struct Wordlist {
    trie: Trie,
}

/// Shape of a word file: one word per line by default, or delimited columns
/// with the word in `word_column` (frequency columns, if any, are ignored).
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

impl Wordlist {
    pub fn from_words<'a, I>(words: I) -> Wordlist
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut trie = Trie::new();
        trie.add_all(words);
        Wordlist { trie }
    }

    pub fn from_file(filename: &str, format: FileFormat) -> io::Result<Wordlist> {
        println!("Reading words from {:#?}", &filename);

        let file = File::open(filename)?;
        let buf_reader = BufReader::new(file);

        let mut trie = Trie::new();
        let mut count: usize = 0;

        let start = Instant::now();
        for line in buf_reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            if let Some(word) = format.parse_line(&line) {
                trie.insert(word);
                count += 1;
            }
        }
        let elapsed = start.elapsed();
        println!(
            "Read {} words ({} distinct) in {}s",
            count,
            trie.size(),
            (elapsed.as_millis() as f64) / 1000.0
        );

        Ok(Wordlist { trie })
    }

    delegate! {
        to self.trie {
            pub fn contains(&self, word: &str) -> bool;
            pub fn size(&self) -> usize;
            pub fn max_depth(&self) -> usize;
            pub fn enumerate_words(&self) -> Vec<String>;
        }
    }
}

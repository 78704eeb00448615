use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

use word_trie::wordlist::wordlist::{FileFormat, Wordlist};

const DEMO_WORDS: &[&str] = &["Hello", "World", "testing", "object"];

/// Build a word trie and print its contents in alphabetical order.
#[derive(StructOpt)]
enum Cli {
    /// Build a trie from the built-in demo word list and print it
    Create,
    /// Load words from a file and print the resulting trie
    Load {
        /// The path to the word file to read
        #[structopt(parse(from_os_str))]
        path: PathBuf,
        /// Column delimiter, for files with more than the word per line
        #[structopt(short, long)]
        delimiter: Option<char>,
        /// Zero-based column holding the word (with --delimiter)
        #[structopt(short, long)]
        word_column: Option<usize>,
    },
}

fn print_trie(wl: &Wordlist) {
    for word in wl.enumerate_words() {
        println!("{}", word);
    }
    println!("{} words, longest {}", wl.size(), wl.max_depth());
}

fn main() {
    match Cli::from_args() {
        Cli::Create => {
            let wl = Wordlist::from_words(DEMO_WORDS.iter().copied());
            print_trie(&wl);
            println!("contains \"testing\": {}", wl.contains("testing"));
            println!("contains \"samsun\": {}", wl.contains("samsun"));
        }
        Cli::Load {
            path,
            delimiter,
            word_column,
        } => {
            let format = FileFormat::builder();
            let format = match (delimiter, word_column) {
                (Some(d), Some(c)) => format.delimiter(d).word_column(c).build(),
                (Some(d), None) => format.delimiter(d).build(),
                (None, Some(c)) => format.word_column(c).build(),
                (None, None) => format.build(),
            };
            match Wordlist::from_file(path.to_string_lossy().as_ref(), format) {
                Ok(wl) => print_trie(&wl),
                Err(e) => {
                    eprintln!("Failed to read {}: {}", path.display(), e);
                    process::exit(1);
                }
            }
        }
    }
}

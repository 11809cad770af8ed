use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clap::ValueHint;
use regex::Regex;

use word_trie::tokenize::Tokenizer;

#[derive(Parser, Debug)]
#[clap(
    author = clap::crate_authors!(),
    version = clap::crate_version!(),
    about = clap::crate_description!(),
)]
pub struct Options {
    /// Input file to read the text from. [default: stdin]
    #[clap(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file to write the result to. [default: stdout]
    #[clap(short, long = "out", value_name = "file", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Treat every input line as a single word.
    /// [default: split lines into words at Unicode word boundaries]
    #[clap(short, long, conflicts_with = "split_delimiter")]
    pub lines: bool,

    /// Split lines into words at the given regex pattern.
    /// For example, -d'/|\.' splits paths into directory names and file extensions.
    /// [default: split lines into words at Unicode word boundaries]
    #[clap(short = 'd', long, value_name = "regex")]
    pub split_delimiter: Option<Regex>,

    /// Trim leading and trailing whitespace from each line.
    /// [default: false]
    #[clap(short, long)]
    pub trim_input: bool,

    /// Convert words (and queries) to lowercase before inserting them.
    /// [default: false]
    #[clap(short, long)]
    pub ignore_case: bool,

    /// Sort the words either alphabetically or by their length (ties alphabetically).
    /// [default: unsorted, i.e., whatever order the trie traversal yields]
    #[clap(short, long, value_name = "a[lpha]|l[ength]")]
    pub sort: Option<SortOrder>,

    /// Instead of listing all words, print for each query word whether it is in the trie.
    /// Can be given multiple times.
    #[clap(short, long = "query", value_name = "word")]
    pub queries: Vec<String>,

    /// Quote the words in the output. [default: false]
    #[clap(long)]
    pub quote: bool,

    /// Instead of listing all words, show how many nodes the trie has at each depth.
    #[clap(long, conflicts_with = "queries")]
    pub histogram: bool,

    /// Log more details to stderr, can be repeated. RUST_LOG takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    pub fn tokenizer(&self) -> Tokenizer {
        if self.lines {
            Tokenizer::Lines
        } else if let Some(regex) = &self.split_delimiter {
            Tokenizer::Delimiter(regex.clone())
        } else {
            Tokenizer::UnicodeWords
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Alphabetical,
    Length,
}

impl FromStr for SortOrder {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "alpha" => Ok(SortOrder::Alphabetical),
            "l" | "length" => Ok(SortOrder::Length),
            _ => Err("sort order must be either 'alpha' or 'length'"),
        }
    }
}

impl SortOrder {
    pub fn sort(self, words: &mut [String]) {
        match self {
            SortOrder::Alphabetical => words.sort_unstable(),
            SortOrder::Length => words.sort_unstable_by(|a, b| {
                a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b))
            }),
        }
    }
}

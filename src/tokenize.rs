//! Splitting input lines into the words that are inserted into the trie.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Default)]
pub enum Tokenizer {
    /// Words according to the Unicode word boundary rules (UAX #29), dropping punctuation and
    /// whitespace.
    #[default]
    UnicodeWords,

    /// Every line is a single word.
    Lines,

    /// Split at every match of the regex. Empty pieces are dropped.
    Delimiter(Regex),
}

impl Tokenizer {
    pub fn words<'a>(&'a self, line: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            Tokenizer::UnicodeWords => Box::new(line.unicode_words()),
            Tokenizer::Lines => Box::new(Some(line).into_iter().filter(|word| !word.is_empty())),
            Tokenizer::Delimiter(regex) => Box::new(regex.split(line).filter(|word| !word.is_empty())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn words(tokenizer: &Tokenizer, line: &str) -> Vec<String> {
        tokenizer.words(line).map(String::from).collect()
    }

    #[test]
    fn unicode_words() {
        let line = "The quick (\"brown\") fox can't jump 32.3 feet, right?";
        assert_eq!(
            words(&Tokenizer::UnicodeWords, line),
            ["The", "quick", "brown", "fox", "can't", "jump", "32.3", "feet", "right"]
        );
        assert_eq!(words(&Tokenizer::UnicodeWords, "Grüße, Welt!"), ["Grüße", "Welt"]);
        assert!(words(&Tokenizer::UnicodeWords, "  ...  ").is_empty());
    }

    #[test]
    fn lines() {
        assert_eq!(words(&Tokenizer::Lines, "foo bar, baz"), ["foo bar, baz"]);
        assert!(words(&Tokenizer::Lines, "").is_empty());
    }

    #[test]
    fn delimiter() {
        let tokenizer = Tokenizer::Delimiter(Regex::new(r"[/\.]").unwrap());
        assert_eq!(words(&tokenizer, "/usr/lib/libfoo.so"), ["usr", "lib", "libfoo", "so"]);
        assert_eq!(words(&tokenizer, "a//b"), ["a", "b"]);
        assert!(words(&tokenizer, "///").is_empty());
    }
}

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use word_trie::histogram::DepthHistogram;
use word_trie::Trie;

use crate::options::Options;

mod options;

const BAR_WIDTH: usize = 20;

/// Logs go to stderr, so they never mix with the words on stdout.
fn init_logging(options: &Options) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    init_logging(&options);
    debug!(?options, "parsed options");

    let tokenizer = options.tokenizer();

    // Read words from input and insert into trie.
    let input: Box<dyn BufRead> = if let Some(file) = &options.input {
        let file = File::open(file)
            .with_context(|| format!("cannot open input file '{}'", file.display()))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(io::stdin().lock())
    };

    let mut trie = Trie::new();
    let mut token_count: usize = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("cannot read input line {}", i + 1))?;
        let mut line = line.as_str();

        // Optionally trim leading and trailing whitespace.
        if options.trim_input {
            line = line.trim();
        }

        for word in tokenizer.words(line) {
            token_count += 1;
            if options.ignore_case {
                trie.append_word(&word.to_lowercase());
            } else {
                trie.append_word(word);
            }
        }
    }
    info!(tokens = token_count, words = trie.len(), nodes = trie.node_count(), "built trie");

    let mut output: Box<dyn Write> = if let Some(file) = &options.output {
        let file = File::create(file)
            .with_context(|| format!("cannot create output file '{}'", file.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout().lock()))
    };

    if !options.queries.is_empty() {
        for query in &options.queries {
            let found = if options.ignore_case {
                trie.has_word(&query.to_lowercase())
            } else {
                trie.has_word(query)
            };
            writeln!(output, "{query}\t{found}")?;
        }
    } else if options.histogram {
        write!(output, "{}", DepthHistogram::from(&trie).render(BAR_WIDTH))?;
    } else {
        let mut words = trie.words();
        if let Some(order) = options.sort {
            order.sort(&mut words);
        }
        for word in words {
            if options.quote {
                writeln!(output, "'{word}'")?;
            } else {
                writeln!(output, "{word}")?;
            }
        }
    }

    output.flush().context("cannot write output")?;
    Ok(())
}

//! Number of trie nodes per depth, displayed as horizontal bars with "high" resolution by using
//! Unicode block characters.

use std::fmt::Write;
use std::ops::ControlFlow;

use crate::trie::Trie;

// Use only two different levels of "fullness" since the other unicode characters may look slightly
// different depending on the font.
const PARTIAL_BLOCKS: [&str; 3] = [" ", "▌", "█"];

/// `fraction` must be in `[0, 1]`.
pub fn unicode_bar(fraction: f64, max_width: usize) -> String {
    debug_assert!((0.0..=1.0).contains(&fraction), "fraction out of range: {fraction}");
    let ideal_width = fraction * max_width as f64;

    let full_width = ideal_width.floor();
    let mut bar = PARTIAL_BLOCKS[PARTIAL_BLOCKS.len() - 1].repeat(full_width as usize);

    let partial_width = ideal_width - full_width;
    if partial_width > 0.0 {
        let block_index = (partial_width * (PARTIAL_BLOCKS.len() - 1) as f64).floor() as usize;
        bar.push_str(PARTIAL_BLOCKS[block_index]);
    }

    let empty_width = max_width.saturating_sub(bar.chars().count());
    bar.push_str(&PARTIAL_BLOCKS[0].repeat(empty_width));

    debug_assert_eq!(bar.chars().count(), max_width);
    bar
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthHistogram {
    /// `counts[d - 1]` is the number of nodes at depth `d`. The root is not counted.
    counts: Vec<usize>,
}

impl From<&Trie> for DepthHistogram {
    fn from(trie: &Trie) -> Self {
        let mut counts = Vec::new();
        let _ = trie.each_node(|node| {
            if let Some(index) = node.depth().checked_sub(1) {
                if counts.len() <= index {
                    counts.resize(index + 1, 0);
                }
                counts[index] += 1;
            }
            ControlFlow::Continue(())
        });
        Self { counts }
    }
}

impl DepthHistogram {
    pub fn max_depth(&self) -> usize {
        self.counts.len()
    }

    /// Number of nodes at `depth`, zero for the root level and beyond the deepest node.
    pub fn count(&self, depth: usize) -> usize {
        depth
            .checked_sub(1)
            .and_then(|index| self.counts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// One line per depth: the depth, the node count, and a bar relative to the most populated depth.
    pub fn render(&self, bar_width: usize) -> String {
        let max_count = self.counts.iter().copied().max().unwrap_or(0);
        let depth_width = self.max_depth().to_string().len();
        let count_width = max_count.to_string().len();

        let mut str_acc = String::new();
        for (index, &count) in self.counts.iter().enumerate() {
            let bar = unicode_bar(count as f64 / max_count as f64, bar_width);
            let line = format!("{:>depth_width$} {count:>count_width$} {bar}", index + 1);
            // Writing to a `String` cannot fail.
            let _ = writeln!(str_acc, "{}", line.trim_end());
        }
        str_acc
    }
}

//! A prefix tree (trie) over Unicode scalar values, plus the pieces the `wt` binary uses to feed
//! it from text and to display it.

pub mod histogram;
pub mod tokenize;
pub mod trie;

pub use trie::{Node, NodeId, Trie};

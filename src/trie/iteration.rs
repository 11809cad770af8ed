use std::ops::ControlFlow;

use tracing::debug;

use super::{Node, Trie};

/// External pre-order depth-first iterator over all nodes of a trie, starting with the root.
///
/// Siblings are visited in the iteration order of the children map, i.e., in no particular order.
pub struct Iter<'trie> {
    trie: &'trie Trie,

    /// A worklist of nodes still to visit. The top of the stack is visited next.
    node_stack: Vec<&'trie Node>,
}

impl<'trie> Iter<'trie> {
    fn new(trie: &'trie Trie) -> Self {
        Self {
            trie,
            node_stack: vec![trie.root()],
        }
    }
}

impl<'trie> Iterator for Iter<'trie> {
    type Item = &'trie Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node_stack.pop()?;
        let trie = self.trie;
        // Process the children next, i.e., depth-first traversal.
        self.node_stack.extend(node.children().map(|(_, id)| trie.node(id)));
        Some(node)
    }
}

impl Trie {
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Calls `f` once for every node, root first, in depth-first order.
    /// Stops right after the first call that returns `ControlFlow::Break`, and returns that.
    pub fn each_node<F>(&self, f: F) -> ControlFlow<()>
    where
        F: FnMut(&Node) -> ControlFlow<()>,
    {
        self.iter().try_for_each(f)
    }

    /// Returns every word in the trie exactly once, in no particular order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len());

        // Characters on the path from the root to the last visited node.
        let mut word: Vec<char> = Vec::new();
        let mut last_depth = 0;

        for node in self.iter() {
            if let Some(character) = node.character() {
                // Not a child of the last node, so drop the part of the path we backtracked over.
                if node.depth() <= last_depth {
                    word.truncate(word.len() - (last_depth - node.depth() + 1));
                }
                word.push(character);
            }
            debug_assert_eq!(word.len(), node.depth());

            if node.is_word() {
                words.push(word.iter().collect());
            }
            last_depth = node.depth();
        }

        debug!(count = words.len(), "enumerated words");
        words
    }
}

impl<'trie> IntoIterator for &'trie Trie {
    type Item = &'trie Node;
    type IntoIter = Iter<'trie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

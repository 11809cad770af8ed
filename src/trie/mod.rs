// see https://en.wikipedia.org/wiki/Trie

mod iteration;
mod node;


use tracing::trace;

pub use iteration::Iter;
pub use node::{Node, NodeId};

/// Prefix tree over Unicode scalar values.
///
/// Nodes are kept in an arena owned by the trie and refer to each other by `NodeId`. Each node
/// owns its children through the `children` map, whereas the `parent` link is only an index
/// back into the arena. Nodes are never removed, so ids stay valid for the lifetime of the trie.
#[derive(Debug, Clone)]
pub struct Trie {
    // Invariant: `nodes[0]` is the root, and `nodes[i].id() == NodeId(i)`.
    nodes: Vec<Node>,

    // Number of nodes with `is_word` set, so `len()` does not need to walk the tree.
    word_count: usize,
}

impl Trie {
    /// Creates an empty trie, consisting only of the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            word_count: 0,
        }
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Panics if `id` was not handed out by this trie.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn parent(&self, node: &Node) -> Option<&Node> {
        node.parent().map(|id| self.node(id))
    }

    /// Follows the characters of `prefix` from the root and returns the node reached, if any.
    /// The empty prefix yields the root.
    pub fn find(&self, prefix: &str) -> Option<&Node> {
        prefix.chars().try_fold(self.root(), |node, character| {
            node.child(character).map(|id| self.node(id))
        })
    }

    /// Returns `true` iff `word` was inserted before. Never `true` for the empty word.
    pub fn has_word(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.find(word).is_some_and(Node::is_word)
    }

    /// Inserts `word`, creating the nodes that are missing along its path.
    ///
    /// The final node is marked as a word even if it already existed as a prefix of a longer
    /// word, e.g., inserting "car" after "card". Inserting the empty word does nothing.
    /// Returns `true` if the word was not in the trie before.
    pub fn append_word(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        for character in word.chars() {
            current = match self.node(current).child(character) {
                Some(child) => child,
                None => self.push_child(current, character),
            };
        }

        let last = &mut self.nodes[current.0];
        if last.is_word {
            return false;
        }
        last.is_word = true;
        self.word_count += 1;
        true
    }

    fn push_child(&mut self, parent: NodeId, character: char) -> NodeId {
        let id = NodeId(self.nodes.len());
        let child = Node::child_of(self.node(parent), id, character);
        debug_assert_eq!(child.depth(), self.node(parent).depth() + 1, "depth must be one more than the parent's");
        trace!(?id, ?parent, %character, depth = child.depth(), "new node");

        self.nodes.push(child);
        let previous = self.nodes[parent.0].children.insert(character, id);
        debug_assert!(previous.is_none(), "edge labels must be unique per node");
        id
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.append_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

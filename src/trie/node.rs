use std::collections::HashMap;

/// Index of a node in the arena of its `Trie`.
/// Only meaningful for the trie that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,

    // `None` only for the root, which has no incoming edge.
    character: Option<char>,

    // Flipped from false to true at most once, never cleared.
    pub(crate) is_word: bool,

    // Invariant: `depth == parent.depth + 1` for every non-root node.
    depth: usize,

    // Back-reference into the same arena, not an owner.
    parent: Option<NodeId>,

    // Iteration order of the map is unspecified, and so is every traversal order built on it.
    pub(crate) children: HashMap<char, NodeId>,
}

impl Node {

    // Constructors:

    pub(crate) fn root() -> Self {
        Self {
            id: NodeId::ROOT,
            character: None,
            is_word: false,
            depth: 0,
            parent: None,
            children: HashMap::new(),
        }
    }

    pub(crate) fn child_of(parent: &Node, id: NodeId, character: char) -> Self {
        Self {
            id,
            character: Some(character),
            is_word: false,
            depth: parent.depth + 1,
            parent: Some(parent.id),
            children: HashMap::new(),
        }
    }


    // Accessors:

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The character labeling the edge from the parent to this node, `None` for the root.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether the path from the root to this node spells an inserted word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn child(&self, character: char) -> Option<NodeId> {
        self.children.get(&character).copied()
    }

    /// The outgoing edges of this node, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&character, &id)| (character, id))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

//! Node storage for the Lehua Ternary Search Tree.
//!
//! Nodes live in a flat arena owned by the tree and reference their children
//! by index. The tree is strictly parent-owns-children, so indices never form
//! a cycle, and a missing child is simply `None`.

/// Index of a node inside the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A node in the Lehua Ternary Search Tree.
///
/// Each node branches three ways on a single character. A node carries a
/// payload exactly when some inserted key terminates at it; there is no
/// separate completion flag.
#[derive(Debug)]
pub(crate) struct Node<V> {
    /// Character used for three-way branching at this node
    pub(crate) split_char: char,

    /// Child for characters ordering below `split_char`
    pub(crate) left: Option<NodeId>,

    /// Child continuing the key after consuming `split_char`
    pub(crate) mid: Option<NodeId>,

    /// Child for characters ordering above `split_char`
    pub(crate) right: Option<NodeId>,

    /// Value stored at this node, present only for terminal nodes
    pub(crate) payload: Option<V>,
}

impl<V> Node<V> {
    /// Creates a new node branching on the given character.
    pub(crate) fn new(split_char: char) -> Self {
        Self {
            split_char,
            left: None,
            mid: None,
            right: None,
            payload: None,
        }
    }
}

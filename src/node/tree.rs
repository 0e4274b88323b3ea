use core::ops::Index;

use alloc::{string::String, vec::Vec};
use tracing::{debug, warn};

use crate::error::NodeError;
use super::{parser::Parser, token::{Operator, is_operand}, traversal::{InOrder, PostOrder, PreOrder, Rotated}};

/// Position of a node within its tree's arena.
pub type NodeIndex = usize;

/// A single cell of an expression tree. Operators always have exactly two children, and operands
/// never have any, so a node is a leaf exactly when it is an `Operand`.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Node {
    Operand(char),
    Operator { op: Operator, left: NodeIndex, right: NodeIndex },
}

impl Node {
    /// The character this node displays as.
    pub fn value(&self) -> char {
        match self {
            Node::Operand(c) => *c,
            Node::Operator { op, .. } => op.symbol(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Operand(_))
    }

    /// Returns the `(left, right)` children of an operator, or `None` for a leaf.
    pub fn children(&self) -> Option<(NodeIndex, NodeIndex)> {
        match self {
            Node::Operand(_) => None,
            Node::Operator { left, right, .. } => Some((*left, *right)),
        }
    }

    pub fn left(&self) -> Option<NodeIndex> {
        self.children().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<NodeIndex> {
        self.children().map(|(_, right)| right)
    }
}

/// A binary expression tree, stored as an arena of [Node]s which refer to their children by index.
///
/// Trees are built once from infix text with [ExpressionTree::parse]. After that only the values of
/// leaves can change (see [ExpressionTree::update_leaf]); the shape of the tree and the position of
/// every node stay fixed.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct ExpressionTree {
    nodes: Vec<Node>,
    root: Option<NodeIndex>,
}

impl ExpressionTree {
    /// Builds a tree from an infix expression such as `(3+4)*2`.
    pub fn parse(infix: &str) -> Result<ExpressionTree, NodeError> {
        let tree = Parser::new(infix).parse()?;
        debug!(infix, nodes = tree.len(), "built expression tree");
        Ok(tree)
    }

    /// Adds a node to the arena without attaching it anywhere, returning its index.
    pub(crate) fn push(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn set_root(&mut self, root: NodeIndex) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn root_node(&self) -> Option<&Node> {
        self.root.map(|root| &self.nodes[root])
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// The number of nodes in the tree, operators included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self)
    }

    pub fn rotated(&self) -> Rotated<'_> {
        Rotated::new(self)
    }

    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder::new(self)
    }

    /// Returns the values of every leaf from left to right. Index `i` of the result identifies the
    /// `i`th leaf for [ExpressionTree::update_leaf].
    pub fn leaves(&self) -> Vec<char> {
        self.in_order()
            .map(|index| &self.nodes[index])
            .filter(|node| node.is_leaf())
            .map(Node::value)
            .collect()
    }

    /// The greatest number of edges between the root and any leaf.
    pub fn height(&self) -> usize {
        self.rotated().map(|(_, level)| level).max().unwrap_or(0)
    }

    /// Writes the values of the tree in-order (left, node, right). This is the infix text the tree
    /// was built from, without its parentheses.
    pub fn in_order_notation(&self) -> String {
        self.in_order().map(|index| self.nodes[index].value()).collect()
    }

    /// Writes the values of the tree in pre-order (node, left, right), which is prefix notation
    /// derived from the tree itself rather than from text.
    pub fn pre_order_notation(&self) -> String {
        self.pre_order().map(|index| self.nodes[index].value()).collect()
    }

    /// Writes the values of the tree in post-order (left, right, node).
    pub fn post_order_notation(&self) -> String {
        self.post_order().map(|index| self.nodes[index].value()).collect()
    }

    /// Changes the value of the `index`th leaf (in the order given by [ExpressionTree::leaves]) to
    /// `value`, and returns `infix` with the same edit applied.
    ///
    /// The old value is used as a key: the *first* leaf holding that key is the one changed, and
    /// the *first* occurrence of the key in `infix` is the one rewritten. When operands repeat,
    /// this can be a different leaf from the one which was selected.
    pub fn update_leaf(&mut self, infix: &str, index: usize, value: char) -> Result<String, NodeError> {
        let leaves = self.leaves();
        let key = *leaves.get(index).ok_or(NodeError::IndexOutOfRange { index, len: leaves.len() })?;
        if !is_operand(value) {
            return Err(NodeError::InvalidOperand(value));
        }

        let target = self.in_order().find(|&i| self.nodes[i] == Node::Operand(key));
        if let Some(target) = target {
            self.nodes[target] = Node::Operand(value);
            debug!(index, node = target, %key, %value, "updated leaf");
        }

        Ok(replace_first(infix, key, value))
    }
}

impl Index<NodeIndex> for ExpressionTree {
    type Output = Node;

    fn index(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }
}

/// Rewrites the first occurrence of `key` in `text` to `value`.
fn replace_first(text: &str, key: char, value: char) -> String {
    match text.find(key) {
        Some(at) => {
            let mut result = String::with_capacity(text.len());
            result.push_str(&text[..at]);
            result.push(value);
            result.push_str(&text[at + key.len_utf8()..]);
            result
        }
        None => {
            warn!(text, %key, "leaf value does not appear in expression text, leaving it unchanged");
            String::from(text)
        }
    }
}

//! Stack-based walks over an [ExpressionTree]. None of these recurse, so arbitrarily deep trees
//! can be walked without exhausting the call stack.

use alloc::vec::Vec;

use super::tree::{ExpressionTree, NodeIndex};

/// Visits nodes left subtree first, then the node itself, then the right subtree.
#[derive(Debug)]
pub struct InOrder<'a> {
    tree: &'a ExpressionTree,
    stack: Vec<NodeIndex>,
    current: Option<NodeIndex>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(tree: &'a ExpressionTree) -> Self {
        InOrder { tree, stack: Vec::new(), current: tree.root() }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        while let Some(index) = self.current {
            self.stack.push(index);
            self.current = self.tree[index].left();
        }

        let index = self.stack.pop()?;
        self.current = self.tree[index].right();
        Some(index)
    }
}

/// Visits nodes right subtree first, then the node itself, then the left subtree, yielding each
/// node alongside its level (the root is level 0). This is the order a tree is drawn in when it is
/// rotated so that the root sits on the left.
#[derive(Debug)]
pub struct Rotated<'a> {
    tree: &'a ExpressionTree,
    stack: Vec<(NodeIndex, usize)>,
    current: Option<(NodeIndex, usize)>,
}

impl<'a> Rotated<'a> {
    pub(crate) fn new(tree: &'a ExpressionTree) -> Self {
        Rotated { tree, stack: Vec::new(), current: tree.root().map(|root| (root, 0)) }
    }
}

impl<'a> Iterator for Rotated<'a> {
    type Item = (NodeIndex, usize);

    fn next(&mut self) -> Option<(NodeIndex, usize)> {
        while let Some((index, level)) = self.current {
            self.stack.push((index, level));
            self.current = self.tree[index].right().map(|right| (right, level + 1));
        }

        let (index, level) = self.stack.pop()?;
        self.current = self.tree[index].left().map(|left| (left, level + 1));
        Some((index, level))
    }
}

/// Visits a node before either of its subtrees, left subtree first.
#[derive(Debug)]
pub struct PreOrder<'a> {
    tree: &'a ExpressionTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(tree: &'a ExpressionTree) -> Self {
        PreOrder { tree, stack: tree.root().into_iter().collect() }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let index = self.stack.pop()?;
        if let Some((left, right)) = self.tree[index].children() {
            // Right goes on first so that left is popped first
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(index)
    }
}

/// Visits both subtrees of a node, left first, before the node itself.
#[derive(Debug)]
pub struct PostOrder<'a> {
    tree: &'a ExpressionTree,
    // The flag records whether the node's children have already been pushed
    stack: Vec<(NodeIndex, bool)>,
}

impl<'a> PostOrder<'a> {
    pub(crate) fn new(tree: &'a ExpressionTree) -> Self {
        PostOrder { tree, stack: tree.root().map(|root| (root, false)).into_iter().collect() }
    }
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        loop {
            let (index, expanded) = self.stack.pop()?;
            match self.tree[index].children() {
                Some((left, right)) if !expanded => {
                    self.stack.push((index, true));
                    self.stack.push((right, false));
                    self.stack.push((left, false));
                }
                _ => return Some(index),
            }
        }
    }
}

//! The state carried between cycles of an interactive editing session.
//!
//! A [Session] owns a tree, the text it was built from and the list of leaves last shown to the
//! user. Each cycle, the caller takes a [Snapshot] to display and may then edit one leaf, which
//! updates both the tree and the text. The tree is never rebuilt: its shape is fixed by the text the
//! session started with.

use alloc::{string::String, vec::Vec};
use tracing::debug;

use crate::{
    Number,
    error::{MathsError, NodeError},
    evaluate::Evaluable,
    node::tree::ExpressionTree,
    render::Renderer,
    renderers::{AsciiRenderer, DEFAULT_INDENT_WIDTH},
};

/// Everything shown to the user for one cycle.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Snapshot {
    /// The rendered tree, header first.
    pub lines: Vec<String>,
    pub value: Result<Number, MathsError>,
    pub postfix: Result<String, NodeError>,
    pub prefix: Result<String, NodeError>,
    /// Leaf values from left to right; an edit refers to a leaf by its index in this list.
    pub leaves: Vec<char>,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Session {
    tree: ExpressionTree,
    infix: String,
    leaves: Vec<char>,
    indent_width: usize,
}

impl Session {
    /// Starts a session by building a tree from `infix`.
    pub fn new(infix: &str) -> Result<Session, NodeError> {
        let tree = ExpressionTree::parse(infix)?;
        let leaves = tree.leaves();

        Ok(Session {
            tree,
            infix: String::from(infix),
            leaves,
            indent_width: DEFAULT_INDENT_WIDTH,
        })
    }

    /// Sets the number of spaces used per tree level when rendering snapshots.
    pub fn with_indent(mut self, indent_width: usize) -> Session {
        self.indent_width = indent_width;
        self
    }

    pub fn tree(&self) -> &ExpressionTree {
        &self.tree
    }

    /// The current text of the expression, including any edits.
    pub fn infix(&self) -> &str {
        &self.infix
    }

    /// The leaves as of the last snapshot or edit.
    pub fn leaves(&self) -> &[char] {
        &self.leaves
    }

    /// Renders, evaluates and converts the current expression. Conversions are run against the
    /// current text rather than the tree.
    pub fn snapshot(&mut self) -> Snapshot {
        let mut renderer = AsciiRenderer::with_indent(self.indent_width);
        renderer.draw_all(&self.tree);

        self.leaves = self.tree.leaves();

        Snapshot {
            lines: renderer.lines,
            value: self.tree.evaluate(),
            postfix: self.tree.to_postfix(&self.infix),
            prefix: self.tree.to_prefix(&self.infix),
            leaves: self.leaves.clone(),
        }
    }

    /// Changes the value of the leaf at `index` in [Session::leaves], and returns the updated text.
    /// On failure, neither the tree nor the text is changed.
    pub fn update_leaf(&mut self, index: usize, value: char) -> Result<&str, NodeError> {
        self.infix = self.tree.update_leaf(&self.infix, index, value)?;
        self.leaves = self.tree.leaves();
        debug!(infix = %self.infix, "expression text resynchronised");

        Ok(&self.infix)
    }
}

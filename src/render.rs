//! Drawing expression trees as text.
//!
//! Trees are drawn rotated 90° anticlockwise: the root is on the far left, each level of the tree
//! is one indentation step further right, and right subtrees are drawn above their parent. For
//! `(3+4)*2`, this gives:
//!
//! ```text
//! R 1 2
//!
//!   2
//! *
//!     4
//!   +
//!     3
//! ```
//!
//! The first line labels the indentation columns, from `R` for the root up to the tree's
//! [depth](ExpressionTree::depth).

use alloc::{string::{String, ToString}, vec::Vec};

use crate::{node::tree::ExpressionTree, renderers::AsciiRenderer};

pub trait Renderer {
    /// Prepare a fresh draw surface for a tree with the given depth.
    fn init(&mut self, depth: usize);

    /// Draw a single node on its own row, indented according to its level. Rows are drawn from top
    /// to bottom.
    fn draw(&mut self, value: char, level: usize);

    /// Draws an entire tree, row by row.
    fn draw_all(&mut self, tree: &ExpressionTree) {
        self.init(tree.depth());
        for (index, level) in tree.rotated() {
            self.draw(tree[index].value(), level);
        }
    }
}

/// Builds the column label line for a tree of the given depth, e.g. `R 1 2` for depth 2.
pub fn header(depth: usize) -> String {
    let mut line = String::from("R");
    for level in 1..=depth {
        line.push(' ');
        line.push_str(&level.to_string());
    }
    line
}

impl ExpressionTree {
    /// The number of levels labelled when drawing this tree.
    ///
    /// This walks the tree right subtree first, then the node, then the left subtree, overwriting
    /// the depth at each node. The result is therefore the level of the last node visited, which is
    /// the bottom of the leftmost path. It can be less than [ExpressionTree::height]: `3+4*2` has a
    /// depth of 1 but a height of 2.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        for (_, level) in self.rotated() {
            depth = level;
        }
        depth
    }

    /// Draws this tree with an [AsciiRenderer] using the default indentation, and returns the lines
    /// of text.
    pub fn render(&self) -> Vec<String> {
        let mut renderer = AsciiRenderer::default();
        renderer.draw_all(self);
        renderer.lines
    }
}

use alloc::{string::String, vec::Vec};

use crate::render::{Renderer, header};

/// Number of spaces per level used by [AsciiRenderer::default].
pub const DEFAULT_INDENT_WIDTH: usize = 2;

#[derive(Clone, Debug)]
pub struct AsciiRenderer {
    pub lines: Vec<String>,
    pub indent_width: usize,
}

impl AsciiRenderer {
    pub fn with_indent(indent_width: usize) -> Self {
        AsciiRenderer { lines: Vec::new(), indent_width }
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::with_indent(DEFAULT_INDENT_WIDTH)
    }
}

impl Renderer for AsciiRenderer {
    fn init(&mut self, depth: usize) {
        self.lines = Vec::new();
        self.lines.push(header(depth));
        self.lines.push(String::new());
    }

    fn draw(&mut self, value: char, level: usize) {
        let mut line = " ".repeat(level * self.indent_width);
        line.push(value);
        self.lines.push(line);
    }
}

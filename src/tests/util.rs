macro_rules! tree {
    ($infix:expr) => { crate::ExpressionTree::parse($infix).unwrap() };
}

macro_rules! fault {
    ($fault:expr) => { crate::error::NodeError::InvalidExpression($fault) };
}

macro_rules! render {
    ($tree:expr, $indent:expr $(,)?) => { {
        let mut renderer = crate::renderers::AsciiRenderer::with_indent($indent);
        <crate::renderers::AsciiRenderer as crate::render::Renderer>::draw_all(&mut renderer, &$tree);
        renderer.lines
    } };

    ($tree:expr $(,)?) => { render!($tree, crate::renderers::DEFAULT_INDENT_WIDTH) };
}

/// Wraps `inner` in `depth` pairs of parentheses.
pub fn nested(inner: &str, depth: usize) -> alloc::string::String {
    let mut text = "(".repeat(depth);
    text.push_str(inner);
    text.push_str(&")".repeat(depth));
    text
}

/// Joins `count` copies of `operand` with `op`, e.g. `1+1+1`.
pub fn chain(operand: char, op: char, count: usize) -> alloc::string::String {
    let mut text = alloc::string::String::new();
    for i in 0..count {
        if i > 0 {
            text.push(op);
        }
        text.push(operand);
    }
    text
}

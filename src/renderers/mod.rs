//! Implementations of [Renderer](crate::render::Renderer).

mod ascii_renderer;

pub use ascii_renderer::{AsciiRenderer, DEFAULT_INDENT_WIDTH};

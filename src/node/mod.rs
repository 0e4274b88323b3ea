//! Binary expression trees built from infix text.
//!
//! A tree is parsed once from text such as `(3+4)*2` into an arena of [tree::Node]s. Operands are
//! single letters or digits and become leaves; the four binary operators become internal nodes.
//! Once built, a tree can be [evaluated](crate::evaluate), [rendered](crate::render) and have
//! its leaves edited in place.

pub mod token;
pub mod tree;
pub mod traversal;
mod parser;

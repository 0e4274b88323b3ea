#![no_std]
extern crate core;
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod error;
pub mod node;
pub mod evaluate;
pub mod notation;
pub mod render;
pub mod renderers;
pub mod number;
pub mod session;

#[cfg(test)]
pub mod tests;

pub use crate::{
    number::Number,
    evaluate::Evaluable,
    node::{
        token::{Operator, Token, precedence},
        tree::{ExpressionTree, Node, NodeIndex},
    },
    session::{Session, Snapshot},
};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

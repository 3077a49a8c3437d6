//! Literal constant values stored in a node's payload slot.

use std::fmt;
use vela_mem::Symbol;

/// A literal or propagated constant attached to a [`Op::Literal`] node (and
/// to expression nodes the constant folder has already evaluated).
///
/// Stored in the node's shared payload slot via
/// [`Node::set_val`](crate::node::Node::set_val); a node never carries both
/// a `Val` and optimizer data.
///
/// [`Op::Literal`]: crate::op::Op::Literal
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    /// Boolean constant.
    Bool(bool),
    /// Integer constant.
    Int(i64),
    /// Floating-point constant.
    Float(f64),
    /// String constant, interned.
    Str(Symbol),
    /// Rune constant.
    Rune(char),
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::Bool(b) => write!(f, "{b}"),
            Val::Int(i) => write!(f, "{i}"),
            Val::Float(x) => write!(f, "{x}"),
            Val::Str(sym) => write!(f, "{sym}"),
            Val::Rune(c) => write!(f, "{c:?}"),
        }
    }
}

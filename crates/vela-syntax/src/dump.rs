//! Diagnostic tree printing.
//!
//! Backs internal-error reports and `-d` style pass debugging. The format
//! is for compiler developers only and is not stable. When a node has an
//! `orig` back-reference the original op is shown alongside the rewritten
//! one; `orig` never influences anything but printing.

use crate::arena::{NodeArena, NodeId};
use std::fmt::Write;

/// Renders the subtree at `root` as an indented multi-line listing.
///
/// Shared identity nodes are printed at each occurrence; the structure is
/// acyclic so this terminates.
#[must_use]
pub fn dump(arena: &NodeArena, root: NodeId) -> String {
    let mut out = String::new();
    line(arena, root, 0, &mut out);
    out
}

fn line(arena: &NodeArena, id: NodeId, depth: usize, out: &mut String) {
    let n = &arena[id];
    for _ in 0..depth {
        out.push_str(". ");
    }
    let _ = write!(out, "{}", n.op);
    if let Some(orig) = n.orig {
        let _ = write!(out, " (was {})", arena[orig].op);
    }
    if let Some(sym) = n.sym {
        let _ = write!(out, " {sym}");
    }
    if let Some(ty) = n.ty {
        let _ = write!(out, " {ty}");
    }
    if let Some(v) = n.val() {
        let _ = write!(out, " val({v})");
    }
    if n.xoffset != 0 {
        let _ = write!(out, " x({})", n.xoffset);
    }
    if !n.span.is_empty() {
        let _ = write!(out, " @{}", n.span);
    }
    out.push('\n');

    if let Some(left) = n.left {
        line(arena, left, depth + 1, out);
    }
    if let Some(right) = n.right {
        line(arena, right, depth + 1, out);
    }
    for (label, seq) in [
        ("ninit", &n.ninit),
        ("nbody", &n.nbody),
        ("list", &n.list),
        ("rlist", &n.rlist),
    ] {
        if seq.is_empty() {
            continue;
        }
        for _ in 0..=depth {
            out.push_str(". ");
        }
        let _ = writeln!(out, "{label}:");
        for &child in seq {
            line(arena, child, depth + 2, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::op::Op;
    use crate::span::Span;
    use crate::val::Val;
    use vela_mem::Symbol;

    #[test]
    fn test_dump_shape() {
        let mut arena = NodeArena::new();
        let x = arena.ident(Op::Name, Symbol::new(3), Span::new(0, 1));
        let three = arena.alloc(Node::literal(Span::none(), Val::Int(3)));
        let add = arena.alloc(Node::binary(Op::Add, Span::new(0, 5), x, three));

        let text = dump(&arena, add);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Add"));
        assert!(lines[1].contains("Name"));
        assert!(lines[1].contains("sym#3"));
        assert!(lines[2].contains("Literal"));
        assert!(lines[2].contains("val(3)"));
    }

    #[test]
    fn test_dump_shows_orig_and_lists() {
        let mut arena = NodeArena::new();
        let callee = arena.ident(Op::Name, Symbol::new(1), Span::none());
        let arg = arena.alloc(Node::literal(Span::none(), Val::Int(0)));

        let generic = arena.alloc(Node::unary(Op::Call, Span::none(), callee));
        let mut lowered = Node::unary(Op::CallFunc, Span::none(), callee);
        lowered.list.set1(arg);
        lowered.orig = Some(generic);
        let lowered = arena.alloc(lowered);

        let text = dump(&arena, lowered);
        assert!(text.contains("CallFunc (was Call)"));
        assert!(text.contains("list:"));
    }
}

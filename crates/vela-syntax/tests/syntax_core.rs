//! End-to-end checks of the syntax core: payload-slot discipline, the
//! sequence container's ownership transfers, and identity-node sharing
//! exercised the way the parser and rewriting passes use them together.

use vela_mem::Symbol;
use vela_syntax::{Node, NodeArena, Nodes, Op, Span, Val};

#[test]
fn fresh_node_reports_everything_absent() {
    let n = Node::new(Op::CallFunc, Span::none());
    assert!(n.val().is_none());
    assert!(n.opt().is_none());
    assert_eq!(n.ninit.len(), 0);
    assert_eq!(n.nbody.len(), 0);
    assert_eq!(n.list.len(), 0);
    assert_eq!(n.rlist.len(), 0);
}

#[test]
fn payload_slot_keeps_domains_apart() {
    // Value first, then optimizer data: fatal.
    let mut n = Node::new(Op::Literal, Span::none());
    n.set_val(Val::Int(1));
    assert_eq!(n.val(), Some(&Val::Int(1)));
    assert!(n.opt().is_none());
    assert!(
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            n.set_opt(Some(Box::new(0u8)));
        }))
        .is_err()
    );

    // Optimizer data first, then a value: fatal.
    let mut m = Node::new(Op::Name, Span::none());
    m.set_opt(Some(Box::new(7i32)));
    assert_eq!(m.opt().and_then(|x| x.downcast_ref::<i32>()), Some(&7));
    assert!(m.val().is_none());
    assert!(
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            m.set_val(Val::Int(1));
        }))
        .is_err()
    );
}

#[test]
fn clearing_optimizer_data_is_always_safe() {
    // On a fresh node.
    let mut n = Node::new(Op::Name, Span::none());
    n.set_opt(None);
    assert!(n.opt().is_none());

    // On a value-carrying node: the value survives untouched.
    n.set_val(Val::Bool(true));
    n.set_opt(None);
    assert_eq!(n.val(), Some(&Val::Bool(true)));

    // On an optimizer-carrying node: the annotation is dropped.
    let mut m = Node::new(Op::Name, Span::none());
    m.set_opt(Some(Box::new(3u64)));
    m.set_opt(None);
    assert!(m.opt().is_none());
}

#[test]
fn container_algebra() {
    let mut arena = NodeArena::new();
    let a = arena.alloc(Node::new(Op::Empty, Span::none()));
    let b = arena.alloc(Node::new(Op::Empty, Span::none()));
    let c = arena.alloc(Node::new(Op::Empty, Span::none()));

    let mut seq = Nodes::new();
    seq.append(&[a, b, c]);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.first(), a);
    assert_eq!(seq.second(), b);
    assert_eq!(seq.index(1), b);

    // Wholesale replacement with empty resets to the fresh state.
    seq.set(Vec::new());
    assert_eq!(seq.len(), 0);
    seq.append(&[c]);
    assert_eq!(seq.slice(), &[c]);
}

#[test]
fn container_ownership_transfers() {
    let mut arena = NodeArena::new();
    let x = arena.alloc(Node::new(Op::Empty, Span::none()));
    let y = arena.alloc(Node::new(Op::Empty, Span::none()));
    let z = arena.alloc(Node::new(Op::Empty, Span::none()));

    let mut src = Nodes::new();
    src.append(&[x, y]);
    let mut dst = Nodes::new();
    dst.move_from(&mut src);
    assert_eq!(dst.slice(), &[x, y]);
    assert_eq!(src.len(), 0);

    let mut tail = Nodes::new();
    tail.set1(z);
    dst.append_move_from(&mut tail);
    assert_eq!(dst.slice(), &[x, y, z]);
    assert_eq!(tail.len(), 0);
}

/// `a + 3` built from an identity node and a literal, traversed
/// generically, with a second expression reusing the identity node and
/// observing reference equality.
#[test]
fn binary_addition_shares_identity_nodes() {
    let mut arena = NodeArena::new();

    let x = arena.ident(Op::Name, Symbol::new(1), Span::new(0, 1));
    let three = arena.alloc(Node::literal(Span::new(4, 5), Val::Int(3)));
    let sum = arena.alloc(Node::binary(Op::Add, Span::new(0, 5), x, three));

    // Generic traversal reaches both children.
    let mut kids = Vec::new();
    arena.each_child(sum, &mut |c| kids.push(c));
    assert_eq!(kids, vec![x, three]);
    assert_eq!(arena[kids[0]].op, Op::Name);
    assert_eq!(arena[kids[1]].val(), Some(&Val::Int(3)));

    // A second addition reusing `a` gets the very same node.
    let one = arena.alloc(Node::literal(Span::none(), Val::Int(1)));
    let x_again = arena.ident(Op::Name, Symbol::new(1), Span::new(9, 10));
    let sum2 = arena.alloc(Node::binary(Op::Add, Span::none(), x_again, one));
    assert_eq!(arena[sum].left, arena[sum2].left);

    // Mutating the shared name is visible from both parents.
    arena[x].used = true;
    assert!(arena[arena[sum2].left.unwrap()].used);
}

#[test]
fn op_rewrite_in_place_keeps_children() {
    let mut arena = NodeArena::new();
    let callee = arena.ident(Op::Name, Symbol::new(2), Span::none());
    let arg = arena.alloc(Node::literal(Span::none(), Val::Int(0)));

    let mut call = Node::unary(Op::Call, Span::none(), callee);
    call.list.set1(arg);
    let call = arena.alloc(call);

    // Lower the generic call to a direct function call, the way the
    // typechecking pass does, keeping the established fields.
    let orig = arena.alloc(Node::unary(Op::Call, Span::none(), callee));
    {
        let n = &mut arena[call];
        n.op = Op::CallFunc;
        n.orig = Some(orig);
    }
    assert_eq!(arena[call].op, Op::CallFunc);
    assert_eq!(arena[call].left, Some(callee));
    assert_eq!(arena[call].list.first(), arg);

    let text = vela_syntax::dump(&arena, call);
    assert!(text.contains("CallFunc (was Call)"));
}

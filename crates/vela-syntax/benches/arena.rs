use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vela_mem::Symbol;
use vela_syntax::{Node, NodeArena, NodeId, Op, Span, Val};

/// Builds a left-leaning chain of additions over `n` shared names.
fn build_chain(arena: &mut NodeArena, n: u32) -> NodeId {
    let mut acc = arena.alloc(Node::literal(Span::none(), Val::Int(0)));
    for i in 0..n {
        let name = arena.ident(Op::Name, Symbol::new(i % 16), Span::none());
        acc = arena.alloc(Node::binary(Op::Add, Span::none(), acc, name));
    }
    acc
}

fn bench_alloc(c: &mut Criterion) {
    c.bench_function("alloc_1000_binary_nodes", |b| {
        b.iter(|| {
            let mut arena = NodeArena::with_capacity(2048);
            black_box(build_chain(&mut arena, black_box(1000)))
        });
    });
}

fn bench_walk(c: &mut Criterion) {
    let mut arena = NodeArena::with_capacity(2048);
    let root = build_chain(&mut arena, 1000);
    let needle = Symbol::new(999);

    c.bench_function("walk_1000_node_chain", |b| {
        b.iter(|| arena.any(black_box(root), &mut |n| n.sym == Some(needle)));
    });
}

criterion_group!(benches, bench_alloc, bench_walk);
criterion_main!(benches);

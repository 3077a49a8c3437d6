//! Index-based node storage.
//!
//! All nodes of a compilation unit live in one [`NodeArena`]; links between
//! them are [`NodeId`] indices rather than owned pointers. That makes the
//! DAG shape of the structure unremarkable: an identity node occupies one
//! slot and every use site stores the same index, so mutating it once is
//! visible from every parent, with no ownership cycles to fight.

use crate::ice;
use crate::node::Node;
use crate::op::Op;
use crate::span::Span;
use hashbrown::HashMap;
use std::fmt;
use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};
use vela_mem::Symbol;

/// Handle to a node in a [`NodeArena`].
///
/// Stored one-based so `Option<NodeId>` is a single word.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    fn from_index(index: usize) -> NodeId {
        let Some(raw) = u32::try_from(index + 1).ok().and_then(NonZeroU32::new) else {
            ice!("node arena exceeded {} nodes", u32::MAX - 1);
        };
        NodeId(raw)
    }

    /// Zero-based slot index in the owning arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.index())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index())
    }
}

/// Owns every node of one compilation unit.
///
/// Nodes are created continuously during parsing and rewriting and mutated
/// in place by later passes; nothing is ever freed individually. Identity
/// nodes (names, type names, imports) are interned per `(Op, Symbol)` via
/// [`NodeArena::ident`], which is what turns the tree into a DAG.
///
/// # Examples
///
/// ```
/// use vela_syntax::{NodeArena, Op, Span};
/// use vela_mem::Symbol;
///
/// let mut arena = NodeArena::new();
/// let x = arena.ident(Op::Name, Symbol::new(1), Span::none());
/// // Every later reference to the same name resolves to the same node.
/// assert_eq!(arena.ident(Op::Name, Symbol::new(1), Span::none()), x);
/// ```
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
    idents: HashMap<(Op, Symbol), NodeId>,
}

impl NodeArena {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            idents: HashMap::new(),
        }
    }

    /// Stores a node and returns its handle.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the identity node for `(op, sym)`, creating it on first use.
    ///
    /// This is the single point that upholds the sharing invariant: for a
    /// given symbol there is exactly one `Op::Name` node (likewise `Type`
    /// and `Pack`), and every use site holds its id. The span of the first
    /// occurrence wins. Fatal if `op` is not an identity form.
    pub fn ident(&mut self, op: Op, sym: Symbol, span: Span) -> NodeId {
        if !op.is_name() {
            ice!("ident called with non-identity op {op}");
        }
        if let Some(&id) = self.idents.get(&(op, sym)) {
            return id;
        }
        let mut node = Node::new(op, span);
        node.sym = Some(sym);
        let id = self.alloc(node);
        self.idents.insert((op, sym), id);
        vela_log::trace!("new identity node {id} for {op} {sym}");
        id
    }

    /// Returns the node behind `id`. Fatal if `id` belongs to another
    /// arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        match self.nodes.get(id.index()) {
            Some(node) => node,
            None => ice!("dangling {id:?} (arena holds {} nodes)", self.nodes.len()),
        }
    }

    /// Mutable counterpart of [`NodeArena::get`].
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.nodes.len();
        match self.nodes.get_mut(id.index()) {
            Some(node) => node,
            None => ice!("dangling {id:?} (arena holds {len} nodes)"),
        }
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Reports whether no nodes have been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.get(id)
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::val::Val;

    #[test]
    fn test_alloc_and_access() {
        let mut arena = NodeArena::new();
        assert!(arena.is_empty());

        let id = arena.alloc(Node::new(Op::Add, Span::new(1, 2)));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[id].op, Op::Add);

        arena[id].xoffset = 16;
        assert_eq!(arena.get(id).xoffset, 16);
    }

    #[test]
    fn test_ident_interning() {
        let mut arena = NodeArena::new();
        let x = arena.ident(Op::Name, Symbol::new(1), Span::new(0, 1));
        let y = arena.ident(Op::Name, Symbol::new(2), Span::new(2, 3));
        assert_ne!(x, y);

        // Same (op, sym) resolves to the same node; the first span wins.
        let x2 = arena.ident(Op::Name, Symbol::new(1), Span::new(9, 10));
        assert_eq!(x, x2);
        assert_eq!(arena[x].span, Span::new(0, 1));

        // Same symbol under a different identity op is a different node.
        let tx = arena.ident(Op::Type, Symbol::new(1), Span::none());
        assert_ne!(tx, x);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_shared_mutation_visible_everywhere() {
        let mut arena = NodeArena::new();
        let x = arena.ident(Op::Name, Symbol::new(7), Span::none());
        let use1 = arena.alloc(Node::unary(Op::Not, Span::none(), x));
        let lit = arena.alloc(Node::literal(Span::none(), Val::Int(1)));
        let use2 = arena.alloc(Node::binary(Op::Add, Span::none(), x, lit));

        // Resolve the name's type once...
        arena[x].ty = Some(crate::sem::TypeId::new(5));

        // ...and both use sites observe it through the shared id.
        let l1 = arena[use1].left.unwrap();
        let l2 = arena[use2].left.unwrap();
        assert_eq!(l1, l2);
        assert_eq!(arena[l1].ty, Some(crate::sem::TypeId::new(5)));
    }

    #[test]
    #[should_panic(expected = "internal compiler error")]
    fn test_ident_rejects_non_identity_op() {
        let mut arena = NodeArena::new();
        arena.ident(Op::Add, Symbol::new(1), Span::none());
    }

    #[test]
    #[should_panic(expected = "internal compiler error")]
    fn test_dangling_id_is_fatal() {
        let mut a = NodeArena::new();
        let mut b = NodeArena::new();
        a.alloc(Node::new(Op::Empty, Span::none()));
        let id = a.alloc(Node::new(Op::Empty, Span::none()));
        b.alloc(Node::new(Op::Empty, Span::none()));
        // `id` indexes past the end of `b`.
        let _ = &b[id];
    }
}

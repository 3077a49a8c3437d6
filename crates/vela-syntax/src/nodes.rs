//! The ordered, optionally-empty node sequence used for all list-shaped
//! node fields.

use crate::arena::NodeId;
use crate::ice;

/// An ordered sequence of node references, empty by default.
///
/// Every node carries four of these (`ninit`, `nbody`, `list`, `rlist`) and
/// most ops leave most of them empty, so the empty state holds no backing
/// storage: an unused field costs one pointer-sized word. A `Nodes` that has
/// been emptied is indistinguishable from one never populated.
///
/// Positional access past the end is an internal compiler error and aborts;
/// out-of-range indices always mean a pass bug, never recoverable input.
///
/// # Examples
///
/// ```
/// use vela_syntax::{Node, NodeArena, Nodes, Op, Span};
///
/// let mut arena = NodeArena::new();
/// let a = arena.alloc(Node::new(Op::Empty, Span::none()));
/// let b = arena.alloc(Node::new(Op::Empty, Span::none()));
///
/// let mut seq = Nodes::default();
/// assert_eq!(seq.len(), 0);
/// seq.append(&[a, b]);
/// assert_eq!(seq.len(), 2);
/// assert_eq!(seq.first(), a);
/// assert_eq!(seq.second(), b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Nodes {
    slice: Option<Box<Vec<NodeId>>>,
}

impl Nodes {
    /// Creates an empty sequence. Allocates nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { slice: None }
    }

    /// Returns the elements as a slice; empty if never populated.
    #[must_use]
    pub fn slice(&self) -> &[NodeId] {
        match &self.slice {
            Some(v) => v,
            None => &[],
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slice().len()
    }

    /// Reports whether the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `i`th element. Fatal if out of range.
    #[must_use]
    pub fn index(&self, i: usize) -> NodeId {
        match self.slice().get(i) {
            Some(&id) => id,
            None => ice!("Nodes::index({i}) out of range (len {})", self.len()),
        }
    }

    /// Returns the first element. Fatal if empty.
    #[must_use]
    pub fn first(&self) -> NodeId {
        self.index(0)
    }

    /// Returns the second element. Fatal if shorter than two.
    #[must_use]
    pub fn second(&self) -> NodeId {
        self.index(1)
    }

    /// Replaces the `i`th element. Fatal if out of range.
    pub fn set_index(&mut self, i: usize, node: NodeId) {
        *self.addr(i) = node;
    }

    /// Returns a mutable handle to slot `i` for in-place rewriting. Fatal if
    /// out of range.
    pub fn addr(&mut self, i: usize) -> &mut NodeId {
        let len = self.len();
        match self.slice.as_deref_mut().and_then(|v| v.get_mut(i)) {
            Some(slot) => slot,
            None => ice!("Nodes::addr({i}) out of range (len {len})"),
        }
    }

    /// Replaces the contents wholesale, taking ownership of `s`. An empty
    /// input resets to the storage-free state.
    pub fn set(&mut self, s: Vec<NodeId>) {
        self.slice = if s.is_empty() { None } else { Some(Box::new(s)) };
    }

    /// Contents become exactly `[node]`.
    pub fn set1(&mut self, node: NodeId) {
        self.slice = Some(Box::new(vec![node]));
    }

    /// Appends one element, allocating backing storage on first use.
    pub fn push(&mut self, node: NodeId) {
        match &mut self.slice {
            Some(v) => v.push(node),
            None => self.slice = Some(Box::new(vec![node])),
        }
    }

    /// Appends the given elements in order. Appending none is a no-op and
    /// allocates nothing.
    pub fn append(&mut self, nodes: &[NodeId]) {
        if nodes.is_empty() {
            return;
        }
        match &mut self.slice {
            Some(v) => v.extend_from_slice(nodes),
            None => self.slice = Some(Box::new(nodes.to_vec())),
        }
    }

    /// Takes ownership of `other`'s contents, dropping any existing
    /// contents of `self`. `other` is empty afterward.
    pub fn move_from(&mut self, other: &mut Nodes) {
        self.slice = other.slice.take();
    }

    /// Contents become `self ++ other`, in that order; `other` is empty
    /// afterward. Reuses `other`'s storage when `self` had none.
    pub fn append_move_from(&mut self, other: &mut Nodes) {
        let Some(src) = other.slice.take() else {
            return;
        };
        match &mut self.slice {
            Some(dst) => dst.extend_from_slice(&src),
            None => self.slice = Some(src),
        }
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.slice().iter()
    }
}

impl<'a> IntoIterator for &'a Nodes {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::NodeArena;
    use crate::node::Node;
    use crate::op::Op;
    use crate::span::Span;

    fn ids(n: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        (0..n)
            .map(|_| arena.alloc(Node::new(Op::Empty, Span::none())))
            .collect()
    }

    #[test]
    fn test_fresh_is_empty() {
        let seq = Nodes::new();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert!(seq.slice().is_empty());
        assert_eq!(seq.iter().count(), 0);
    }

    #[test]
    fn test_append_and_access() {
        let v = ids(3);
        let mut seq = Nodes::new();
        seq.append(&v);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.first(), v[0]);
        assert_eq!(seq.second(), v[1]);
        assert_eq!(seq.index(2), v[2]);
        assert_eq!(seq.slice(), &v[..]);
    }

    #[test]
    fn test_append_nothing_is_noop() {
        let mut seq = Nodes::new();
        seq.append(&[]);
        assert!(seq.is_empty());
        // Still behaves as freshly constructed.
        let v = ids(1);
        seq.append(&v);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_set_and_reset() {
        let v = ids(2);
        let mut seq = Nodes::new();
        seq.set(v.clone());
        assert_eq!(seq.len(), 2);

        // Assigning empty resets to the uninitialized state.
        seq.set(Vec::new());
        assert_eq!(seq.len(), 0);
        seq.append(&v);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_set1() {
        let v = ids(1);
        let mut seq = Nodes::new();
        seq.set1(v[0]);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.first(), v[0]);
    }

    #[test]
    fn test_set_index_and_addr() {
        let v = ids(3);
        let mut seq = Nodes::new();
        seq.append(&[v[0], v[1]]);
        seq.set_index(1, v[2]);
        assert_eq!(seq.index(1), v[2]);

        *seq.addr(0) = v[1];
        assert_eq!(seq.first(), v[1]);
    }

    #[test]
    fn test_move_from() {
        let v = ids(2);
        let mut src = Nodes::new();
        src.append(&v);
        let mut dst = Nodes::new();
        dst.move_from(&mut src);
        assert_eq!(dst.slice(), &v[..]);
        assert_eq!(src.len(), 0);
    }

    #[test]
    fn test_append_move_from() {
        let v = ids(3);
        let mut dst = Nodes::new();
        dst.append(&[v[0], v[1]]);
        let mut src = Nodes::new();
        src.set1(v[2]);

        dst.append_move_from(&mut src);
        assert_eq!(dst.slice(), &v[..]);
        assert_eq!(src.len(), 0);

        // Moving from an empty source leaves the destination untouched.
        let mut empty = Nodes::new();
        dst.append_move_from(&mut empty);
        assert_eq!(dst.len(), 3);

        // Moving into an empty destination adopts the source storage.
        let mut adopted = Nodes::new();
        adopted.append_move_from(&mut dst);
        assert_eq!(adopted.slice(), &v[..]);
        assert_eq!(dst.len(), 0);
    }

    #[test]
    #[should_panic(expected = "internal compiler error")]
    fn test_index_out_of_range_empty() {
        Nodes::new().index(0);
    }

    #[test]
    #[should_panic(expected = "internal compiler error")]
    fn test_index_out_of_range_populated() {
        let v = ids(2);
        let mut seq = Nodes::new();
        seq.append(&v);
        seq.index(2);
    }

    #[test]
    #[should_panic(expected = "internal compiler error")]
    fn test_addr_out_of_range() {
        Nodes::new().addr(0);
    }

    #[test]
    #[should_panic(expected = "internal compiler error")]
    fn test_second_on_singleton() {
        let v = ids(1);
        let mut seq = Nodes::new();
        seq.set1(v[0]);
        seq.second();
    }
}

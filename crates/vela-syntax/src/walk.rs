//! Generic structural traversal.
//!
//! These walks follow only the six shape fields and therefore work for
//! every [`Op`](crate::op::Op); passes that need op-specific interpretation
//! layer it on top. Because identity nodes are shared, a walk may reach the
//! same node once per referencing parent; walks here never assume
//! single-parent ownership.

use crate::arena::{NodeArena, NodeId};
use crate::node::Node;

impl NodeArena {
    /// Calls `f` once for each direct child of `id`, in shape-field order:
    /// `left`, `right`, then the `ninit`, `nbody`, `list`, `rlist`
    /// sequences.
    pub fn each_child<F: FnMut(NodeId)>(&self, id: NodeId, f: &mut F) {
        let n = &self[id];
        if let Some(left) = n.left {
            f(left);
        }
        if let Some(right) = n.right {
            f(right);
        }
        for seq in [&n.ninit, &n.nbody, &n.list, &n.rlist] {
            for &child in seq {
                f(child);
            }
        }
    }

    /// Pre-order traversal from `root`. `f` is called with each reachable
    /// node id; returning `false` prunes that node's subtree.
    pub fn inspect<F: FnMut(&NodeArena, NodeId) -> bool>(&self, root: NodeId, f: &mut F) {
        if !f(self, root) {
            return;
        }
        let mut children = Vec::new();
        self.each_child(root, &mut |c| children.push(c));
        for child in children {
            self.inspect(child, f);
        }
    }

    /// Reports whether any node in the subtree at `root` satisfies `pred`.
    ///
    /// The canonical generic query, e.g. "does this subtree reference
    /// symbol X". Short-circuits on the first hit.
    pub fn any<F: FnMut(&Node) -> bool>(&self, root: NodeId, pred: &mut F) -> bool {
        let mut found = false;
        self.inspect(root, &mut |arena, id| {
            if found {
                return false;
            }
            if pred(&arena[id]) {
                found = true;
                return false;
            }
            true
        });
        found
    }
}

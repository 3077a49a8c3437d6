//! Naming side-table attached to identity nodes.

use crate::arena::NodeId;
use crate::sem::{FieldId, PkgId};

/// Fields used only by named nodes ([`Op::Name`], [`Op::Pack`], and some
/// [`Op::Literal`]).
///
/// Owned exclusively by the node it is attached to. Most nodes are not
/// names, so this lives behind `Option<Box<Name>>` on the node and costs
/// nothing elsewhere.
///
/// [`Op::Name`]: crate::op::Op::Name
/// [`Op::Pack`]: crate::op::Op::Pack
/// [`Op::Literal`]: crate::op::Op::Literal
#[derive(Debug, Default)]
pub struct Name {
    /// Real package node for a name pulled in by a dot-import.
    pub pack: Option<NodeId>,
    /// Package handle, for [`Op::Pack`](crate::op::Op::Pack) nodes.
    pub pkg: Option<PkgId>,
    /// Temporary holding the heap address of a promoted parameter.
    pub heapaddr: Option<NodeId>,
    /// Substitute name while the enclosing call is being inlined.
    pub inlvar: Option<NodeId>,
    /// The initializing assignment, when there is one.
    pub defn: Option<NodeId>,
    /// Enclosing function, for local variables.
    pub curfn: Option<NodeId>,
    /// Parameter-binding metadata, present only on parameter names.
    pub param: Option<Box<Param>>,
    /// Declaration loop depth; increases for every enclosing loop or label.
    pub decldepth: i32,
    /// Per-function ordinal making the name unique within its function.
    pub vargen: i32,
    /// Value of `iota` at the declaration site, for constants.
    pub iota: i32,
    /// Nesting depth of the declaring function.
    pub funcdepth: i32,
    /// Name is the callee of a method call.
    pub method: bool,
    /// Name may not be assigned to.
    pub readonly: bool,
    /// Variable is captured by a closure.
    pub captured: bool,
    /// Captured by value rather than by reference.
    pub byval: bool,
    /// Contains pointers and must be zeroed on function entry.
    pub needzero: bool,
    /// Keep the value live across opaque calls.
    pub keepalive: bool,
}

impl Name {
    /// Creates an empty naming record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Parameter-binding metadata, linking a stack-resident parameter to its
/// heap-promoted or closure-captured counterparts.
///
/// Owned by the [`Name`] of a parameter node.
#[derive(Debug, Default)]
pub struct Param {
    /// Declared type expression of the parameter.
    pub ntype: Option<NodeId>,
    /// Expression copied into the closure for a captured variable.
    pub outerexpr: Option<NodeId>,
    /// Stand-in node referring to the stack copy of a promoted parameter.
    pub stackparam: Option<NodeId>,
    /// Descriptor of the parameter's slot in the argument struct.
    pub field: Option<FieldId>,
    /// The corresponding reference in the next enclosing closure.
    pub outer: Option<NodeId>,
    /// Link between the heap-promoted name and its closure reference.
    pub closure: Option<NodeId>,
}

impl Param {
    /// Creates an empty parameter record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let name = Name::new();
        assert!(name.pack.is_none());
        assert!(name.param.is_none());
        assert_eq!(name.decldepth, 0);
        assert!(!name.captured);

        let param = Param::new();
        assert!(param.ntype.is_none());
        assert!(param.closure.is_none());
    }
}

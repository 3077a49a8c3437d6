//! Function side-table attached to function-like nodes.

use crate::arena::NodeId;
use crate::nodes::Nodes;
use crate::sem::Pragma;
use hashbrown::HashSet;
use vela_mem::Symbol;

/// Fields used only by function-like nodes ([`Op::DclFunc`] and
/// [`Op::Closure`]).
///
/// Owned exclusively by the node it is attached to, behind
/// `Option<Box<Func>>`.
///
/// [`Op::DclFunc`]: crate::op::Op::DclFunc
/// [`Op::Closure`]: crate::op::Op::Closure
#[derive(Debug, Default)]
pub struct Func {
    /// Method shorthand name, for method declarations.
    pub shortname: Option<NodeId>,
    /// Statements run on entry, e.g. allocation and initialization of
    /// escaping parameters.
    pub enter: Nodes,
    /// Statements run on exit.
    pub exit: Nodes,
    /// Closure-captured variables.
    pub cvars: Nodes,
    /// Declarations local to this function or closure.
    pub dcl: Vec<NodeId>,
    /// Copy of `dcl` kept for inlining into call sites.
    pub inldcl: Nodes,
    /// Generation counter for closures created inside this function.
    pub closgen: u32,
    /// Function lexically enclosing this one.
    pub outerfunc: Option<NodeId>,
    /// Symbols whose field accesses are tracked for the linker.
    pub field_track: HashSet<Symbol>,
    /// Outer reference chain for closure variables.
    pub outer: Option<NodeId>,
    /// Signature type expression.
    pub ntype: Option<NodeId>,
    /// Evaluation context the function literal appears in.
    pub top: i32,
    /// Link between a closure and its compiled declaration.
    pub closure: Option<NodeId>,
    /// Function the closure body is being compiled within.
    pub curfn: Option<NodeId>,
    /// The function's name node.
    pub nname: Option<NodeId>,

    /// Cached copy of the body for inlining; empty when not inlinable.
    pub inl: Nodes,
    /// Estimated cost of inlining a call to this function.
    pub inl_cost: i32,
    /// Loop nesting depth, for inlining heuristics.
    pub depth: i32,

    /// Source end of the body, for diagnostics.
    pub end_span: crate::span::Span,
    /// Position of the first write barrier emitted in the body.
    pub wb_span: crate::span::Span,

    /// Source pragma annotations.
    pub pragma: Pragma,
    /// Duplicate definitions of this function are permitted.
    pub dupok: bool,
    /// Function is a generated method wrapper.
    pub wrapper: bool,
    /// Body uses the closure context register.
    pub needctxt: bool,
    /// Body reaches methods through runtime reflection.
    pub reflect_method: bool,
}

impl Func {
    /// Creates an empty function record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

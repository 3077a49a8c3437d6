//! The syntax node itself.

use crate::arena::NodeId;
use crate::func::Func;
use crate::ice;
use crate::name::Name;
use crate::nodes::Nodes;
use crate::op::Op;
use crate::sem::{Class, EType, TypeId};
use crate::span::Span;
use crate::val::Val;
use std::any::Any;
use std::fmt;
use vela_mem::Symbol;

/// A single node in the syntax structure.
///
/// One physical shape stands for every grammar form: the six tree-shape
/// fields (`left`, `right` and the four [`Nodes`] sequences) are reused
/// across ops, and the [`Op`] discriminant decides which of them are
/// populated and what they mean (the convention is documented on each `Op`
/// variant). Generic recursive walks follow only the shape fields and work
/// for every op; op-specific passes additionally read the side-tables.
///
/// The structure is a DAG rather than a tree: for a given variable `x`
/// there is only one node with [`Op::Name`], referenced from every use
/// site, and likewise for [`Op::Type`] and [`Op::Literal`] identity nodes.
/// Walks must tolerate reaching the same node through multiple parents.
///
/// A single private payload slot holds at most one of a literal [`Val`] or
/// a pass-private optimizer annotation; see [`Node::set_val`] and
/// [`Node::set_opt`] for the discipline.
#[derive(Debug)]
pub struct Node {
    // Tree shape. Generic recursive walks follow these six fields.
    /// First child link; operand or condition position for most ops.
    pub left: Option<NodeId>,
    /// Second child link.
    pub right: Option<NodeId>,
    /// Initialization statements hoisted before the node.
    pub ninit: Nodes,
    /// Block body.
    pub nbody: Nodes,
    /// Generic operand/clause list; meaning fixed by `op`.
    pub list: Nodes,
    /// Second operand/clause list; meaning fixed by `op`.
    pub rlist: Nodes,

    /// Resolved type. Shared with every other node of the same type.
    pub ty: Option<TypeId>,
    /// Pre-rewrite form of this node. Diagnostics and printing only, never
    /// semantics.
    pub orig: Option<NodeId>,

    /// Function metadata; present only on function-like nodes.
    pub func: Option<Box<Func>>,
    /// Naming metadata; present only on identity nodes.
    pub name: Option<Box<Name>>,

    /// Symbol this node refers to, for ops that name something.
    pub sym: Option<Symbol>,

    // Shared value/optimizer payload; see `set_val` and `set_opt`.
    extra: Extra,

    /// Structural offset whose meaning varies by op: stack slot for names,
    /// field offset for dot forms, placement tag for `XFall`.
    pub xoffset: i64,

    /// Source position.
    pub span: Span,

    /// Machine register, for [`Op::Register`] and [`Op::IndReg`].
    pub reg: i16,

    /// Escape-analysis classification.
    pub esc: u16,

    /// Grammar-role discriminant.
    pub op: Op,

    /// Sethi-Ullman register estimate.
    pub ullman: u8,
    /// Operand is directly addressable.
    pub addable: bool,
    /// Secondary tag: operator for `AsOp`/`CmpStr`/`CmpIface`, element
    /// type for `Type`.
    pub etype: EType,
    /// Bounds check proven unnecessary.
    pub bounded: bool,
    /// Storage class of the declared name.
    pub class: Class,
    /// Declares an embedded field.
    pub embedded: bool,
    /// Assignment came from a short declaration.
    pub colas: bool,
    /// An error mentioning this node was already reported.
    pub diag: bool,
    /// Arguments of this call do not escape.
    pub noescape: bool,
    /// Progress marker for declaration walking.
    pub walkdef: u8,
    /// Progress marker for type checking.
    pub typecheck: u8,
    /// Declared in the current compilation unit.
    pub local: bool,
    /// Progress marker for static-data layout.
    pub dodata: u8,
    /// Progress marker for initialization ordering.
    pub init_order: u8,
    /// Name is referenced at least once.
    pub used: bool,
    /// Final argument is variadic.
    pub is_ddd: bool,
    /// Node was synthesized rather than written in source.
    pub implicit: bool,
    /// Address of the variable is taken, even if it stays on the stack.
    pub addr_taken: bool,
    /// Variable is assigned after declaration.
    pub assigned: bool,
    /// Branch-likeliness hint for `If`.
    pub likely: i8,
    /// Loop body contains a `break`.
    pub has_break: bool,
    /// `NO_INTERFACE` pragma was applied to this declaration.
    pub no_interface: bool,
}

/// The shared payload slot. Literal values and optimizer annotations never
/// coexist on one node, so one slot serves both; the variant records which
/// domain has claimed it. `Opt(None)` means the optimizer domain claimed
/// the slot and later cleared it, which still excludes values.
enum Extra {
    None,
    Val(Val),
    Opt(Option<Box<dyn Any>>),
}

impl fmt::Debug for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extra::None => f.write_str("None"),
            Extra::Val(v) => f.debug_tuple("Val").field(v).finish(),
            Extra::Opt(Some(_)) => f.write_str("Opt(..)"),
            Extra::Opt(None) => f.write_str("Opt(cleared)"),
        }
    }
}

impl Node {
    /// Creates a node with the given op and position and every other field
    /// empty. The caller establishes whatever fields the op requires.
    #[must_use]
    pub fn new(op: Op, span: Span) -> Node {
        Node {
            left: None,
            right: None,
            ninit: Nodes::new(),
            nbody: Nodes::new(),
            list: Nodes::new(),
            rlist: Nodes::new(),
            ty: None,
            orig: None,
            func: None,
            name: None,
            sym: None,
            extra: Extra::None,
            xoffset: 0,
            span,
            reg: 0,
            esc: 0,
            op,
            ullman: 0,
            addable: false,
            etype: EType::default(),
            bounded: false,
            class: Class::Unset,
            embedded: false,
            colas: false,
            diag: false,
            noescape: false,
            walkdef: 0,
            typecheck: 0,
            local: false,
            dodata: 0,
            init_order: 0,
            used: false,
            is_ddd: false,
            implicit: false,
            addr_taken: false,
            assigned: false,
            likely: 0,
            has_break: false,
            no_interface: false,
        }
    }

    /// Creates a two-operand expression node with `left` and `right` bound.
    #[must_use]
    pub fn binary(op: Op, span: Span, left: NodeId, right: NodeId) -> Node {
        let mut n = Node::new(op, span);
        n.left = Some(left);
        n.right = Some(right);
        n
    }

    /// Creates a one-operand expression node with `left` bound.
    #[must_use]
    pub fn unary(op: Op, span: Span, left: NodeId) -> Node {
        let mut n = Node::new(op, span);
        n.left = Some(left);
        n
    }

    /// Creates a literal node carrying `v` in its value slot.
    #[must_use]
    pub fn literal(span: Span, v: Val) -> Node {
        let mut n = Node::new(Op::Literal, span);
        n.set_val(v);
        n
    }

    /// Returns the literal value, or `None` unless the value domain holds
    /// the payload slot. Never fails.
    #[must_use]
    pub fn val(&self) -> Option<&Val> {
        match &self.extra {
            Extra::Val(v) => Some(v),
            _ => None,
        }
    }

    /// Stores a literal value in the payload slot.
    ///
    /// Fatal if the slot has been claimed by optimizer data: the two kinds
    /// never legitimately meet on one node, and overwriting silently would
    /// hand a later pass the wrong payload kind.
    pub fn set_val(&mut self, v: Val) {
        if let Extra::Opt(_) = self.extra {
            ice!("set_val on {} node at {} that carries optimizer data", self.op, self.span);
        }
        self.extra = Extra::Val(v);
    }

    /// Returns the optimizer annotation, or `None` unless the optimizer
    /// domain holds the payload slot. Never fails.
    #[must_use]
    pub fn opt(&self) -> Option<&dyn Any> {
        match &self.extra {
            Extra::Opt(Some(x)) => Some(x.as_ref()),
            _ => None,
        }
    }

    /// Stores or clears the pass-private optimizer annotation.
    ///
    /// `set_opt(None)` is always a silent no-op/clear regardless of the
    /// slot's state, so cleanup code can run unconditionally; it drops an
    /// existing annotation but keeps the optimizer domain's claim, and it
    /// never disturbs a stored value. `set_opt(Some(_))` is fatal if the
    /// slot holds a literal value.
    pub fn set_opt(&mut self, x: Option<Box<dyn Any>>) {
        match x {
            None => {
                if let Extra::Opt(slot) = &mut self.extra {
                    *slot = None;
                }
            }
            Some(data) => {
                if let Extra::Val(_) = self.extra {
                    ice!("set_opt on {} node at {} that carries a value", self.op, self.span);
                }
                self.extra = Extra::Opt(Some(data));
            }
        }
    }
}

//! Operation codes classifying every syntax node.
//!
//! [`Op`] is the discriminant of [`Node`](crate::node::Node): a closed,
//! totally ordered tag naming the grammar form a node stands for. The doc
//! comment on each variant records which generic node fields that form
//! populates and what they mean; nothing enforces the convention at the type
//! level, so it is a contract between the passes, backed by tests.
//!
//! Variants are declared category by category (names, expressions,
//! statements, type forms, misc, registers, arch-specific pseudo-ops) and
//! [`Op::category`] relies on that declaration order.

use std::fmt;

/// Grammar-role tag of a syntax node.
///
/// Pure classification: `Op` carries no behavior beyond category predicates.
/// Passes match on it exhaustively and may rewrite a node's `Op` in place as
/// a typed transformation (for example lowering `Call` into `CallFunc`), in
/// which case the rewriting pass must establish the fields the new `Op`
/// requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Op {
    /// A node whose kind has not been decided yet.
    #[default]
    Invalid,

    // Names.
    /// Variable, constant, or function name. Identity node: one per symbol.
    Name,
    /// Unnamed argument or return value: `f(int, string) (int, error)`.
    NoName,
    /// Type name. Identity node: one per symbol.
    Type,
    /// Import reference. Identity node: one per symbol.
    Pack,
    /// Literal; the constant lives in the node's value slot.
    Literal,

    // Expressions.
    /// `left + right`.
    Add,
    /// `left - right`.
    Sub,
    /// `left | right`.
    Or,
    /// `left ^ right`.
    Xor,
    /// String concatenation; `list` holds the string operands.
    AddStr,
    /// `&left`.
    Addr,
    /// `left && right`.
    AndAnd,
    /// `append(list)`.
    Append,
    /// Conversion of a byte array to string; the operand is `left`.
    ArrayByteStr,
    /// Like [`Op::ArrayByteStr`] but the result is ephemeral.
    ArrayByteStrTmp,
    /// Conversion of a rune array to string; the operand is `left`.
    ArrayRuneStr,
    /// Conversion of a string to byte array; the operand is `left`.
    StrArrayByte,
    /// Like [`Op::StrArrayByte`] but the result is ephemeral.
    StrArrayByteTmp,
    /// Conversion of a string to rune array; the operand is `left`.
    StrArrayRune,
    /// `left = right`, or a short declaration when `colas` is set.
    As,
    /// `list = rlist` (multi-assign).
    As2,
    /// `list = rlist` where `rlist` is a single multi-value call.
    As2Func,
    /// `list = rlist` where `rlist` is a channel receive.
    As2Recv,
    /// `list = rlist` where `rlist` is a map read (`x, ok = m[k]`).
    As2MapRead,
    /// `list = rlist` where `rlist` is a type assertion (`x, ok = i.(T)`).
    As2DotType,
    /// `left op= right`; the operator is in `etype`.
    AsOp,
    /// `left = right` carrying a write barrier.
    AsWb,
    /// `left(list)`: call not yet resolved to function, method, or
    /// conversion.
    Call,
    /// `left(list)`: direct function call.
    CallFunc,
    /// `left(list)`: direct method call.
    CallMeth,
    /// `left(list)`: interface method call.
    CallInter,
    /// `left.right`: method value, not called.
    CallPart,
    /// `cap(left)`.
    Cap,
    /// `close(left)`.
    Close,
    /// Function literal; body and metadata hang off the `func` side-table.
    Closure,
    /// Interface comparison; the operator is in `etype`.
    CmpIface,
    /// String comparison; the operator is in `etype`.
    CmpStr,
    /// Composite literal not yet lowered to a specific form;
    /// `right` is the type expression, `list` the elements.
    CompLit,
    /// Composite literal with map type; elements in `list`.
    MapLit,
    /// Composite literal with struct type; elements in `list`.
    StructLit,
    /// Composite literal with array or slice type; elements in `list`.
    ArrayLit,
    /// `&left` where `left` is a composite literal.
    PtrLit,
    /// Type conversion of `left` to the node's type.
    Conv,
    /// Conversion of `left` to an interface type.
    ConvIface,
    /// Conversion of `left` that needs no representation change.
    ConvNop,
    /// `copy(left, right)`.
    Copy,
    /// Variable declaration of `left`.
    Dcl,

    // Declarations used during parsing; rewritten away before the middle
    // passes finish.
    /// Function or method declaration.
    DclFunc,
    /// Struct field, interface method, or parameter declaration.
    DclField,
    /// Constant declaration.
    DclConst,
    /// Type declaration.
    DclType,

    /// `delete(left, right)`.
    Delete,
    /// `left.sym` where `left` is a struct value.
    Dot,
    /// `left.sym` where `left` is a pointer to struct.
    DotPtr,
    /// `left.sym`: resolved non-interface method selection.
    DotMeth,
    /// `left.sym`: resolved interface method selection.
    DotInter,
    /// `left.sym` before resolution to one of the preceding dot forms.
    XDot,
    /// Type assertion `left.(T)`; `right` before resolution, the node's
    /// type once resolved.
    DotType,
    /// Type assertion on the rhs of [`Op::As2DotType`].
    DotType2,
    /// `left == right`.
    Eq,
    /// `left != right`.
    Ne,
    /// `left < right`.
    Lt,
    /// `left <= right`.
    Le,
    /// `left >= right`.
    Ge,
    /// `left > right`.
    Gt,
    /// `*left`.
    Ind,
    /// `left[right]` on an array or slice.
    Index,
    /// `left[right]` on a map.
    IndexMap,
    /// `left:right` pair in a literal or slice expression.
    Key,
    /// Stand-in name for the on-stack copy of an escaping parameter.
    Param,
    /// `len(left)`.
    Len,
    /// `make(list)` before lowering to one of the specific make forms.
    Make,
    /// `make(T, left)` for a channel type.
    MakeChan,
    /// `make(T, left)` for a map type.
    MakeMap,
    /// `make(T, left, right)` for a slice type.
    MakeSlice,
    /// `left * right`.
    Mul,
    /// `left / right`.
    Div,
    /// `left % right`.
    Mod,
    /// `left << right`.
    Lsh,
    /// `left >> right`.
    Rsh,
    /// `left & right`.
    And,
    /// `left &^ right`.
    AndNot,
    /// `new(left)`.
    New,
    /// `!left`.
    Not,
    /// `^left`.
    Com,
    /// `+left`.
    Plus,
    /// `-left`.
    Minus,
    /// `left || right`.
    OrOr,
    /// `panic(left)`.
    Panic,
    /// `print(list)`.
    Print,
    /// `println(list)`.
    PrintN,
    /// `(left)`.
    Paren,
    /// Channel send `left <- right`.
    Send,
    /// `left[lo:hi]` before the operand kind is known; `right` is a
    /// [`Op::Key`] pair holding the bounds.
    Slice,
    /// `left[lo:hi]` on an array.
    SliceArr,
    /// `left[lo:hi]` on a string.
    SliceStr,
    /// Three-index slice `left[lo:hi:cap]`; bounds as nested [`Op::Key`]
    /// pairs in `right`.
    Slice3,
    /// Three-index slice on an array.
    Slice3Arr,
    /// `recover()`.
    Recover,
    /// Channel receive `<-left`.
    Recv,
    /// Conversion of a rune to string; the operand is `left`.
    RuneStr,
    /// `left = <-right.left` as the guard of a select case.
    SelRecv,
    /// `list = <-right.left` (two results) as the guard of a select case.
    SelRecv2,
    /// The predeclared `iota`.
    Iota,
    /// `real(left)`.
    Real,
    /// `imag(left)`.
    Imag,
    /// `complex(left, right)`.
    Complex,

    // Statements.
    /// `{ list }`.
    Block,
    /// `break`; `left` is the label, if any.
    Break,
    /// `case list: nbody` after case processing; empty `list` means
    /// default.
    Case,
    /// `case list: nbody` before case processing.
    XCase,
    /// `continue`; `left` is the label, if any.
    Continue,
    /// `defer left` (`left` must be a call).
    Defer,
    /// Empty statement.
    Empty,
    /// `fallthrough` after processing.
    Fall,
    /// `fallthrough` before processing; `xoffset` validates placement.
    XFall,
    /// `for ninit; left; right { nbody }`.
    For,
    /// `goto left`.
    Goto,
    /// `if ninit; left { nbody } else { rlist }`.
    If,
    /// Label declaration `left:`.
    Label,
    /// Spawn statement `go left` (`left` must be a call).
    Proc,
    /// `for list = range right { nbody }`.
    Range,
    /// `return list`.
    Return,
    /// `select { list }`; `list` holds case nodes.
    Select,
    /// `switch ninit; left { list }`; `list` holds case nodes.
    Switch,
    /// Type-switch guard `list = left.(type)`, appearing as the `left` of
    /// [`Op::Switch`].
    TypeSwitch,

    // Type expressions.
    /// Channel type.
    TChan,
    /// Map type.
    TMap,
    /// Struct type.
    TStruct,
    /// Interface type.
    TInter,
    /// Function type.
    TFunc,
    /// Array or slice type.
    TArray,

    // Misc.
    /// `...` in a signature, call, or array literal.
    Ddd,
    /// Argument slice materialized for a variadic call by escape analysis.
    DddArg,
    /// Intermediate representation of an inlined call.
    InlCall,
    /// Itable and data words of an empty-interface value.
    Eface,
    /// Itable word of an interface value.
    Itab,
    /// Base pointer of a slice or string.
    Sptr,
    /// Variable reference at the start of a closure body.
    ClosureVar,
    /// Reference to a C function pointer.
    CFunc,
    /// Emit a nil check of `left`.
    CheckNil,
    /// Marks a variable dead for liveness.
    VarKill,
    /// Marks a variable live across an opaque call.
    VarLive,

    // Registers.
    /// A machine register; the register number is in `reg`.
    Register,
    /// Indirect of a register plus offset (`xoffset`).
    IndReg,

    // Arch-specific pseudo-ops, introduced by instruction selection.
    /// Compare.
    Cmp,
    /// Decrement.
    Dec,
    /// Increment.
    Inc,
    /// Sign extend.
    Extend,
    /// High-half multiply.
    HMul,
    /// Left rotate.
    LRot,
    /// Right rotate through carry.
    RRotC,
    /// Return jumping to another function.
    RetJmp,
    /// Compare parity set (NaN check).
    Ps,
    /// Compare parity clear (NaN check).
    Pc,
    /// Hardware square root.
    Sqrt,
    /// Read the per-thread runtime pointer.
    GetG,
}

/// The broad grammar category an [`Op`] belongs to.
///
/// Every `Op` maps to exactly one category; passes that only care about the
/// shape of a node (expression vs. statement vs. type form) branch on this
/// instead of enumerating ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The [`Op::Invalid`] placeholder.
    Invalid,
    /// Identity forms: names, type names, imports, literals.
    Name,
    /// Expression forms.
    Expr,
    /// Statement forms.
    Stmt,
    /// Type expression forms.
    TypeExpr,
    /// Backend bookkeeping forms with no source counterpart.
    Misc,
    /// Register references.
    Register,
    /// Arch-specific pseudo-ops.
    ArchPseudo,
}

impl Op {
    /// Returns the category this op belongs to.
    ///
    /// Relies on the declaration order of the variants: each category is a
    /// contiguous run.
    pub const fn category(self) -> Category {
        let d = self as u8;
        if d == Op::Invalid as u8 {
            Category::Invalid
        } else if d <= Op::Literal as u8 {
            Category::Name
        } else if d <= Op::Complex as u8 {
            Category::Expr
        } else if d <= Op::TypeSwitch as u8 {
            Category::Stmt
        } else if d <= Op::TArray as u8 {
            Category::TypeExpr
        } else if d <= Op::VarLive as u8 {
            Category::Misc
        } else if d <= Op::IndReg as u8 {
            Category::Register
        } else {
            Category::ArchPseudo
        }
    }

    /// Reports whether this op is an identity form (name, type name,
    /// import, literal). Identity nodes are shared: one node per symbol.
    pub const fn is_name(self) -> bool {
        matches!(self.category(), Category::Name)
    }

    /// Reports whether this op is an expression form.
    pub const fn is_expr(self) -> bool {
        matches!(self.category(), Category::Expr)
    }

    /// Reports whether this op is a statement form.
    pub const fn is_stmt(self) -> bool {
        matches!(self.category(), Category::Stmt)
    }

    /// Reports whether this op is a type expression form.
    pub const fn is_type_expr(self) -> bool {
        matches!(self.category(), Category::TypeExpr)
    }

    /// Reports whether this op is a register reference or an arch-specific
    /// pseudo-op.
    pub const fn is_arch_pseudo(self) -> bool {
        matches!(self.category(), Category::Register | Category::ArchPseudo)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

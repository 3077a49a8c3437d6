//! Opaque handles into the collaborator subsystems.
//!
//! The syntax core stores references to the symbol table and type
//! representation but never constructs or interprets them; everything here
//! is an identity-only handle or a tag the owning subsystem assigns. Symbols
//! themselves are [`vela_mem::Symbol`].

use std::fmt;
use std::ops::BitOr;

/// Handle to a resolved type in the type-representation subsystem.
///
/// Shared, not owned: many nodes point at the same type object, and
/// resolving a type once updates every use site that holds its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(u32);

/// Handle to a package in the import table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PkgId(u32);

/// Handle to a struct-field descriptor in the type subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(u32);

macro_rules! raw_handle {
    ($name:ident) => {
        impl $name {
            /// Wraps a raw index assigned by the owning subsystem.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw index.
            #[must_use]
            pub const fn as_u32(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

raw_handle!(TypeId);
raw_handle!(PkgId);
raw_handle!(FieldId);

/// Storage class of a declared name, assigned during declaration processing.
///
/// The syntax core records the class on the node; what each class implies
/// for addressing is the backend's business. Promotion of an escaping local
/// to the heap is tracked on the [`Name`](crate::name::Name) side-table, not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Class {
    /// Not yet classified.
    #[default]
    Unset,
    /// Package-level (static) storage.
    Extern,
    /// Function-local automatic storage.
    Auto,
    /// Incoming parameter.
    Param,
    /// Result parameter.
    ParamOut,
    /// Closure reference to a parameter of an enclosing function.
    ParamRef,
    /// Function, not a data object.
    Func,
    /// Blank identifier; never materialized.
    Discard,
}

/// Element-type tag assigned by the type subsystem.
///
/// Opaque here. Doubles as operator storage on [`Op::AsOp`],
/// [`Op::CmpStr`], and [`Op::CmpIface`] nodes, where the owning pass packs
/// the comparison/assignment operator into it.
///
/// [`Op::AsOp`]: crate::op::Op::AsOp
/// [`Op::CmpStr`]: crate::op::Op::CmpStr
/// [`Op::CmpIface`]: crate::op::Op::CmpIface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EType(pub u8);

impl fmt::Display for EType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "etype({})", self.0)
    }
}

/// Function annotation flags parsed from source pragmas.
///
/// A small flag set; the syntax core stores it on the
/// [`Func`](crate::func::Func) side-table and passes test individual bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pragma(u16);

impl Pragma {
    /// No annotations.
    pub const NONE: Pragma = Pragma(0);
    /// Suppress interface method-table generation.
    pub const NO_INTERFACE: Pragma = Pragma(1 << 0);
    /// Exclude from race detector instrumentation.
    pub const NO_RACE: Pragma = Pragma(1 << 1);
    /// Omit the stack growth preamble.
    pub const NO_SPLIT: Pragma = Pragma(1 << 2);
    /// Never inline this function.
    pub const NO_INLINE: Pragma = Pragma(1 << 3);
    /// Must run on the system stack.
    pub const SYSTEM_STACK: Pragma = Pragma(1 << 4);
    /// Write barriers are forbidden in the body.
    pub const NO_WRITE_BARRIER: Pragma = Pragma(1 << 5);
    /// Write barriers are forbidden in the body and everything it calls.
    pub const NO_WRITE_BARRIER_REC: Pragma = Pragma(1 << 6);
    /// Pointer-typed uintptr arguments escape.
    pub const UINTPTR_ESCAPES: Pragma = Pragma(1 << 7);

    /// Reports whether every flag in `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Pragma) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the flags in `other`.
    pub fn insert(&mut self, other: Pragma) {
        self.0 |= other.0;
    }
}

impl BitOr for Pragma {
    type Output = Pragma;

    fn bitor(self, rhs: Pragma) -> Pragma {
        Pragma(self.0 | rhs.0)
    }
}

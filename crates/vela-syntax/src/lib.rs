//! In-memory syntax representation for the Vela compiler's middle layers.
//!
//! One node type, [`Node`], stands for every expression, statement,
//! declaration, and type form between parsing and code generation. The
//! grammar is large and heterogeneous, so instead of a field set per form
//! each node reuses a small set of generic fields (two child links, four
//! child sequences) whose meaning is fixed by the [`Op`] discriminant, and
//! optional side-tables ([`Name`], [`Func`]) carry role-specific attributes
//! for the few ops that need them.
//!
//! The structure is a DAG, not a tree: identity nodes (names, type names,
//! imports, literals) exist once per symbol and are referenced from every
//! use site, so resolving a symbol's type once updates all uses. Nodes live
//! in a [`NodeArena`] and reference each other through [`NodeId`] indices.
//!
//! Construction and mutation are single-threaded per compilation unit: the
//! passes run to completion one after another and rewrite nodes in place.
//! The structure provides no locking or copy-on-write; pass ordering is the
//! passes' contract. Parallel per-function compilation is safe only across
//! function subtrees that share nothing but a read-only-after-resolution
//! symbol and type table.
//!
//! # Modules
//!
//! - [`op`] - the [`Op`] discriminant and its categories
//! - [`node`] - the node itself and its payload-slot discipline
//! - [`nodes`] - the lazy node-sequence container
//! - [`name`], [`func`] - the optional side-tables
//! - [`arena`] - index-based node storage and identity interning
//! - [`walk`] - generic traversal over the shape fields
//! - [`val`] - literal constant values
//! - [`sem`] - opaque handles into the symbol/type collaborators
//! - [`dump`] - diagnostic tree printing
//! - [`span`] - compact source positions
//!
//! # Example
//!
//! ```
//! use vela_syntax::{Node, NodeArena, Op, Span, Val};
//! use vela_mem::Symbol;
//!
//! let mut arena = NodeArena::new();
//!
//! // a + 3
//! let a = arena.ident(Op::Name, Symbol::new(1), Span::new(0, 1));
//! let three = arena.alloc(Node::literal(Span::new(4, 5), Val::Int(3)));
//! let sum = arena.alloc(Node::binary(Op::Add, Span::new(0, 5), a, three));
//!
//! assert!(arena.any(sum, &mut |n| n.sym == Some(Symbol::new(1))));
//! ```

#![warn(missing_docs)]

pub mod arena;
pub mod dump;
mod fatal;
pub mod func;
pub mod name;
pub mod node;
pub mod nodes;
pub mod op;
pub mod sem;
pub mod span;
pub mod val;
pub mod walk;

#[doc(hidden)]
pub use vela_log;

pub use arena::{NodeArena, NodeId};
pub use dump::dump;
pub use func::Func;
pub use name::{Name, Param};
pub use node::Node;
pub use nodes::Nodes;
pub use op::{Category, Op};
pub use sem::{Class, EType, FieldId, PkgId, Pragma, TypeId};
pub use span::Span;
pub use val::Val;

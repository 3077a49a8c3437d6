//! Symbol interning for the Vela compiler frontend.
//!
//! Identifiers, type names, and string literals occur many times across a
//! compilation unit. The frontend interns each distinct spelling once and
//! passes around a 32-bit [`Symbol`] handle instead, so equality checks are
//! a single integer compare and syntax nodes stay small.
//!
//! # Modules
//!
//! - [`symbol`] - the `Symbol` handle type
//! - [`interner`] - the bidirectional string ↔ symbol table

#![warn(missing_docs)]

pub mod interner;
pub mod symbol;

pub use interner::StringInterner;
pub use symbol::Symbol;

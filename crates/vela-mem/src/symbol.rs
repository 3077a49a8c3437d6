//! The `Symbol` handle for interned strings.

use std::fmt;

/// A 32-bit handle naming one interned string.
///
/// Two symbols are equal exactly when the strings they were interned from
/// are equal, so symbol comparison never touches string data. The value
/// `u32::MAX` is reserved as an explicit "no symbol" sentinel for contexts
/// that need one (most code uses `Option<Symbol>` instead).
///
/// # Examples
///
/// ```
/// use vela_mem::Symbol;
///
/// let a = Symbol::new(7);
/// let b = Symbol::new(7);
/// assert_eq!(a, b);
/// assert_eq!(a.as_u32(), 7);
/// assert!(!a.is_invalid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Creates a symbol from a raw interner index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw interner index.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the raw interner index widened for slice indexing.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The reserved "no symbol" sentinel.
    #[must_use]
    pub const fn invalid() -> Self {
        Self(u32::MAX)
    }

    /// Reports whether this is the reserved sentinel.
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.0 == u32::MAX
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sym#{}", self.0)
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

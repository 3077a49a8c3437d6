//! Bidirectional string ↔ [`Symbol`] table.
//!
//! The interner owns every distinct string it has seen and hands out dense
//! [`Symbol`] indices. Interning the same spelling twice returns the same
//! symbol; resolving is an array index.
//!
//! # Examples
//!
//! ```
//! use vela_mem::StringInterner;
//!
//! let mut interner = StringInterner::new();
//! let x = interner.intern("x");
//! let y = interner.intern("y");
//! assert_ne!(x, y);
//! assert_eq!(interner.intern("x"), x);
//! assert_eq!(interner.resolve(x), Some("x"));
//! ```

use crate::symbol::Symbol;
use hashbrown::HashMap;

/// Interns strings, assigning each distinct spelling a dense [`Symbol`].
///
/// String data is stored once, in `strings`; the map holds the reverse
/// direction. Symbols are handed out in interning order starting at 0.
#[derive(Debug, Default)]
pub struct StringInterner {
    /// Symbol index → owned string data.
    strings: Vec<Box<str>>,

    /// String → symbol index.
    symbols: HashMap<Box<str>, Symbol>,
}

impl StringInterner {
    /// Creates an empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for `s`, interning it on first sight.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.symbols.get(s) {
            return sym;
        }
        let sym = Symbol::new(self.strings.len() as u32);
        self.strings.push(s.into());
        self.symbols.insert(s.into(), sym);
        sym
    }

    /// Returns the string `sym` was interned from, if `sym` came from this
    /// interner.
    #[must_use]
    pub fn resolve(&self, sym: Symbol) -> Option<&str> {
        self.strings.get(sym.as_usize()).map(|s| &**s)
    }

    /// Number of distinct strings interned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Reports whether nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_dedup() {
        let mut interner = StringInterner::new();
        let a = interner.intern("alpha");
        let b = interner.intern("beta");
        assert_ne!(a, b);
        assert_eq!(interner.intern("alpha"), a);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_resolve() {
        let mut interner = StringInterner::new();
        let a = interner.intern("alpha");
        assert_eq!(interner.resolve(a), Some("alpha"));
        assert_eq!(interner.resolve(Symbol::new(99)), None);
    }

    #[test]
    fn test_dense_ids() {
        let mut interner = StringInterner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.intern("a").as_u32(), 0);
        assert_eq!(interner.intern("b").as_u32(), 1);
        assert_eq!(interner.intern("a").as_u32(), 0);
    }

    #[test]
    fn test_empty_string() {
        let mut interner = StringInterner::new();
        let e = interner.intern("");
        assert_eq!(interner.resolve(e), Some(""));
        assert_eq!(interner.intern(""), e);
    }
}

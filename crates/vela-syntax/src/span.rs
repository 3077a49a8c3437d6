//! Compact source positions carried on every node.

use std::fmt;

/// A half-open byte range into the source of the compilation unit.
///
/// Positions are `u32` to keep the node footprint small; a unit is limited
/// to 4 GiB of source. Line and column are recovered from the unit's line
/// table by the diagnostics layer, not stored here.
///
/// # Examples
///
/// ```
/// use vela_syntax::Span;
///
/// let a = Span::new(0, 5);
/// let b = Span::new(8, 12);
/// assert_eq!(Span::merge(a, b), Span::new(0, 12));
/// assert_eq!(a.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first covered byte.
    pub start: u32,
    /// Byte offset one past the last covered byte.
    pub end: u32,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// The zero span, used for synthesized nodes with no source location.
    #[must_use]
    pub const fn none() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Number of bytes covered.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Reports whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns the smallest span covering both inputs.
    #[must_use]
    pub const fn merge(a: Span, b: Span) -> Span {
        Span {
            start: if a.start < b.start { a.start } else { b.start },
            end: if a.end > b.end { a.end } else { b.end },
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

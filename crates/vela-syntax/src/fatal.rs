//! Internal-compiler-error reporting.
//!
//! The syntax core has exactly two failure classes, both compiler bugs
//! rather than user errors: writing the wrong kind of payload into a node's
//! value/optimizer slot, and positional access past the end of a [`Nodes`]
//! sequence. Both abort compilation immediately through [`ice!`]; neither is
//! ever coerced into a recoverable result, because a pass that trips one has
//! already gone wrong and letting it continue would corrupt later passes.

/// Reports an internal compiler error and aborts.
///
/// The message is logged at error level with the calling module path, then
/// the process panics with the same text so the offending pass shows up in
/// the backtrace. Callers include enough context (op, span, attempted
/// operation) to locate the bug.
///
/// ```should_panic
/// use vela_syntax::ice;
///
/// ice!("node list index {} out of range", 7);
/// ```
#[macro_export]
macro_rules! ice {
    ($($arg:tt)*) => {{
        $crate::vela_log::error!("internal compiler error: {}", format_args!($($arg)*));
        panic!("internal compiler error: {}", format_args!($($arg)*));
    }};
}

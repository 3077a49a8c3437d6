//! Minimal leveled logging for the Vela compiler.
//!
//! Provides a process-global log level and a family of macros that capture
//! the calling module path. Output goes to stderr so compiler diagnostics on
//! stdout stay machine-readable.
//!
//! # Example
//!
//! ```
//! use vela_log::{debug, info, Level};
//!
//! vela_log::set_level(Level::Debug);
//!
//! let pass = "typecheck";
//! info!("starting {} pass", pass);
//! debug!("nodes visited: {}", 42);
//! ```

use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};

/// Severity of a log message, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Unrecoverable problems. Always shown.
    Error = 0,
    /// Suspicious conditions that do not stop compilation.
    Warn = 1,
    /// High-level progress messages.
    Info = 2,
    /// Per-pass diagnostic detail.
    Debug = 3,
    /// Very fine-grained tracing (per node, per instruction).
    Trace = 4,
}

impl Level {
    /// Upper-case name of the level, as printed in log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    const fn color(self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
            Level::Trace => "\x1b[35m",
        }
    }

    /// Parses a level name, case-insensitively.
    ///
    /// ```
    /// use vela_log::Level;
    ///
    /// assert_eq!(Level::parse("warn"), Some(Level::Warn));
    /// assert_eq!(Level::parse("TRACE"), Some(Level::Trace));
    /// assert_eq!(Level::parse("loud"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Level> {
        match s.to_ascii_uppercase().as_str() {
            "ERROR" => Some(Level::Error),
            "WARN" => Some(Level::Warn),
            "INFO" => Some(Level::Info),
            "DEBUG" => Some(Level::Debug),
            "TRACE" => Some(Level::Trace),
            _ => None,
        }
    }

    fn from_u8(v: u8) -> Level {
        match v {
            0 => Level::Error,
            1 => Level::Warn,
            2 => Level::Info,
            3 => Level::Debug,
            _ => Level::Trace,
        }
    }
}

/// Global minimum level. Messages below it are dropped.
static LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

/// Sets the global minimum log level.
pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Sets the global minimum log level from a string such as `"debug"`.
///
/// Returns an error naming the bad input, for surfacing in CLI flag parsing.
pub fn set_level_from_str(s: &str) -> Result<(), String> {
    match Level::parse(s) {
        Some(level) => {
            set_level(level);
            Ok(())
        }
        None => Err(format!("unknown log level: {s}")),
    }
}

/// Returns the current global minimum level.
pub fn level() -> Level {
    Level::from_u8(LEVEL.load(Ordering::Relaxed))
}

/// Reports whether a message at `level` would currently be emitted.
pub fn enabled(level: Level) -> bool {
    level as u8 <= LEVEL.load(Ordering::Relaxed)
}

/// Emits a formatted log line. Called by the macros, not directly.
#[doc(hidden)]
pub fn __emit(level: Level, target: &str, args: Arguments) {
    const RESET: &str = "\x1b[0m";

    if !enabled(level) {
        return;
    }
    eprintln!("{}[{}]{RESET} {target}: {args}", level.color(), level.as_str());
}

/// Logs a message at an explicit level, capturing the calling module path.
///
/// ```
/// use vela_log::{log, Level};
///
/// log!(level: Level::Info, "compiled {} functions", 3);
/// ```
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        if $crate::enabled($level) {
            $crate::__emit($level, module_path!(), format_args!($($arg)*));
        }
    };
}

/// Logs at [`Level::Error`].
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log!(level: $crate::Level::Error, $($arg)*) };
}

/// Logs at [`Level::Warn`].
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log!(level: $crate::Level::Warn, $($arg)*) };
}

/// Logs at [`Level::Info`].
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log!(level: $crate::Level::Info, $($arg)*) };
}

/// Logs at [`Level::Debug`].
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log!(level: $crate::Level::Debug, $($arg)*) };
}

/// Logs at [`Level::Trace`].
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => { $crate::log!(level: $crate::Level::Trace, $($arg)*) };
}

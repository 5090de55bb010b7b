//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output respects the quiet flag. Debug lines go to stderr so that values
//! printed on stdout stay pipeable into build scripts.
//!
//! Library code that wants to talk to the user takes a [`Log`] instead of
//! printing directly; the CLI hands it a [`ConsoleLog`].

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Promote `Normal` to `Debug` when verbose output was requested
    /// elsewhere (e.g. configuration). Quiet always wins.
    pub fn promote(self, verbose: bool) -> Self {
        match self {
            Verbosity::Normal if verbose => Verbosity::Debug,
            other => other,
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Sink for user-facing diagnostics emitted by library code.
pub trait Log: Send + Sync {
    /// A message only shown in verbose runs.
    fn debug(&self, message: &str);

    /// Something went wrong but the run continues.
    fn warn(&self, message: &str);
}

/// [`Log`] that writes to the console, gated by [`Verbosity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog {
    verbosity: Verbosity,
}

impl ConsoleLog {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

impl Log for ConsoleLog {
    fn debug(&self, message: &str) {
        debug(message, self.verbosity);
    }

    fn warn(&self, message: &str) {
        warn(message, self.verbosity);
    }
}

/// Format a yes/no flag for display.
pub fn format_flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

//! Console logger with tagged, colored output lines.

/// Line-oriented console logger.
///
/// Per-file outcomes and errors get a bracketed tag (`[OK]`, `[MISS]`,
/// `[ERROR]`); the tag carries the ANSI color so the line content stays
/// plain text. Errors go to stderr, everything else to stdout.
#[derive(Debug)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    /// Create a logger; `verbose` enables [`Logger::debug`] output.
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an `[ERROR]` line to stderr. Used for fatal and per-file errors.
    pub fn error(&self, msg: &str) {
        eprintln!("\x1b[31m[ERROR]\x1b[0m {msg}");
    }

    /// Print an `[OK]` line for a successful copy.
    pub fn ok(&self, msg: &str) {
        println!("\x1b[32m[OK]\x1b[0m {msg}");
    }

    /// Print a `[MISS]` line for a listed file absent from the source.
    pub fn miss(&self, msg: &str) {
        println!("\x1b[33m[MISS]\x1b[0m {msg}");
    }

    /// Print an untagged informational line.
    pub fn info(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print a dimmed detail line, only when verbose.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            println!("\x1b[2m{msg}\x1b[0m");
        }
    }
}

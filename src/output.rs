//! Terminal output formatting for the quotewall CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs and
//! a single-line progress bar. All status output goes to stderr.

use std::cell::Cell;
use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Number of cells in the progress bar.
const BAR_WIDTH: usize = 40;

/// Terminal-aware status printer.
///
/// Colour and the progress bar are enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
    interactive: bool,
    /// A progress line is on screen without a trailing newline.
    progress_open: Cell<bool>,
}

impl Printer {
    pub fn new() -> Self {
        let tty = io::stderr().is_terminal();
        Self {
            color: tty,
            interactive: tty,
            progress_open: Cell::new(false),
        }
    }

    /// A printer that never colours or draws progress.
    pub fn plain() -> Self {
        Self {
            color: false,
            interactive: false,
            progress_open: Cell::new(false),
        }
    }

    /// Print a status line with a green bold verb.
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Redraw the progress bar for item `done` of `total`.
    ///
    /// The bar is closed with a newline once `done == total`.
    pub fn progress(&self, done: usize, total: usize) {
        if !self.interactive || total == 0 {
            return;
        }

        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\r{}", progress_bar(done, total));
        let _ = stderr.flush();

        if done >= total {
            let _ = writeln!(stderr);
            self.progress_open.set(false);
        } else {
            self.progress_open.set(true);
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.progress_open.replace(false) {
            let _ = writeln!(stderr);
        }

        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a progress bar: `[=====-----] 3/10 (30.0%)`.
pub fn progress_bar(done: usize, total: usize) -> String {
    let done = done.min(total);
    let filled = if total == 0 { 0 } else { BAR_WIDTH * done / total };
    let percent = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    };

    format!(
        "[{}{}] {}/{} ({:.1}%)",
        "=".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        done,
        total,
        percent
    )
}

/// Pluralize a count: `plural(1, "wallpaper", "wallpapers")` → "1 wallpaper".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

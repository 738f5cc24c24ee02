//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Command results go to stdout; messages go to stderr.
pub(crate) struct Output {
    out: Term,
    term: Term,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            term: Term::stderr(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print a command result to stdout.
    pub(crate) fn result(&self, msg: &str) {
        let _ = self.out.write_line(msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}

//! Terminal size discovery.
//!
//! The progress bar asks a [`TerminalSize`] for the column count on every
//! render. A failed lookup is reported as `None` and treated as zero columns,
//! which makes the renderer fall back to its short textual form.

use console::Term;
use tracing::debug;

/// Source of the terminal dimensions used for layout.
pub trait TerminalSize {
    /// Returns `(columns, rows)`, or `None` when the size cannot be determined.
    fn size(&self) -> Option<(u16, u16)>;

    /// Number of columns, `0` when unknown.
    fn columns(&self) -> usize {
        match self.size() {
            Some((cols, _)) => cols as usize,
            None => {
                debug!("Terminal size unavailable, assuming 0 columns");
                0
            }
        }
    }
}

/// Queries the size of the terminal attached to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTerminal;

impl TerminalSize for ConsoleTerminal {
    fn size(&self) -> Option<(u16, u16)> {
        Term::stdout().size_checked().map(|(rows, cols)| (cols, rows))
    }
}

/// A terminal with fixed dimensions.
///
/// Handy when output is not going to a real terminal, or in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTerminal {
    /// Number of columns.
    pub columns: u16,
    /// Number of rows.
    pub rows: u16,
}

impl FixedTerminal {
    /// Create a terminal `columns` wide and one row high.
    pub fn new(columns: u16) -> Self {
        Self { columns, rows: 1 }
    }
}

impl TerminalSize for FixedTerminal {
    fn size(&self) -> Option<(u16, u16)> {
        Some((self.columns, self.rows))
    }
}

//! progresscli is a crate drawing simple, single-line progress bars that
//! redraw in place on the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use progresscli::ProgressBar;
//!
//! let mut bar = ProgressBar::new();
//! bar.set_label("Downloading");
//! bar.show();
//! for _ in 0..100 {
//!     bar.increment(1.0);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`bar`] - The [`ProgressBar`], its builder and state
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`progress`] - Glyph styles and the line renderer
//! - [`utils`] - Display-width measurement and terminal size discovery

pub mod bar;
pub mod error;
pub mod progress;
pub mod utils;

pub use bar::{BarConfig, ProgressBar, ProgressBarBuilder};
pub use error::{Error, Result};
pub use progress::{render, Frame, Style, StylePreset};
pub use utils::{display_width, ConsoleTerminal, FixedTerminal, TerminalSize};

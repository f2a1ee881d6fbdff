//! Shared utility functions.
//!
//! This module contains the helpers the renderer relies on for layout:
//!
//! - [`width`] - Display-width measurement ignoring ANSI escape sequences
//! - [`terminal`] - Terminal size discovery
//!
//! # Examples
//!
//! ## Measuring Colored Text
//!
//! ```rust
//! use progresscli::utils::display_width;
//!
//! let glyph = "\x1b[1;32m█\x1b[0m";
//! assert_eq!(display_width(glyph), 1);
//! ```
//!
//! ## Pinning the Terminal Width
//!
//! ```rust
//! use progresscli::utils::{FixedTerminal, TerminalSize};
//!
//! let terminal = FixedTerminal::new(80);
//! assert_eq!(terminal.columns(), 80);
//! ```

pub mod terminal;
pub mod width;

// Re-export commonly used utilities
pub use terminal::{ConsoleTerminal, FixedTerminal, TerminalSize};
pub use width::{display_width, strip_ansi};

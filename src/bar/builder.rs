//! Builder pattern implementation for creating ProgressBar instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use progresscli::ProgressBar;
//! use progresscli::progress::Style;
//!
//! let bar = ProgressBar::builder()
//!     .style(Style::line_no_color())
//!     .max(250.0)
//!     .label("Uploading")
//!     .build();
//! assert_eq!(bar.max(), 250.0);
//! ```
//!
//! ## Fixed Width Output
//!
//! ```rust
//! use progresscli::{ProgressBar, StylePreset};
//! use progresscli::utils::FixedTerminal;
//!
//! let mut bar = ProgressBar::builder()
//!     .preset(StylePreset::DefaultNoColor)
//!     .terminal(FixedTerminal::new(40))
//!     .max_width(30)
//!     .show_percentage_decimal(true)
//!     .build();
//! bar.show_in(std::io::sink());
//! bar.increment(12.5);
//! assert_eq!(bar.max_width(), 30);
//! ```

use super::bar::ProgressBar;
use super::config::BarConfig;
use crate::progress::{Style, StylePreset};
use crate::utils::{display_width, ConsoleTerminal, TerminalSize};

/// A builder used to create a [`ProgressBar`].
pub struct ProgressBarBuilder {
    config: BarConfig,
    terminal: Box<dyn TerminalSize>,
}

impl Default for ProgressBarBuilder {
    fn default() -> Self {
        Self {
            config: BarConfig::default(),
            terminal: Box::new(ConsoleTerminal),
        }
    }
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressBarBuilder::default()
    }

    /// Set the glyphs used to draw the bar.
    pub fn style(mut self, style: Style) -> Self {
        self.config.style = style;
        self
    }

    /// Use one of the named styles.
    pub fn preset(mut self, preset: StylePreset) -> Self {
        self.config.style = preset.style();
        self
    }

    /// Set the maximum value.
    pub fn max(mut self, max: f64) -> Self {
        self.config.max = max;
        self
    }

    /// Set the label. An empty label is hidden.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = label.into();
        self.config.show_label = display_width(&self.config.label) > 0;
        self
    }

    /// Display the percentage, or not.
    pub fn show_percentage(mut self, show: bool) -> Self {
        self.config.show_percentage = show;
        self
    }

    /// Display the percentage with two decimals. Also enables the percentage.
    pub fn show_percentage_decimal(mut self, show: bool) -> Self {
        if show {
            self.config.show_percentage = true;
        }
        self.config.show_percentage_decimal = show;
        self
    }

    /// Fix the width of the bar instead of following the terminal.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.config.max_width = max_width;
        self.config.use_custom_width = true;
        self
    }

    /// Query the terminal size from `terminal`.
    pub fn terminal(mut self, terminal: impl TerminalSize + 'static) -> Self {
        self.terminal = Box::new(terminal);
        self
    }

    /// Create the [`ProgressBar`]. It stays hidden until shown.
    pub fn build<'w>(self) -> ProgressBar<'w> {
        ProgressBar::from_parts(self.config, self.terminal)
    }
}

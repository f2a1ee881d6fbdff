//! The progress bar and its mutators.
//!
//! Every visible change goes through [`ProgressBar::increment`]. Setters update
//! the state and then call `increment(0.0)` so the line is redrawn without
//! moving the value. Before [`ProgressBar::show`] and after the bar finished,
//! `increment` does nothing.

use super::builder::ProgressBarBuilder;
use super::config::BarConfig;
use crate::progress::{self, render, Frame, Style};
use crate::utils::{display_width, ConsoleTerminal, TerminalSize};
use crate::Result;

use std::fmt;
use std::io::{self, Write};
use tracing::{debug, warn};

/// A single-line progress bar redrawn in place.
///
/// The bar is driven entirely by its caller: nothing is drawn until
/// [`show`](ProgressBar::show) or [`show_in`](ProgressBar::show_in), and each
/// later call redraws synchronously.
///
/// The output sink is only borrowed for `'w`: pass `&mut writer` to keep
/// ownership of it, the bar never closes it.
///
/// ```rust
/// use progresscli::ProgressBar;
///
/// let mut bar = ProgressBar::new();
/// bar.set_label("Copying");
/// bar.show_in(std::io::sink());
/// for _ in 0..100 {
///     bar.increment(1.0);
/// }
/// assert!(bar.finished());
/// ```
pub struct ProgressBar<'w> {
    config: BarConfig,
    writer: Option<Box<dyn Write + 'w>>,
    terminal: Box<dyn TerminalSize>,
}

impl fmt::Debug for ProgressBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("config", &self.config)
            .field("writer", &self.writer.is_some())
            .finish()
    }
}

impl Default for ProgressBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w> ProgressBar<'w> {
    /// Create a progress bar with the default style.
    pub fn new() -> Self {
        Self::with_style(Style::default_style())
    }

    /// Create a progress bar drawn with `style`.
    pub fn with_style(style: Style) -> Self {
        Self::from_parts(BarConfig::with_style(style), Box::new(ConsoleTerminal))
    }

    /// Start configuring a progress bar.
    pub fn builder() -> ProgressBarBuilder {
        ProgressBarBuilder::new()
    }

    pub(crate) fn from_parts(config: BarConfig, terminal: Box<dyn TerminalSize>) -> Self {
        Self {
            config,
            writer: None,
            terminal,
        }
    }

    /// Set the label displayed on the left of the bar.
    ///
    /// The label is shown whenever it is not empty.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.config.label = label.into();
        self.config.show_label = display_width(&self.config.label) > 0;
        self.refresh();
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.config.label
    }

    /// Display the percentage on the right of the bar, or not.
    pub fn set_show_percentage(&mut self, show: bool) {
        self.config.show_percentage = show;
        self.refresh();
    }

    /// Whether the percentage is displayed.
    pub fn show_percentage(&self) -> bool {
        self.config.show_percentage
    }

    /// Display the percentage with two decimals.
    ///
    /// Enabling it also enables the percentage itself, so there is no need to
    /// call [`set_show_percentage`](ProgressBar::set_show_percentage) as well.
    pub fn set_show_percentage_decimal(&mut self, show: bool) {
        if show {
            self.config.show_percentage = true;
        }
        self.config.show_percentage_decimal = show;
        self.refresh();
    }

    /// Whether the percentage is displayed with decimals.
    pub fn show_percentage_decimal(&self) -> bool {
        self.config.show_percentage_decimal
    }

    /// Set the maximum value. Defaults to 100.
    pub fn set_max(&mut self, max: f64) {
        self.config.max = max;
        self.refresh();
    }

    /// Get the maximum value.
    pub fn max(&self) -> f64 {
        self.config.max
    }

    /// Fix the width of the bar to `max_width` columns.
    pub fn set_max_width(&mut self, max_width: usize) {
        self.config.max_width = max_width;
        self.config.use_custom_width = true;
        self.refresh();
    }

    /// Follow the width of the terminal. This is the default.
    pub fn use_full_width(&mut self) {
        self.config.max_width = 0;
        self.config.use_custom_width = false;
        self.refresh();
    }

    /// Width of the bar in columns.
    ///
    /// Without a custom width this is the current terminal width.
    pub fn max_width(&self) -> usize {
        if self.config.use_custom_width {
            self.config.max_width
        } else {
            self.terminal.columns()
        }
    }

    /// Replace the glyphs used to draw the bar.
    pub fn set_style(&mut self, style: Style) {
        self.config.style = style;
        self.refresh();
    }

    /// Get the glyphs used to draw the bar.
    pub fn style(&self) -> &Style {
        &self.config.style
    }

    /// Set the current value.
    ///
    /// Same as incrementing by the difference with the current value, so it
    /// has no effect before the bar is shown or once it is finished.
    pub fn set_value(&mut self, value: f64) {
        self.increment(value - self.config.value);
    }

    /// Get the current value.
    pub fn value(&self) -> f64 {
        self.config.value
    }

    /// Current percentage as rendered.
    pub fn percent(&self) -> f64 {
        progress::percent(
            self.config.value,
            self.config.max,
            self.config.show_percentage_decimal,
        )
    }

    /// Whether the bar has been shown.
    pub fn visible(&self) -> bool {
        self.config.visible
    }

    /// Whether the bar reached 100% and stopped redrawing.
    pub fn finished(&self) -> bool {
        self.config.finished
    }

    /// Snapshot of the bar state.
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Show the progress bar on standard output.
    pub fn show(&mut self) {
        self.show_in(io::stdout());
    }

    /// Show the progress bar in `writer`.
    ///
    /// Resets the value to 0 and draws the first frame. Pass `&mut writer` to
    /// keep the sink usable once the bar is shown elsewhere or dropped.
    pub fn show_in<W: Write + 'w>(&mut self, writer: W) {
        debug!("Showing progress bar with max {}", self.config.max);
        self.writer = Some(Box::new(writer));
        self.config.visible = true;
        self.config.finished = false;
        self.config.value = 0.0;
        self.increment(0.0);
    }

    /// Move the bar by `count`, which may be negative, and redraw it.
    ///
    /// The value is kept within `[0, max]`.
    pub fn increment(&mut self, count: f64) {
        if self.config.finished || !self.config.visible {
            return;
        }

        self.config.value += count;
        self.config.clamp_value();

        let frame = render(&self.config, self.terminal.columns());
        if frame.finished {
            self.config.finished = true;
            debug!("Progress bar finished at {}", self.config.value);
        }

        if let Err(e) = self.draw(&frame) {
            warn!("Failed to draw progress bar: {}", e);
        }
    }

    fn refresh(&mut self) {
        if self.config.visible {
            self.increment(0.0);
        }
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.write_all(frame.line.as_bytes())?;
            writer.flush()?;
        }
        Ok(())
    }
}

//! State and defaults of a progress bar.
//!
//! [`BarConfig`] holds everything the renderer needs to lay out a frame. A
//! [`ProgressBar`](crate::ProgressBar) owns one and keeps its invariants; the
//! struct is public so frames can be rendered directly from a snapshot.

use crate::progress::Style;

/// Default maximum value of a progress bar.
pub const DEFAULT_MAX: f64 = 100.0;

/// Progress bar state.
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    /// Current value, kept within `[0, max]` by the bar.
    pub value: f64,
    /// Value at which the bar is complete.
    pub max: f64,
    /// Text shown on the left of the bar.
    pub label: String,
    /// Whether the label is shown.
    pub show_label: bool,
    /// Whether the percentage is shown on the right of the bar.
    pub show_percentage: bool,
    /// Show the percentage with two decimals.
    pub show_percentage_decimal: bool,
    /// Glyphs used to draw the bar.
    pub style: Style,
    /// Width in columns, used when `use_custom_width` is set.
    pub max_width: usize,
    /// Use `max_width` instead of the terminal width.
    pub use_custom_width: bool,
    /// The bar has been shown and will redraw on every change.
    pub visible: bool,
    /// The bar reached 100% and stopped redrawing.
    pub finished: bool,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            max: DEFAULT_MAX,
            label: String::new(),
            show_label: false,
            show_percentage: true,
            show_percentage_decimal: false,
            style: Style::default_style(),
            max_width: 0,
            use_custom_width: false,
            visible: false,
            finished: false,
        }
    }
}

impl BarConfig {
    /// Default state with the given glyphs.
    pub fn with_style(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Clamp `value` into `[0, max]`.
    ///
    /// The upper bound is applied first, so a non-positive `max` clamps to `0`.
    /// `NaN` resets to `0`.
    pub fn clamp_value(&mut self) {
        if self.value.is_nan() {
            self.value = 0.0;
        }
        if self.value > self.max {
            self.value = self.max;
        }
        if self.value < 0.0 {
            self.value = 0.0;
        }
    }
}

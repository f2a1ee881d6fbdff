//! Line layout and rendering.
//!
//! [`render`] turns a [`BarConfig`] snapshot and a terminal width into the exact
//! text written for one frame. It performs no I/O, so layouts can be checked
//! without a sink or a real terminal.
//!
//! # Examples
//!
//! ```rust
//! use progresscli::bar::BarConfig;
//! use progresscli::progress::{render, Style};
//!
//! let config = BarConfig {
//!     style: Style::new("[", "]", "*", "-", "/"),
//!     max: 10.0,
//!     value: 5.0,
//!     max_width: 20,
//!     use_custom_width: true,
//!     ..BarConfig::default()
//! };
//!
//! let frame = render(&config, 0);
//! assert_eq!(frame.content(), "[******/------]  50%");
//! assert!(!frame.finished);
//! ```

use crate::bar::BarConfig;
use crate::utils::display_width;
use tracing::trace;

/// Text shown when neither a bar nor a percentage fits.
pub const FALLBACK_TEXT: &str = "Loading...";

/// One rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Everything to write, including the line-clearing prefix and, once
    /// finished, the trailing newline.
    pub line: String,
    /// The bar reached 100% with this frame.
    pub finished: bool,
    clear_len: usize,
}

impl Frame {
    /// The visible content, without the clearing prefix or trailing newline.
    pub fn content(&self) -> &str {
        let content = &self.line[self.clear_len..];
        content.strip_suffix('\n').unwrap_or(content)
    }
}

/// Percentage for `value` against `max`.
///
/// Truncated toward zero unless `decimal` is set. A non-finite or negative
/// ratio, as produced by `max <= 0`, yields `0`; so does `-0.0`.
pub fn percent(value: f64, max: f64, decimal: bool) -> f64 {
    let percent = value / max * 100.0;
    if !percent.is_finite() || percent <= 0.0 {
        return 0.0;
    }
    if decimal {
        percent
    } else {
        percent.trunc()
    }
}

fn format_percent(percent: f64, decimal: bool) -> String {
    if decimal {
        format!("{percent:.2}%")
    } else {
        format!("{percent:.0}%")
    }
}

/// Render one frame of `config` for a terminal `terminal_cols` columns wide.
///
/// The bar uses the custom width when one is set, the terminal width otherwise.
/// The clearing prefix always spans the terminal width.
pub fn render(config: &BarConfig, terminal_cols: usize) -> Frame {
    let style = &config.style;
    let percent = percent(config.value, config.max, config.show_percentage_decimal);

    let mut percent_label = String::new();
    let mut labels_length = 0isize;
    if config.show_percentage {
        percent_label = format_percent(percent, config.show_percentage_decimal);
        let reserved = display_width(&format_percent(100.0, config.show_percentage_decimal));
        labels_length += reserved as isize + 1;
    }
    if config.show_label {
        labels_length += display_width(&config.label) as isize + 1;
    }

    let done_width = display_width(&style.done_char) as isize;
    let not_done_width = display_width(&style.not_done_char) as isize;
    let in_progress_width = display_width(&style.in_progress_char) as isize;
    let open_width = display_width(&style.open_char) as isize;
    let close_width = display_width(&style.close_char) as isize;

    let minimum_length = done_width + not_done_width + in_progress_width;
    let width = if config.use_custom_width {
        config.max_width
    } else {
        terminal_cols
    };
    let available_length = width as isize - labels_length - open_width - close_width;

    let mut line = String::with_capacity(terminal_cols + 2);
    line.push('\r');
    line.push_str(&" ".repeat(terminal_cols));
    line.push('\r');
    let clear_len = line.len();

    if available_length < minimum_length {
        trace!(
            "Not enough room for a bar ({} < {}), using fallback text",
            available_length, minimum_length
        );
        if config.show_label && config.show_percentage {
            line.push_str(&config.label);
            line.push(' ');
            line.push_str(&percent_label);
        } else if config.show_percentage {
            line.push_str(&percent_label);
        } else {
            line.push_str(FALLBACK_TEXT);
        }
    } else {
        if config.show_label {
            line.push_str(&config.label);
            line.push(' ');
        }
        line.push_str(&style.open_char);

        let fill_size = available_length - in_progress_width;
        let filled_length = ((percent / 100.0) * fill_size as f64).trunc() as isize;
        line.push_str(&style.done_char.repeat(filled_length.max(0) as usize));

        if in_progress_width > 0 {
            if percent < 100.0 {
                line.push_str(&style.in_progress_char);
            } else {
                line.push_str(&style.done_char);
            }
        }

        let remaining = available_length - filled_length - in_progress_width;
        line.push_str(&style.not_done_char.repeat(remaining.max(0) as usize));

        if close_width > 0 {
            line.push_str(&style.close_char);
        }

        if config.show_percentage {
            line.push(' ');
            line.push_str(&style.percentage_color);
            line.push_str(&format!("{percent_label:>4}"));
        }
    }

    let finished = percent >= 100.0;
    if finished {
        line.push('\n');
    }

    Frame {
        line,
        finished,
        clear_len,
    }
}

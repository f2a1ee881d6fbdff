//! Progress bar glyph sets.
//!
//! A [`Style`] describes the strings used to draw each part of the bar. Glyphs
//! may be empty, span several characters, or embed ANSI color sequences; the
//! renderer measures them by their visible width and emits them verbatim.
//!
//! # Examples
//!
//! ## Using a Preset
//!
//! ```rust
//! use progresscli::progress::Style;
//!
//! let style = Style::line_no_color();
//! assert_eq!(style.open_char, "╠");
//! ```
//!
//! ## Custom Glyphs
//!
//! ```rust
//! use progresscli::progress::Style;
//!
//! let ascii = Style::new("[", "]", "#", "-", ">");
//! ```
//!
//! ## Selecting a Preset by Name
//!
//! ```rust
//! use progresscli::progress::{Style, StylePreset};
//!
//! # fn main() -> Result<(), progresscli::Error> {
//! let preset: StylePreset = "line-no-color".parse()?;
//! assert_eq!(Style::from(preset), Style::line_no_color());
//! # Ok(())
//! # }
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The glyphs used to draw a progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Style {
    /// Drawn on the left end of the bar.
    pub open_char: String,
    /// Drawn on the right end of the bar.
    pub close_char: String,
    /// Repeated over the completed section.
    pub done_char: String,
    /// Repeated over the section left to do.
    pub not_done_char: String,
    /// Marks the position currently in progress.
    pub in_progress_char: String,
    /// Written right before the percentage, typically an ANSI color sequence.
    ///
    /// Never counted towards the layout width.
    pub percentage_color: String,
}

impl Style {
    /// Create a new [`Style`] without a percentage color.
    pub fn new(
        open_char: impl Into<String>,
        close_char: impl Into<String>,
        done_char: impl Into<String>,
        not_done_char: impl Into<String>,
        in_progress_char: impl Into<String>,
    ) -> Self {
        Self {
            open_char: open_char.into(),
            close_char: close_char.into(),
            done_char: done_char.into(),
            not_done_char: not_done_char.into(),
            in_progress_char: in_progress_char.into(),
            percentage_color: String::new(),
        }
    }

    /// Set the text written right before the percentage.
    pub fn with_percentage_color(mut self, color: impl Into<String>) -> Self {
        self.percentage_color = color.into();
        self
    }

    /// Green blocks over white shades: `█████░░░░░`.
    pub fn default_style() -> Self {
        Self::new(
            "",
            "",
            "\x1b[1;32m█\x1b[0m",
            "\x1b[1;37m░\x1b[0m",
            "\x1b[1;37m░\x1b[0m",
        )
    }

    /// [`Style::default_style`] without color sequences.
    pub fn default_no_color() -> Self {
        Self::new("", "", "█", "░", "░")
    }

    /// Double line between box-drawing brackets: `╠═════─────╣`.
    pub fn line() -> Self {
        Self::new(
            "\x1b[1;37m╠\x1b[0m",
            "\x1b[1;37m╣\x1b[0m",
            "\x1b[1;32m═\x1b[0m",
            "\x1b[1;37m─\x1b[0m",
            "\x1b[1;37m─\x1b[0m",
        )
    }

    /// [`Style::line`] without color sequences.
    pub fn line_no_color() -> Self {
        Self::new("╠", "╣", "═", "─", "─")
    }
}

/// Named entries of the style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePreset {
    /// See [`Style::default_style`].
    #[default]
    Default,
    /// See [`Style::default_no_color`].
    DefaultNoColor,
    /// See [`Style::line`].
    Line,
    /// See [`Style::line_no_color`].
    LineNoColor,
}

impl StylePreset {
    /// Every preset, in catalog order.
    pub const ALL: [StylePreset; 4] = [
        StylePreset::Default,
        StylePreset::DefaultNoColor,
        StylePreset::Line,
        StylePreset::LineNoColor,
    ];

    /// Name used to refer to the preset in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            StylePreset::Default => "default",
            StylePreset::DefaultNoColor => "default-no-color",
            StylePreset::Line => "line",
            StylePreset::LineNoColor => "line-no-color",
        }
    }

    /// Build the glyph set for this preset.
    pub fn style(&self) -> Style {
        match self {
            StylePreset::Default => Style::default_style(),
            StylePreset::DefaultNoColor => Style::default_no_color(),
            StylePreset::Line => Style::line(),
            StylePreset::LineNoColor => Style::line_no_color(),
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StylePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        StylePreset::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

impl From<StylePreset> for Style {
    fn from(preset: StylePreset) -> Self {
        preset.style()
    }
}

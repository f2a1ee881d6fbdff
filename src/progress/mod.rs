//! Progress bar styling and rendering.
//!
//! # Overview
//!
//! The progress module is organized into two main components:
//!
//! - `style` - Glyph sets and the named preset catalog
//! - `display` - The layout engine producing each rendered line
//!
//! # Examples
//!
//! ## Rendering Without a Sink
//!
//! ```rust
//! use progresscli::bar::BarConfig;
//! use progresscli::progress::{render, Style};
//!
//! let config = BarConfig {
//!     style: Style::default_no_color(),
//!     value: 100.0,
//!     ..BarConfig::default()
//! };
//!
//! let frame = render(&config, 30);
//! assert!(frame.finished);
//! assert!(frame.line.ends_with('\n'));
//! ```
//!
//! ## Picking a Style
//!
//! ```rust
//! use progresscli::progress::{Style, StylePreset};
//!
//! let colored = Style::from(StylePreset::Line);
//! let plain = Style::line_no_color();
//! assert_ne!(colored, plain);
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::{percent, render, Frame, FALLBACK_TEXT};
pub use style::{Style, StylePreset};

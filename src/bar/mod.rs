//! Bar module containing the progress bar, its builder and its state.
//!
//! # Overview
//!
//! - `bar` - The [`ProgressBar`] and its mutators
//! - `builder` - [`ProgressBarBuilder`] for configuring a bar before showing it
//! - `config` - [`BarConfig`], the state snapshot consumed by the renderer
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use progresscli::ProgressBar;
//!
//! let mut bar = ProgressBar::new();
//! bar.set_max(10.0);
//! bar.show_in(std::io::sink());
//! bar.set_value(4.0);
//! assert_eq!(bar.value(), 4.0);
//! ```
//!
//! ## Custom Style
//!
//! ```rust
//! use progresscli::ProgressBar;
//! use progresscli::progress::Style;
//!
//! let mut bar = ProgressBar::with_style(Style::new("[", "]", "=", " ", ">"));
//! bar.set_label("Working");
//! ```

#[allow(clippy::module_inception)]
pub mod bar;
pub mod builder;
pub mod config;

pub use bar::ProgressBar;
pub use builder::ProgressBarBuilder;
pub use config::{BarConfig, DEFAULT_MAX};

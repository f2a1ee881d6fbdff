//! Display-width measurement for text that may carry ANSI escape sequences.
//!
//! Style glyphs and labels frequently embed color codes, which occupy no
//! columns on screen. Layout math therefore measures text after removing those
//! sequences, counting Unicode scalar values rather than bytes.
//!
//! # Examples
//!
//! ```rust
//! use progresscli::utils::{display_width, strip_ansi};
//!
//! assert_eq!(display_width("\x1b[1;32m█\x1b[0m"), 1);
//! assert_eq!(strip_ansi("\x1b[1;37m─\x1b[0m"), "─");
//! ```

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches CSI sequences introduced by ESC or the single-byte C1 introducer, and
/// OSC-style sequences terminated by BEL. Digits are ASCII only.
static ANSI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x1b\x{9b}][\[\]()#;?]*(?:(?:(?:[a-zA-Z0-9]*(?:;[a-zA-Z0-9]*)*)?\x07)|(?:(?:[0-9]{1,4}(?:;[0-9]{0,4})*)?[0-9A-PRZcf-ntqry=><~]))",
    )
    .expect("Invalid ANSI escape regex")
});

/// Remove every ANSI escape sequence from `text`.
///
/// Borrows the input when there is nothing to strip.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_REGEX.replace_all(text, "")
}

/// Number of visible characters in `text`.
///
/// Escape sequences are removed first; the remainder is counted in code points.
pub fn display_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

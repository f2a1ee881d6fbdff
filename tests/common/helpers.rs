#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use progresscli::progress::Style;
use progresscli::utils::{FixedTerminal, TerminalSize};
use progresscli::ProgressBar;
use tracing_subscriber::EnvFilter;

// Common test constants
pub const TEST_WIDTH: u16 = 20;
pub const TEST_LABEL: &str = "Job";

/// Installs a tracing subscriber honoring `RUST_LOG`, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// === Sinks ===

/// A writer whose content stays readable after being handed to a bar.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("Output is not UTF-8")
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// The visible content of every frame written so far.
    pub fn frames(&self) -> Vec<String> {
        split_frames(&self.contents())
    }

    /// The visible content of the last frame, without its trailing newline.
    pub fn last_frame(&self) -> String {
        let frames = self.frames();
        let last = frames.last().expect("No frame was written");
        last.strip_suffix('\n').unwrap_or(last).to_string()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that always fails.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}

/// Each frame is `\r<spaces>\r<content>`; returns the contents.
pub fn split_frames(output: &str) -> Vec<String> {
    output
        .split('\r')
        .skip(2)
        .step_by(2)
        .map(str::to_string)
        .collect()
}

// === Terminals ===

/// A terminal whose size cannot be determined.
pub struct UnknownTerminal;

impl TerminalSize for UnknownTerminal {
    fn size(&self) -> Option<(u16, u16)> {
        None
    }
}

// === Bars ===

/// Plain ASCII glyphs: `[`, `]`, `*`, `-`, `/`.
pub fn create_ascii_style() -> Style {
    Style::new("[", "]", "*", "-", "/")
}

/// A hidden bar with ASCII glyphs on a terminal `width` columns wide.
pub fn create_test_bar<'w>(width: u16) -> ProgressBar<'w> {
    ProgressBar::builder()
        .style(create_ascii_style())
        .terminal(FixedTerminal::new(width))
        .build()
}

/// A bar shown into a fresh [`SharedBuffer`].
pub fn create_shown_bar(width: u16) -> (ProgressBar<'static>, SharedBuffer) {
    let mut bar = create_test_bar(width);
    let buffer = SharedBuffer::new();
    bar.show_in(buffer.clone());
    (bar, buffer)
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

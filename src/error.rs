//! Error handling for the progresscli library.
//!
//! The progress bar itself never surfaces errors to its caller: failed writes are
//! logged and dropped. The types here cover the fallible edges of the crate, such
//! as looking up a style preset by name or drawing a frame to a sink.

use std::io;
use thiserror::Error;

/// Errors that can happen when using progresscli.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested style preset does not exist.
    ///
    /// Returned when parsing a [`StylePreset`](crate::StylePreset) from a name
    /// that is not part of the catalog.
    #[error("Unknown style preset: {0}")]
    UnknownStyle(String),

    /// I/O Error.
    ///
    /// This variant wraps errors raised by the output sink while a frame is
    /// being written or flushed.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a progresscli error.
pub type Result<T> = std::result::Result<T, Error>;

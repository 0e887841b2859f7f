//! Panel errors.

use std::io;

use thiserror::Error;

/// Errors from the terminal panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// Terminal or log file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A `--device` argument could not be parsed.
    #[error("invalid device '{arg}': {reason}")]
    InvalidDevice {
        /// The argument as given.
        arg: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// The log filter could not be built.
    #[error("invalid log filter: {0}")]
    LogFilter(String),
}

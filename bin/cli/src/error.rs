//! CLI errors with exit codes.
//!
//! Exit codes:
//! - 0:  success
//! - 2:  clap arg parse error (before our code runs)
//! - 10: color error (malformed hex, out of range component)
//! - 11: I/O error (config file, swatch image)
//! - 12: input error (bad config)
//! - 13: serialization error

use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A color could not be parsed or converted.
    Color(hueshift::Error),
    /// Reading or writing a file failed.
    Io(String),
    /// The user supplied unusable input.
    Input(String),
    /// JSON output could not be produced.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<hueshift::Error> for CliError {
    fn from(e: hueshift::Error) -> Self {
        CliError::Color(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

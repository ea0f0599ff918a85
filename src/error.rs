//! Error types for color parsing and conversion.

use thiserror::Error;

use crate::Component;

/// Errors produced by the color model.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A hex color string could not be parsed.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// A numeric parameter was outside of its domain or not finite.
    #[error("{name} out of range: {value}")]
    InvalidRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: Component,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

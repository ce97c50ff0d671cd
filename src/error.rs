//! Errors for validating loader configuration.
//!
//! The loading controller itself has no failure paths; these cover the
//! values that arrive from settings and user input.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadButtonError {
    #[error("invalid color '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("unknown indicator style '{0}'")]
    UnknownIndicatorStyle(String),
}

pub type Result<T> = std::result::Result<T, LoadButtonError>;

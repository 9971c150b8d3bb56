//! Errors raised while packing an input file.

use crate::io::ParseError;
use crate::model::ConstraintViolation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    /// The solver configuration failed validation.
    #[error("invalid solver configuration: {0}")]
    Config(String),

    /// The input file could not be opened.
    #[error("cannot open input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a line from the input failed.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),

    /// A line does not follow the input format.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A value on a line broke a packing limit.
    #[error("line {line}: {source}")]
    Constraint {
        line: usize,
        #[source]
        source: ConstraintViolation,
    },
}

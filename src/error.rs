#![forbid(unsafe_code)]

//! Error taxonomy and exit-code mapping
//!
//! Validation failures are resolved before any stream is opened; I/O
//! failures surface from the counting pass. The binary maps each class to
//! a distinct non-zero exit code.

use std::io;
use thiserror::Error;

/// Everything that can go wrong in a run.
#[derive(Debug, Error)]
pub enum CountError {
    #[error("usage: geniewc [-c|-l|-w|-m] [file]")]
    Usage,

    #[error("unrecognized flag '{0}' (expected -c, -l, -w or -m)")]
    InvalidFlag(String),

    #[error("'{0}' is not a valid text file path")]
    InvalidPathShape(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("i/o error while counting: {0}")]
    Io(#[from] io::Error),
}

impl CountError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            CountError::Usage => 1,
            CountError::InvalidFlag(_) => 2,
            CountError::InvalidPathShape(_) => 3,
            CountError::FileNotFound(_) => 4,
            CountError::Io(_) => 5,
        }
    }
}

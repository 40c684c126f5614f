#![forbid(unsafe_code)]

//! The input source abstraction: a named file or standard input

use std::fs::File;
use std::io::{self, BufReader, Read};

/// Where the bytes come from. Exactly one source exists per invocation;
/// it is opened once and consumed start-to-end in a single pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file path that already passed grammar and existence checks.
    File(String),
    /// The inherited standard input stream.
    Stdin,
}

impl InputSource {
    pub fn file(path: impl Into<String>) -> InputSource {
        InputSource::File(path.into())
    }

    /// The label echoed alongside counts: the path for files, nothing for
    /// standard input.
    pub fn label(&self) -> Option<&str> {
        match self {
            InputSource::File(path) => Some(path.as_str()),
            InputSource::Stdin => None,
        }
    }

    /// Open the source for reading. File sources get a buffered reader;
    /// stdin is consumed through its lock.
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            InputSource::File(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

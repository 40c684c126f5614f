#![forbid(unsafe_code)]

//! Geniewc: a streaming word, line, byte and character counter
//!
//! Geniewc reads text from a named file or from standard input and reports
//! counts along one or more of four dimensions: bytes, lines, words,
//! characters. Each run makes exactly one pass over the input in fixed-size
//! chunks, so memory stays bounded regardless of input size.

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;

pub use error::CountError;

use std::io::Write;
use termcolor::{ColorChoice, StandardStream};

/// Resolve arguments, count, and print the report to stdout.
///
/// This is the whole program behind the binary: the caller only maps the
/// returned error to an exit code.
pub fn run(args: &[String]) -> Result<(), CountError> {
    let invocation = cli::resolve(args)?;
    let counts = engine::count(&invocation.source, invocation.mode)?;

    let formatter =
        output::HumanFormatter::new(invocation.mode, counts, invocation.source.label());
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    formatter.write_to(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

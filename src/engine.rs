#![forbid(unsafe_code)]

//! Streaming accumulation engine
//!
//! One chunked read pass over an input source feeds the accumulators the
//! selected mode asks for.

pub mod accumulator;
pub mod source;

pub use accumulator::{ByteCounter, CharCounter, LineCounter, WordCounter, count, count_reader};
pub use source::InputSource;

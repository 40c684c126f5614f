#![forbid(unsafe_code)]

//! Argument resolution: which source to read and which metric to compute

pub mod args;

pub use args::{Invocation, is_countable_path, resolve};

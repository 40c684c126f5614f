#![forbid(unsafe_code)]

//! Rendering of final counts for the terminal

pub mod human;

pub use human::HumanFormatter;

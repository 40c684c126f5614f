#![forbid(unsafe_code)]

//! Human-readable output formatter
//!
//! A single-mode run prints one number; the default all mode prints
//! `lines words bytes`. File-based runs append the path as a label. No
//! column alignment, no localization.

use crate::types::{Counts, Mode};
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// Formats one run's counts for terminal display.
pub struct HumanFormatter {
    mode: Mode,
    counts: Counts,
    label: Option<String>,
}

impl HumanFormatter {
    pub fn new(mode: Mode, counts: Counts, label: Option<&str>) -> Self {
        HumanFormatter {
            mode,
            counts,
            label: label.map(str::to_string),
        }
    }

    /// The report line, without color and without a trailing newline.
    ///
    /// A labelless all-mode report keeps its trailing space: the label
    /// position stays where it would be, just empty.
    pub fn format(&self) -> String {
        let numbers = self.numbers();
        match &self.label {
            Some(label) => format!("{} {}", numbers, label),
            None => numbers,
        }
    }

    /// Write the report to the given stream, colorizing the label.
    pub fn write_to(&self, out: &mut impl WriteColor) -> io::Result<()> {
        write!(out, "{}", self.numbers())?;
        if let Some(label) = &self.label {
            write!(out, " ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "{}", label)?;
            out.reset()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn numbers(&self) -> String {
        match self.mode {
            Mode::Bytes => self.counts.bytes.to_string(),
            Mode::Lines => self.counts.lines.to_string(),
            Mode::Words => self.counts.words.to_string(),
            Mode::Chars => self.counts.chars.to_string(),
            Mode::All => format!(
                "{} {} {}{}",
                self.counts.lines,
                self.counts.words,
                self.counts.bytes,
                if self.label.is_some() { "" } else { " " }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_counts() -> Counts {
        Counts {
            lines: 2,
            words: 3,
            bytes: 14,
            chars: 14,
        }
    }

    #[test]
    fn test_single_mode_with_label() {
        let formatter = HumanFormatter::new(Mode::Words, sample_counts(), Some("notes.txt"));
        assert_eq!(formatter.format(), "3 notes.txt");
    }

    #[test]
    fn test_single_mode_without_label_is_bare_number() {
        let formatter = HumanFormatter::new(Mode::Lines, sample_counts(), None);
        assert_eq!(formatter.format(), "2");
    }

    #[test]
    fn test_all_mode_with_label() {
        let formatter = HumanFormatter::new(Mode::All, sample_counts(), Some("report.log"));
        assert_eq!(formatter.format(), "2 3 14 report.log");
    }

    #[test]
    fn test_all_mode_without_label_keeps_trailing_space() {
        let formatter = HumanFormatter::new(Mode::All, sample_counts(), None);
        assert_eq!(formatter.format(), "2 3 14 ");
    }

    #[test]
    fn test_each_single_mode_picks_its_counter() {
        let counts = Counts {
            lines: 1,
            words: 2,
            bytes: 3,
            chars: 4,
        };
        assert_eq!(HumanFormatter::new(Mode::Lines, counts, None).format(), "1");
        assert_eq!(HumanFormatter::new(Mode::Words, counts, None).format(), "2");
        assert_eq!(HumanFormatter::new(Mode::Bytes, counts, None).format(), "3");
        assert_eq!(HumanFormatter::new(Mode::Chars, counts, None).format(), "4");
    }

    #[test]
    fn test_write_to_ends_with_newline() {
        let formatter = HumanFormatter::new(Mode::Words, sample_counts(), Some("notes.txt"));
        let mut buffer = termcolor::Buffer::no_color();
        formatter.write_to(&mut buffer).unwrap();
        let written = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(written, "3 notes.txt\n");
    }
}

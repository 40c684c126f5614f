#![forbid(unsafe_code)]

//! Domain value types shared across the crate

/// Which metric(s) a run computes.
///
/// Selected once during argument resolution and fixed before any byte is
/// read. `All` is the default when no flag is given and reports lines,
/// words and bytes together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Bytes,
    Lines,
    Words,
    Chars,
    All,
}

impl Mode {
    /// Map a command-line token of the form `-<letter>` to a mode,
    /// case-insensitively. Returns `None` for anything that is not a
    /// recognized flag; flag interpretation performs no I/O.
    pub fn from_flag(token: &str) -> Option<Mode> {
        let letter = token.strip_prefix('-')?;
        match letter.to_ascii_lowercase().as_str() {
            "c" => Some(Mode::Bytes),
            "l" => Some(Mode::Lines),
            "w" => Some(Mode::Words),
            "m" => Some(Mode::Chars),
            _ => None,
        }
    }

    /// Whether this mode needs the byte accumulator.
    pub fn wants_bytes(self) -> bool {
        matches!(self, Mode::Bytes | Mode::All)
    }

    /// Whether this mode needs the line accumulator.
    pub fn wants_lines(self) -> bool {
        matches!(self, Mode::Lines | Mode::All)
    }

    /// Whether this mode needs the word accumulator.
    pub fn wants_words(self) -> bool {
        matches!(self, Mode::Words | Mode::All)
    }

    /// Whether this mode needs the character accumulator.
    pub fn wants_chars(self) -> bool {
        matches!(self, Mode::Chars)
    }
}

/// Final counter values for one exhausted input source.
///
/// Every field is monotonically non-decreasing while accumulation runs;
/// callers read the totals only after the stream is fully consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub lines: u64,
    pub words: u64,
    pub bytes: u64,
    pub chars: u64,
}

#![forbid(unsafe_code)]

//! The four stream accumulators and the unified counting pass
//!
//! Each accumulator is an independent single-pass reducer over the byte
//! stream, consuming fixed-size chunks in bounded memory. The "all" mode
//! needs three of them at once; rather than re-reading the source per
//! accumulator (impossible for non-seekable stdin), a single read pass
//! feeds every requested accumulator per chunk.

use crate::error::CountError;
use crate::types::{Counts, Mode};
use std::io::Read;

use super::source::InputSource;

const CHUNK_SIZE: usize = 8 * 1024;

/// Sums the length in bytes of every chunk.
#[derive(Debug, Default)]
pub struct ByteCounter {
    total: u64,
}

impl ByteCounter {
    pub fn observe(&mut self, chunk: &[u8]) {
        self.total += chunk.len() as u64;
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Counts Unicode scalar values, not bytes.
///
/// A scalar value starts at every byte that is not a UTF-8 continuation
/// byte, so counting start bytes is correct even when a multi-byte
/// sequence straddles a chunk boundary. No decoding or buffering needed.
#[derive(Debug, Default)]
pub struct CharCounter {
    total: u64,
}

impl CharCounter {
    pub fn observe(&mut self, chunk: &[u8]) {
        let starts = chunk.iter().filter(|&&b| b & 0xC0 != 0x80).count();
        self.total += starts as u64;
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Counts lines, including a final unterminated one.
///
/// Only `\n` terminates a line, so a CRLF pair is a single boundary. The
/// `pending` flag records bytes seen since the last terminator; when the
/// stream closes with content pending, that trailing content counts as
/// one more line. Empty input stays at zero.
#[derive(Debug, Default)]
pub struct LineCounter {
    total: u64,
    pending: bool,
}

impl LineCounter {
    pub fn observe(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            if byte == b'\n' {
                self.total += 1;
                self.pending = false;
            } else {
                self.pending = true;
            }
        }
    }

    /// Total after end of stream.
    pub fn total(&self) -> u64 {
        if self.pending {
            self.total + 1
        } else {
            self.total
        }
    }
}

/// Counts maximal runs of non-whitespace bytes.
///
/// A word begins whenever a non-whitespace byte follows whitespace (or
/// the start of the stream). The `in_word` flag carries across chunk
/// boundaries so a word split between chunks counts once. Whitespace is
/// ASCII whitespace; newline bytes separate words, so blank lines
/// contribute nothing.
#[derive(Debug, Default)]
pub struct WordCounter {
    total: u64,
    in_word: bool,
}

impl WordCounter {
    pub fn observe(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            if byte.is_ascii_whitespace() {
                self.in_word = false;
            } else if !self.in_word {
                self.in_word = true;
                self.total += 1;
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Open the source and run the unified counting pass for `mode`.
pub fn count(source: &InputSource, mode: Mode) -> Result<Counts, CountError> {
    let reader = source.open()?;
    count_reader(reader, mode)
}

/// The unified pass: read fixed-size chunks and feed each one to every
/// accumulator the mode requests. Accumulators the mode does not request
/// stay at zero. A read error aborts the pass with no partial counts.
pub fn count_reader(mut reader: impl Read, mode: Mode) -> Result<Counts, CountError> {
    let mut bytes = ByteCounter::default();
    let mut lines = LineCounter::default();
    let mut words = WordCounter::default();
    let mut chars = CharCounter::default();

    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        let chunk = &chunk[..n];

        if mode.wants_bytes() {
            bytes.observe(chunk);
        }
        if mode.wants_lines() {
            lines.observe(chunk);
        }
        if mode.wants_words() {
            words.observe(chunk);
        }
        if mode.wants_chars() {
            chars.observe(chunk);
        }
    }

    Ok(Counts {
        lines: lines.total(),
        words: words.total(),
        bytes: bytes.total(),
        chars: chars.total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn counts(input: &[u8], mode: Mode) -> Counts {
        count_reader(input, mode).unwrap()
    }

    #[test]
    fn test_empty_input_is_zero_for_every_mode() {
        for mode in [Mode::Bytes, Mode::Lines, Mode::Words, Mode::Chars, Mode::All] {
            assert_eq!(counts(b"", mode), Counts::default());
        }
    }

    #[test]
    fn test_byte_count_matches_input_length() {
        assert_eq!(counts(b"hello", Mode::Bytes).bytes, 5);
        assert_eq!(counts(b"hello world\n", Mode::Bytes).bytes, 12);
    }

    #[test]
    fn test_ascii_bytes_equal_chars() {
        let input = b"plain ascii, no newline";
        assert_eq!(counts(input, Mode::Bytes).bytes, input.len() as u64);
        assert_eq!(counts(input, Mode::Chars).chars, input.len() as u64);
    }

    #[test]
    fn test_multibyte_chars_count_as_one_unit() {
        // "héllo wörld" holds two 2-byte characters.
        let input = "héllo wörld".as_bytes();
        assert_eq!(counts(input, Mode::Chars).chars, 11);
        assert_eq!(counts(input, Mode::Bytes).bytes, 13);
    }

    #[test]
    fn test_char_count_across_chunk_boundary() {
        // Exercise the split-sequence case directly on the accumulator.
        let encoded = "é".as_bytes();
        let mut counter = CharCounter::default();
        counter.observe(&encoded[..1]);
        counter.observe(&encoded[1..]);
        assert_eq!(counter.total(), 1);
    }

    #[test]
    fn test_line_count_without_trailing_newline() {
        assert_eq!(counts(b"a\nb", Mode::Lines).lines, 2);
        assert_eq!(counts(b"a\nb\n", Mode::Lines).lines, 2);
    }

    #[test]
    fn test_single_line_no_newline() {
        assert_eq!(counts(b"a,b,c", Mode::Lines).lines, 1);
    }

    #[test]
    fn test_crlf_counts_once() {
        assert_eq!(counts(b"a\r\nb\r\n", Mode::Lines).lines, 2);
    }

    #[test]
    fn test_printable_ascii_without_newlines_is_one_line() {
        let input = b"no terminator here";
        assert_eq!(counts(input, Mode::Lines).lines, 1);
    }

    #[test]
    fn test_word_count_collapses_whitespace_runs() {
        assert_eq!(counts(b"  a   b  ", Mode::Words).words, 2);
        assert_eq!(counts(b"one two\tthree\nfour", Mode::Words).words, 4);
    }

    #[test]
    fn test_blank_lines_contribute_no_words() {
        assert_eq!(counts(b"\n\n  \n\t\n", Mode::Words).words, 0);
        assert_eq!(counts(b"a\n\n\nb\n", Mode::Words).words, 2);
    }

    #[test]
    fn test_word_split_across_chunk_boundary_counts_once() {
        let mut counter = WordCounter::default();
        counter.observe(b"hel");
        counter.observe(b"lo world");
        assert_eq!(counter.total(), 2);
    }

    #[test]
    fn test_all_mode_reports_lines_words_bytes_in_one_pass() {
        let result = counts(b"one two\nthree\n", Mode::All);
        assert_eq!(result.lines, 2);
        assert_eq!(result.words, 3);
        assert_eq!(result.bytes, 14);
        // Chars are not part of the all mode.
        assert_eq!(result.chars, 0);
    }

    #[test]
    fn test_single_mode_leaves_other_counters_at_zero() {
        let result = counts(b"one two\n", Mode::Words);
        assert_eq!(result.words, 2);
        assert_eq!(result.lines, 0);
        assert_eq!(result.bytes, 0);
    }

    #[test]
    fn test_input_larger_than_one_chunk() {
        let mut input = Vec::new();
        for _ in 0..3000 {
            input.extend_from_slice(b"word one\n");
        }
        let result = counts(&input, Mode::All);
        assert_eq!(result.lines, 3000);
        assert_eq!(result.words, 6000);
        assert_eq!(result.bytes, 9 * 3000);
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn test_read_error_surfaces_without_partial_counts() {
        let err = count_reader(FailingReader, Mode::All).unwrap_err();
        assert!(matches!(err, CountError::Io(_)));
    }
}

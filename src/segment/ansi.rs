//! ANSI escape sequence scanning.
//!
//! Splits a string into plain-text runs and complete escape sequences so
//! that a sequence is never cut in half. Handles:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char

const ESC: u8 = 0x1B;

/// One run of the input: plain text or a whole escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiRun<'a> {
    Text(&'a str),
    Escape(&'a str),
}

/// Iterator over the runs of a string, in order.
///
/// Concatenating every run yields the input.
#[derive(Debug, Clone)]
pub struct AnsiRuns<'a> {
    s: &'a str,
    pos: usize,
}

/// Split `s` into text runs and escape sequences.
pub fn ansi_runs(s: &str) -> AnsiRuns<'_> {
    AnsiRuns { s, pos: 0 }
}

impl<'a> Iterator for AnsiRuns<'a> {
    type Item = AnsiRun<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.s.as_bytes();
        let len = bytes.len();
        let start = self.pos;
        if start >= len {
            return None;
        }

        if bytes[start] == ESC {
            self.pos = skip_escape_sequence(self.s, start);
            return Some(AnsiRun::Escape(&self.s[start..self.pos]));
        }

        // ESC is a single-byte ASCII character, so stopping in front of it
        // never splits a UTF-8 sequence.
        let mut i = start;
        while i < len && bytes[i] != ESC {
            i += 1;
        }
        self.pos = i;
        Some(AnsiRun::Text(&self.s[start..i]))
    }
}

/// Skip an escape sequence starting at `pos` (which points to ESC byte).
/// Returns the byte index after the complete sequence.
fn skip_escape_sequence(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        // Two-character sequence; the second character may be multi-byte.
        _ => next + s[next..].chars().next().map_or(1, char::len_utf8),
    }
}

/// Skip a CSI sequence. `pos` is the byte after `[`.
///
/// CSI format: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            // Invalid byte, abort the sequence here. Every byte before it
            // was ASCII so this is a char boundary.
            return i;
        }
        i += 1;
    }

    len
}

/// Skip a string-terminated sequence (OSC, DCS, PM, APC).
/// `pos` is the byte after the type indicator.
///
/// Terminates with BEL (0x07) or ST (ESC \).
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if i + 1 < len && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }

    len
}

//! Turns the input file into numbered, classified lines. Nothing here knows
//! what a set or a command means; it only looks at the first character.
use anyhow::{Context, Result};
use bstr::ByteSlice;
use memchr::{memchr, memmem};
use std::{fs, path::Path};
use tracing::debug;

use crate::error::ErrorKind;

/// What a line declares, judged by its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `U`: the universe
    Universe,
    /// `S`: a set
    Set,
    /// `R`: a relation
    Relation,
    /// `C`: a command
    Command,
    /// Anything else, including an empty line
    Unrecognized,
}

/// One line of input. Lines are never changed after they're read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the input
    pub number: usize,
    /// Classification by first character
    pub kind: LineKind,
    /// The text, without its line terminator
    pub text: String,
}

impl Line {
    /// Classifies `text` as line number `number`
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>) -> Line {
        let text = text.into();
        let kind = match text.as_bytes().first() {
            Some(b'U') => LineKind::Universe,
            Some(b'S') => LineKind::Set,
            Some(b'R') => LineKind::Relation,
            Some(b'C') => LineKind::Command,
            _ => LineKind::Unrecognized,
        };
        Line { number, kind, text }
    }
}

/// Reads the file at `path` and returns its lines
pub fn read_lines(path: &Path) -> Result<Vec<Line>> {
    let contents = fs::read(path)
        .map_err(|_| ErrorKind::FileUnavailable)
        .with_context(|| format!("can't read {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "read input file");
    Ok(lines_of(&decode_if_utf16(contents)))
}

/// Splits `contents` into `Line`s. A UTF-8 Byte Order Mark is skipped, a `\r`
/// before a `\n` is dropped, and a last line with no terminator still counts.
#[must_use]
pub fn lines_of(mut contents: &[u8]) -> Vec<Line> {
    if has_bom(contents) {
        contents = &contents[BOM_BYTES.len()..];
    }
    let mut lines = Vec::new();
    let mut push = |line: &[u8]| {
        let number = lines.len() + 1;
        lines.push(Line::new(number, line.to_str_lossy().into_owned()));
    };
    while let Some(end) = memchr(b'\n', contents) {
        let (mut line, rest) = contents.split_at(end);
        contents = &rest[1..];
        if let Some(&maybe_cr) = line.last() {
            if maybe_cr == b'\r' {
                line = &line[..line.len() - 1];
            }
        }
        push(line);
    }
    if !contents.is_empty() {
        push(contents);
    }
    debug!(count = lines.len(), "split input into lines");
    lines
}

/// Returns the part of `text` after its one-character tag and the space that
/// must follow the tag. Returns `None` if there is no such space, if `text`
/// ends with a space, or if two spaces are adjacent anywhere.
pub(crate) fn body_of(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[1] != b' ' || bytes[bytes.len() - 1] == b' ' {
        return None;
    }
    if memmem::find(bytes, b"  ").is_some() {
        return None;
    }
    text.get(2..)
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // `decode_without_bom_handling` turns the UTF-16 BOM into a UTF-8 BOM,
    // which `lines_of` then skips. Malformed sequences become U+FFFD, which
    // no literal accepts.
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            debug!(encoding = enc.name(), "transcoding input to UTF-8");
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

const BOM_0: u8 = b'\xEF';
const BOM_1: u8 = b'\xBB';
const BOM_2: u8 = b'\xBF';
const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";
/// Does `contents` begin with a (UTF-8) Byte Order Mark?
fn has_bom(contents: &[u8]) -> bool {
    contents.len() >= 3 && contents[0] == BOM_0 && contents[1] == BOM_1 && contents[2] == BOM_2
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    const UTF8_BOM: &str = "\u{FEFF}";

    #[test]
    fn utf8_bom_is_correct() {
        assert_eq!([BOM_0, BOM_1, BOM_2], UTF8_BOM.as_bytes());
    }

    fn to_utf_16le(source: &str) -> Vec<u8> {
        let mut result = b"\xff\xfe".to_vec();
        for b in source.as_bytes().iter() {
            result.push(*b);
            result.push(0);
        }
        result
    }

    fn to_utf_16be(source: &str) -> Vec<u8> {
        let mut result = b"\xfe\xff".to_vec();
        for b in source.as_bytes().iter() {
            result.push(0);
            result.push(*b);
        }
        result
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn utf_16_input_reads_like_utf_8() {
        let source = "U a b\nS a\n";
        assert_eq!(lines_of(&decode_if_utf16(to_utf_16le(source))), lines_of(source.as_bytes()));
        assert_eq!(lines_of(&decode_if_utf16(to_utf_16be(source))), lines_of(source.as_bytes()));
    }

    #[test]
    fn crlf_and_a_missing_final_newline_are_tolerated() {
        let lines = lines_of(b"U a b\r\nS a\r\nC card 2");
        assert_eq!(texts(&lines), ["U a b", "S a", "C card 2"]);
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn lines_are_classified_by_first_character() {
        let lines = lines_of(b"U a\nS a\nR (a a)\nC empty 2\n\nx\n");
        let kinds: Vec<LineKind> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            [
                LineKind::Universe,
                LineKind::Set,
                LineKind::Relation,
                LineKind::Command,
                LineKind::Unrecognized,
                LineKind::Unrecognized
            ]
        );
    }

    #[test]
    fn a_leading_utf8_bom_is_skipped() {
        let mut contents = UTF8_BOM.as_bytes().to_vec();
        contents.extend_from_slice(b"U a\n");
        assert_eq!(lines_of(&contents)[0].kind, LineKind::Universe);
    }

    #[test]
    fn body_of_rejects_bad_spacing() {
        assert_eq!(body_of("S a b"), Some("a b"));
        assert_eq!(body_of("S"), None);
        assert_eq!(body_of("Sa b"), None);
        assert_eq!(body_of("S a b "), None);
        assert_eq!(body_of("S a  b"), None);
    }
}

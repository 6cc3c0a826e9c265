//! Line normalization and classification.

/// First character of a directive line.
pub const MARKER: u8 = b'@';

/// Character that, placed before the marker, disables directive interpretation.
pub const ESCAPE: u8 = b'\\';

/// A single input line after trimming.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Nothing left after trimming; produces no output.
    Blank,
    /// Marker-prefixed line, handed to the directive evaluator as-is.
    Directive(&'a [u8]),
    /// Escaped literal with the leading backslash already removed.
    Escaped(&'a [u8]),
    /// Plain text, emitted unchanged.
    Text(&'a [u8]),
}

/// Trim and classify one line (without its `\n` terminator).
///
/// A trailing `\r` left over from CRLF input is dropped before trimming. Only
/// spaces and horizontal tabs count as surrounding whitespace.
#[must_use]
pub fn classify(raw: &[u8]) -> Line<'_> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let trimmed = trim(raw);

    match trimmed {
        [] => Line::Blank,
        [MARKER, ..] => Line::Directive(trimmed),
        [ESCAPE, MARKER, ..] => Line::Escaped(&trimmed[1..]),
        _ => Line::Text(trimmed),
    }
}

fn trim(bytes: &[u8]) -> &[u8] {
    let is_blank = |b: &u8| *b == b' ' || *b == b'\t';
    let start = bytes
        .iter()
        .position(|b| !is_blank(b))
        .unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_blank(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

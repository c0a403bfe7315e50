//! Shared line-scanning helpers for the flat-text catalog formats.
//!
//! Both the fuzzer catalog and the alphabet catalog use the same defensive
//! ingestion rules: a hard byte budget, printable-ASCII-only content, a
//! line-count ceiling, and a cheap header shape check before any field
//! splitting. The two record shapes differ only in where the first two
//! `:` delimiters sit, so the shape is parameterized here.

/// Hard cap on bytes consumed from a resource, discarded bytes included.
pub(crate) const MAX_CHARS: usize = 65_535;

/// Hard cap on the number of lines a resource may contain.
pub(crate) const MAX_LINES: usize = 2_048;

/// Lines longer than this are ignored by the record scanners.
pub(crate) const MAX_LINE_LENGTH: usize = 512;

/// Strip a raw resource down to printable ASCII and newlines, consuming at
/// most [`MAX_CHARS`] input bytes. Every byte read counts against the
/// budget, whether or not it is kept.
pub(crate) fn sanitize(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().min(MAX_CHARS));
    for &b in bytes.iter().take(MAX_CHARS) {
        if (0x20..=0x7e).contains(&b) || b == b'\n' {
            out.push(b as char);
        }
    }
    out
}

/// Split sanitized contents into lines. Returns `None` when the line count
/// exceeds [`MAX_LINES`], in which case the whole resource is untrusted.
pub(crate) fn split_lines(contents: &str) -> Option<Vec<&str>> {
    let lines: Vec<&str> = contents.split('\n').collect();
    if lines.len() > MAX_LINES {
        return None;
    }
    Some(lines)
}

/// Positions of the first two `:` delimiters in a header line.
///
/// The fuzzer catalog uses `(1, 13)` (single-char kind, 11-char id); the
/// alphabet catalog uses `(1, 5)` (single-char kind, 3-char name).
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderShape {
    pub first_colon: usize,
    pub second_colon: usize,
}

impl HeaderShape {
    /// Cheap pre-check that a line is a plausible record header, done on
    /// byte offsets before paying for the field split. Sanitized input is
    /// pure ASCII, so byte indexing is safe.
    pub fn matches(&self, line: &str) -> bool {
        let bytes = line.as_bytes();
        bytes.get(self.first_colon) == Some(&b':')
            && bytes.get(self.second_colon) == Some(&b':')
    }
}

/// Split a header line into its exactly-four `:`-delimited fields.
///
/// Returns `None` when the line fails the shape pre-check or does not
/// split into exactly four fields; callers treat that as "not a header"
/// and move on to the next line.
pub(crate) fn header_fields<'a>(line: &'a str, shape: HeaderShape) -> Option<[&'a str; 4]> {
    if !shape.matches(line) {
        return None;
    }
    let mut fields = line.split(':');
    let out = [fields.next()?, fields.next()?, fields.next()?, fields.next()?];
    if fields.next().is_some() {
        return None;
    }
    Some(out)
}

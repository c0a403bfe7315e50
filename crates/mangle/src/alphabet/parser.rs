//! Flat-text alphabet loader.
//!
//! One record:
//!
//! ```text
//! <kind>:<name>:<comment>:<length>
//! ><description>
//! <element 1>
//! ...
//! <element length>
//! ```
//!
//! Same defensive scanning rules as the fuzzer catalog, with a narrower
//! header shape: a three-character name, a comment of at most 24
//! characters, and at most 32 elements. Unlike the catalog, the first
//! definition of a name wins and later duplicates are skipped.

use indexmap::IndexMap;

use crate::catalog::Kind;
use crate::load::{LoadReport, LoadStatus, SkipReason, SkippedRecord};
use crate::scan::{self, HeaderShape, MAX_LINE_LENGTH};

use super::generator::Alphabet;

/// Header shape for alphabet records: single-char kind, 3-char name.
const ALPHABET_SHAPE: HeaderShape = HeaderShape { first_colon: 1, second_colon: 5 };

/// Ceiling on the comment field length.
const MAX_COMMENT_LENGTH: usize = 24;

/// Ceiling on the declared element count.
const MAX_ELEMENTS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Header {
    kind: Kind,
    name: String,
    comment: String,
    length: usize,
}

/// Ordered validation of the four header fields. The first failing
/// predicate decides the skip reason.
fn parse_header(fields: [&str; 4]) -> Result<Header, SkipReason> {
    let [kind_field, name, comment, length_field] = fields;

    // Only the replacive and recursive kinds exist for alphabets.
    let kind = match kind_field.chars().next().and_then(Kind::from_tag) {
        Some(kind @ (Kind::Replacive | Kind::Recursive)) => kind,
        _ => return Err(SkipReason::UnknownKind),
    };

    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }
    if comment.is_empty() {
        return Err(SkipReason::EmptyComment);
    }
    if comment.len() > MAX_COMMENT_LENGTH {
        return Err(SkipReason::CommentTooLong);
    }

    let length: usize = length_field
        .parse()
        .map_err(|_| SkipReason::BadPayloadCount)?;
    if length == 0 || length > MAX_ELEMENTS {
        return Err(SkipReason::LengthOutOfRange);
    }

    Ok(Header {
        kind,
        name: name.to_string(),
        comment: comment.to_string(),
        length,
    })
}

/// Scan sanitized resource contents into alphabets, first definition of a
/// name winning.
pub(crate) fn parse(raw: &[u8]) -> (IndexMap<String, Alphabet>, LoadReport) {
    let mut alphabets = IndexMap::new();

    let contents = scan::sanitize(raw);
    let Some(lines) = scan::split_lines(&contents) else {
        return (alphabets, LoadReport::aborted(LoadStatus::TooManyLines));
    };

    let mut report = LoadReport::new();

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with('#') {
            continue;
        }
        if line.len() > MAX_LINE_LENGTH {
            continue;
        }
        if !ALPHABET_SHAPE.matches(line) {
            continue;
        }

        match parse_record(&lines, i, &alphabets) {
            Ok(alphabet) => {
                report.records_loaded += 1;
                alphabets.insert(alphabet.name().to_string(), alphabet);
            }
            Err(reason) => {
                report.skipped.push(SkippedRecord { line: i + 1, reason });
            }
        }
    }

    (alphabets, report)
}

/// Parse one candidate record whose header sits at line `i`.
fn parse_record(
    lines: &[&str],
    i: usize,
    existing: &IndexMap<String, Alphabet>,
) -> Result<Alphabet, SkipReason> {
    let fields =
        scan::header_fields(lines[i], ALPHABET_SHAPE).ok_or(SkipReason::MalformedHeader)?;
    let header = parse_header(fields)?;

    // One description line plus `length` element lines must remain.
    if i + header.length + 1 >= lines.len() {
        return Err(SkipReason::TruncatedRecord);
    }

    let description_line = lines[i + 1];
    if !description_line.starts_with('>') {
        return Err(SkipReason::MissingDescriptionLine);
    }

    if existing.contains_key(&header.name) {
        return Err(SkipReason::DuplicateName);
    }

    let elements: Vec<String> = (1..=header.length)
        .map(|j| lines[i + 1 + j].to_string())
        .collect();

    Ok(Alphabet::new(
        header.kind,
        header.name,
        header.comment,
        &description_line[1..],
        elements,
    ))
}

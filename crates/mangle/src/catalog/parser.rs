//! Flat-text catalog loader.
//!
//! The catalog format is line-oriented. One record:
//!
//! ```text
//! <kind>:<id>:<name>:<payloadCount>
//! ><category1>|<category2>|...
//! >><reserved comment>
//! <payload line 1>
//! ...
//! <payload line payloadCount>
//! ```
//!
//! The loader is deliberately forgiving: a malformed record is skipped and
//! scanning continues on the very next line, so a handful of corrupt
//! entries never poisons the whole catalog. Only the conditions named by
//! [`LoadStatus`] abort a load, and even those leave the caller with a
//! usable catalog.

use std::collections::HashMap;

use crate::load::{LoadReport, LoadStatus, SkipReason, SkippedRecord};
use crate::scan::{self, HeaderShape, MAX_LINE_LENGTH};

use super::prototype::{Kind, Prototype, MAX_RECORD_ITEMS};

/// Category assigned to records that declare no usable category.
pub(crate) const DEFAULT_CATEGORY: &str = "Mangle";

/// Header shape for fuzzer records: single-char kind, 11-char id.
const FUZZER_SHAPE: HeaderShape = HeaderShape { first_colon: 1, second_colon: 13 };

/// Typed header record, produced by a single structured parse of the
/// header line before any further validation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Header {
    kind: Kind,
    id: String,
    name: String,
    payload_count: usize,
}

/// Ordered validation of the four header fields. The first failing
/// predicate decides the skip reason.
fn parse_header(fields: [&str; 4]) -> Result<Header, SkipReason> {
    let [kind_field, id, name, count_field] = fields;

    let kind = kind_field
        .chars()
        .next()
        .and_then(Kind::from_tag)
        .ok_or(SkipReason::UnknownKind)?;

    if id.is_empty() {
        return Err(SkipReason::EmptyId);
    }
    if name.is_empty() {
        return Err(SkipReason::EmptyName);
    }
    if name.len() > MAX_RECORD_ITEMS {
        return Err(SkipReason::NameTooLong);
    }

    let payload_count: usize = count_field
        .parse()
        .map_err(|_| SkipReason::BadPayloadCount)?;
    if payload_count > MAX_RECORD_ITEMS {
        return Err(SkipReason::TooManyPayloads);
    }
    if payload_count == 0 {
        return Err(SkipReason::ZeroPayloads);
    }

    Ok(Header {
        kind,
        id: id.to_string(),
        name: name.to_string(),
        payload_count,
    })
}

/// Parse the `>`-prefixed category line into usable category names:
/// split on `|`, trim surrounding spaces, drop empties.
fn parse_categories(line: &str) -> Result<Vec<String>, SkipReason> {
    let categories: Vec<String> = line[1..]
        .split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if categories.len() > MAX_RECORD_ITEMS {
        return Err(SkipReason::TooManyCategories);
    }
    Ok(categories)
}

/// Scan sanitized resource contents into prototypes.
///
/// The scan advances exactly one line per iteration, so payload lines are
/// themselves re-examined as header candidates; only lines matching the
/// header shape can start a record. Later records overwrite earlier ones
/// with the same id.
pub(crate) fn parse(raw: &[u8]) -> (HashMap<String, Prototype>, LoadReport) {
    let mut prototypes = HashMap::new();

    let contents = scan::sanitize(raw);
    let Some(lines) = scan::split_lines(&contents) else {
        return (prototypes, LoadReport::aborted(LoadStatus::TooManyLines));
    };

    let mut report = LoadReport::new();

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with('#') {
            continue;
        }
        if line.len() > MAX_LINE_LENGTH {
            continue;
        }
        if !FUZZER_SHAPE.matches(line) {
            continue;
        }

        match parse_record(&lines, i) {
            Ok(proto) => {
                report.records_loaded += 1;
                prototypes.insert(proto.id().to_string(), proto);
            }
            Err(reason) => {
                report.skipped.push(SkippedRecord { line: i + 1, reason });
            }
        }
    }

    (prototypes, report)
}

/// Parse one candidate record whose header sits at line `i`.
fn parse_record(lines: &[&str], i: usize) -> Result<Prototype, SkipReason> {
    let fields =
        scan::header_fields(lines[i], FUZZER_SHAPE).ok_or(SkipReason::MalformedHeader)?;
    let header = parse_header(fields)?;

    if i + header.payload_count > lines.len() {
        return Err(SkipReason::TruncatedRecord);
    }

    let category_line = lines.get(i + 1).copied().unwrap_or_default();
    if !category_line.starts_with('>') {
        return Err(SkipReason::MissingCategoryLine);
    }
    let separator_line = lines.get(i + 2).copied().unwrap_or_default();
    if !separator_line.starts_with(">>") {
        return Err(SkipReason::MissingSeparatorLine);
    }

    let categories = parse_categories(category_line)?;

    let mut proto = Prototype::new(header.kind, header.id, header.name);
    if categories.is_empty() {
        proto.add_category(DEFAULT_CATEGORY);
    } else {
        for category in categories {
            proto.add_category(category);
        }
    }

    // A fragment line past the end of the resource drops that one
    // fragment, not the record.
    for j in 1..=header.payload_count {
        if let Some(payload) = lines.get(i + 2 + j) {
            proto.add_payload(*payload);
        }
    }

    Ok(proto)
}

//! Load status and reporting shared by the catalog and alphabet loaders.
//!
//! Both loaders follow the same two-tier error design: three conditions
//! abort a whole load (missing resource, unreadable resource, oversized
//! resource) and are reported as a [`LoadStatus`]; every other malformed
//! record is skipped with a [`SkipReason`] and scanning continues. A load
//! therefore never returns `Err`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Outcome of a whole resource load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// The resource was read and scanned end to end.
    Ok,
    /// The resource does not exist; only synthetic entries are present.
    ResourceNotFound,
    /// The resource exists but could not be read.
    IoError,
    /// The resource holds more lines than the scanner trusts; nothing
    /// was loaded from it.
    TooManyLines,
}

/// Why one candidate record was rejected. Rejection always skips the
/// single record and continues scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The line matched the header shape but did not split into exactly
    /// four `:` fields.
    MalformedHeader,
    /// The kind tag is not in the allow-listed set for this record shape.
    UnknownKind,
    /// The id field is empty.
    EmptyId,
    /// The name field is empty.
    EmptyName,
    /// The name field exceeds the per-record ceiling.
    NameTooLong,
    /// The count field is not a number.
    BadPayloadCount,
    /// The declared payload count exceeds the per-record ceiling.
    TooManyPayloads,
    /// File records may not declare zero payloads; only the synthetic
    /// zero fuzzers carry empty payload lists.
    ZeroPayloads,
    /// Fewer lines remain in the resource than the record declares.
    TruncatedRecord,
    /// The line after the header does not start with `>`.
    MissingCategoryLine,
    /// The second line after the header does not start with `>>`.
    MissingSeparatorLine,
    /// More categories declared than the per-record ceiling.
    TooManyCategories,
    /// Alphabet records: the comment field is empty.
    EmptyComment,
    /// Alphabet records: the comment field exceeds its ceiling.
    CommentTooLong,
    /// Alphabet records: the element count is outside the accepted range.
    LengthOutOfRange,
    /// Alphabet records: the line after the header does not start with
    /// `>`.
    MissingDescriptionLine,
    /// Alphabet records: an alphabet with this name already exists; the
    /// first definition wins.
    DuplicateName,
}

/// One rejected record: the 1-based header line and the first predicate
/// that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub line: usize,
    pub reason: SkipReason,
}

/// Provenance of a loaded resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the resource.
    pub path: PathBuf,
    /// SHA-256 hash of the raw resource contents.
    pub hash: String,
    /// Resource size in bytes.
    pub size_bytes: u64,
    /// When the resource was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl ResourceMetadata {
    pub(crate) fn new(path: &Path, contents: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        Self {
            file: path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            hash,
            size_bytes: contents.len() as u64,
            loaded_at: Utc::now(),
        }
    }
}

/// Report produced by every load, successful or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// Overall load status.
    pub status: LoadStatus,
    /// Number of records parsed into entries (synthetic entries not
    /// included).
    pub records_loaded: usize,
    /// Records rejected during the scan, with reasons.
    pub skipped: Vec<SkippedRecord>,
    /// Provenance of the resource, when it was read from a file.
    pub resource: Option<ResourceMetadata>,
}

impl LoadReport {
    pub(crate) fn new() -> Self {
        Self {
            status: LoadStatus::Ok,
            records_loaded: 0,
            skipped: Vec::new(),
            resource: None,
        }
    }

    pub(crate) fn aborted(status: LoadStatus) -> Self {
        Self {
            status,
            records_loaded: 0,
            skipped: Vec::new(),
            resource: None,
        }
    }

    /// Whether the resource was read and scanned end to end.
    pub fn is_ok(&self) -> bool {
        self.status == LoadStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_metadata_hashes_contents() {
        let meta = ResourceMetadata::new(Path::new("/tmp/fuzzers.def"), b"abc");
        assert_eq!(meta.file, "fuzzers.def");
        assert_eq!(meta.size_bytes, 3);
        assert_eq!(
            meta.hash,
            "sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_report_is_ok() {
        assert!(LoadReport::new().is_ok());
        assert!(!LoadReport::aborted(LoadStatus::TooManyLines).is_ok());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut report = LoadReport::new();
        report.records_loaded = 2;
        report.skipped.push(SkippedRecord {
            line: 7,
            reason: SkipReason::TooManyPayloads,
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["records_loaded"], 2);
        assert_eq!(json["skipped"][0]["line"], 7);
        assert_eq!(json["skipped"][0]["reason"], "too_many_payloads");
    }
}

//! Alphabet definitions and the loaded alphabet set.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Kind;
use crate::load::{LoadReport, LoadStatus, ResourceMetadata};

use super::parser;

/// Bundled default alphabets, compiled into the library.
const BUNDLED_ALPHABETS: &str = include_str!("../../data/alphabets.def");

/// One named alphabet: an ordered list of literal token elements used for
/// template substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alphabet {
    kind: Kind,
    name: String,
    comment: String,
    description: String,
    elements: Vec<String>,
}

impl Alphabet {
    pub(crate) fn new(
        kind: Kind,
        name: impl Into<String>,
        comment: impl Into<String>,
        description: impl Into<String>,
        elements: Vec<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            comment: comment.into(),
            description: description.into(),
            elements,
        }
    }

    /// Alphabet kind; only replacive and recursive kinds occur here.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Three-character alphabet name, unique across the set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short comment from the header line.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Free-text description line.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The element at the given ordinal, in declaration order.
    pub fn element(&self, ordinal: usize) -> Option<&str> {
        self.elements.get(ordinal).map(String::as_str)
    }

    /// All elements in declaration order.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Declared number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Alphabets always carry at least one element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// The loaded set of alphabets, keyed by name in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Alphabets {
    alphabets: IndexMap<String, Alphabet>,
}

impl Alphabets {
    /// Load the alphabet set bundled with the library.
    pub fn load() -> (Alphabets, LoadReport) {
        let (alphabets, report) = parser::parse(BUNDLED_ALPHABETS.as_bytes());
        (Alphabets { alphabets }, report)
    }

    /// Load an alphabet set from a definitions file on disk. Missing or
    /// unreadable files are reported through the status, never as a hard
    /// error.
    pub fn load_from_path(path: impl AsRef<Path>) -> (Alphabets, LoadReport) {
        let path = path.as_ref();

        let raw = match std::fs::read(path) {
            Ok(raw) => raw,
            Err(e) => {
                let status = if e.kind() == std::io::ErrorKind::NotFound {
                    LoadStatus::ResourceNotFound
                } else {
                    LoadStatus::IoError
                };
                return (Alphabets::default(), LoadReport::aborted(status));
            }
        };

        let (alphabets, mut report) = parser::parse(&raw);
        report.resource = Some(ResourceMetadata::new(path, &raw));
        (Alphabets { alphabets }, report)
    }

    /// Load an alphabet set from an in-memory definitions string.
    pub fn load_from_str(contents: &str) -> (Alphabets, LoadReport) {
        let (alphabets, report) = parser::parse(contents.as_bytes());
        (Alphabets { alphabets }, report)
    }

    /// Look up an alphabet by name.
    pub fn get(&self, name: &str) -> Option<&Alphabet> {
        self.alphabets.get(name)
    }

    /// Whether an alphabet with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.alphabets.contains_key(name)
    }

    /// Alphabet names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.alphabets.keys().map(String::as_str).collect()
    }

    /// Number of alphabets in the set.
    pub fn len(&self) -> usize {
        self.alphabets.len()
    }

    /// Whether the set holds no alphabets.
    pub fn is_empty(&self) -> bool {
        self.alphabets.is_empty()
    }
}

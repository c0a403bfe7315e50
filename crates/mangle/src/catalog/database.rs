//! The catalog: every known prototype, keyed by id.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::error::{abbreviate, MangleError, Result};
use crate::fuzzer::{BigIntFuzzer, Fuzzer};
use crate::load::{LoadReport, LoadStatus, ResourceMetadata};

use super::parser;
use super::prototype::{Kind, Prototype};

/// Bundled default catalog, compiled into the library.
const BUNDLED_CATALOG: &str = include_str!("../../data/fuzzers.def");

/// Category carried by the synthetic zero fuzzers.
pub(crate) const ZERO_CATEGORY: &str = "Zero Fuzzers";

/// Synthetic zero fuzzers: (id, name, payload repeats). Always present in
/// every catalog, regardless of what the resource held.
const ZERO_FUZZERS: [(&str, &str, usize); 5] = [
    ("999-ZER-10K", "10000 Plain Requests", 10_000),
    ("999-ZER-1KI", "1000 Plain Requests", 1_000),
    ("999-ZER-100", "100 Plain Requests", 100),
    ("999-ZER-TEN", "10 Plain Requests", 10),
    ("999-ZER-ONE", "1 Plain Request", 1),
];

/// A collection of fuzzer prototypes loaded from a definitions resource.
///
/// A catalog is built once, up front, and is read-only afterwards; it can
/// be shared freely across threads. Fuzzers are obtained through the
/// factory methods [`create_fuzzer`](Catalog::create_fuzzer) and
/// [`create_bigint_fuzzer`](Catalog::create_bigint_fuzzer), each bound to
/// one prototype and owning its own iteration state.
#[derive(Debug, Clone)]
pub struct Catalog {
    prototypes: HashMap<String, Prototype>,
}

impl Catalog {
    /// Load the catalog bundled with the library.
    pub fn load() -> (Catalog, LoadReport) {
        let (prototypes, report) = parser::parse(BUNDLED_CATALOG.as_bytes());
        (Self::with_zero_fuzzers(prototypes), report)
    }

    /// Load a catalog from a definitions file on disk.
    ///
    /// A missing or unreadable file is reported through the
    /// [`LoadStatus`], never as a hard error; the returned catalog then
    /// holds only the synthetic zero fuzzers.
    pub fn load_from_path(path: impl AsRef<Path>) -> (Catalog, LoadReport) {
        let path = path.as_ref();

        let raw = match std::fs::read(path) {
            Ok(raw) => raw,
            Err(e) => {
                let status = if e.kind() == std::io::ErrorKind::NotFound {
                    LoadStatus::ResourceNotFound
                } else {
                    LoadStatus::IoError
                };
                return (
                    Self::with_zero_fuzzers(HashMap::new()),
                    LoadReport::aborted(status),
                );
            }
        };

        let (prototypes, mut report) = parser::parse(&raw);
        report.resource = Some(ResourceMetadata::new(path, &raw));
        (Self::with_zero_fuzzers(prototypes), report)
    }

    /// Load a catalog from an in-memory definitions string.
    pub fn load_from_str(contents: &str) -> (Catalog, LoadReport) {
        let (prototypes, report) = parser::parse(contents.as_bytes());
        (Self::with_zero_fuzzers(prototypes), report)
    }

    fn with_zero_fuzzers(mut prototypes: HashMap<String, Prototype>) -> Catalog {
        for (id, name, repeats) in ZERO_FUZZERS {
            let mut proto = Prototype::new(Kind::Zero, id, name);
            proto.add_category(ZERO_CATEGORY);
            for _ in 0..repeats {
                proto.add_payload("");
            }
            prototypes.insert(id.to_string(), proto);
        }
        Catalog { prototypes }
    }

    /// Whether a prototype with the given id exists.
    pub fn contains_prototype(&self, id: &str) -> bool {
        self.prototypes.contains_key(id)
    }

    /// Look up a prototype by id.
    pub fn get(&self, id: &str) -> Option<&Prototype> {
        self.prototypes.get(id)
    }

    /// Create a fuzzer bound to the prototype with the given id, producing
    /// every ordered `length`-combination of its payloads.
    ///
    /// Fails with [`MangleError::NotFound`] for an unknown id. The length
    /// is not range-checked here; the fuzzer constructor rejects lengths
    /// below 1 and combination spaces beyond the 64-bit counter.
    pub fn create_fuzzer(&self, id: &str, length: usize) -> Result<Fuzzer<'_>> {
        let proto = self.lookup(id)?;
        Fuzzer::new(proto, length)
    }

    /// Create an arbitrary-precision fuzzer for combination spaces larger
    /// than the native counter allows. Same contract and output order as
    /// [`create_fuzzer`](Catalog::create_fuzzer).
    pub fn create_bigint_fuzzer(&self, id: &str, length: usize) -> Result<BigIntFuzzer<'_>> {
        let proto = self.lookup(id)?;
        BigIntFuzzer::new(proto, length)
    }

    fn lookup(&self, id: &str) -> Result<&Prototype> {
        self.prototypes.get(id).ok_or_else(|| MangleError::NotFound {
            id: abbreviate(id, 10),
        })
    }

    /// All prototype ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// All prototype names, sorted. Names are not guaranteed unique; use
    /// [`ids`](Catalog::ids) where uniqueness matters.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.prototypes.values().map(Prototype::name).collect();
        names.sort_unstable();
        names
    }

    /// Every distinct category across all prototypes, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .prototypes
            .values()
            .flat_map(Prototype::categories)
            .collect();
        set.into_iter().collect()
    }

    /// Names of all prototypes tagged with the given category, sorted.
    pub fn names_in_category(&self, category: &str) -> Vec<&str> {
        let set: BTreeSet<&str> = self
            .prototypes
            .values()
            .filter(|p| p.is_member_of(category))
            .map(Prototype::name)
            .collect();
        set.into_iter().collect()
    }

    /// Payload fragments for the given id; empty for an unknown id.
    pub fn payloads(&self, id: &str) -> &[String] {
        self.prototypes
            .get(id)
            .map(Prototype::payloads)
            .unwrap_or(&[])
    }

    /// Number of payload fragments for the given id; 0 for an unknown id.
    pub fn payload_count(&self, id: &str) -> usize {
        self.prototypes.get(id).map_or(0, Prototype::payload_count)
    }

    /// The kind of the prototype with the given id.
    pub fn kind(&self, id: &str) -> Option<Kind> {
        self.prototypes.get(id).map(Prototype::kind)
    }

    /// The kind of the first prototype matching the given name
    /// (case-insensitive).
    pub fn kind_from_name(&self, name: &str) -> Option<Kind> {
        self.id_from_name(name).and_then(|id| self.kind(id))
    }

    /// The name of the prototype with the given id.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.prototypes.get(id).map(Prototype::name)
    }

    /// The id of a prototype, looked up by name (case-insensitive). When
    /// several prototypes share the name, the id ordering decides.
    pub fn id_from_name(&self, name: &str) -> Option<&str> {
        self.ids()
            .into_iter()
            .find(|id| self.prototypes[*id].name().eq_ignore_ascii_case(name))
    }

    /// Number of prototypes in the catalog, synthetic zero fuzzers
    /// included.
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// A catalog is never empty: the zero fuzzers are always present.
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

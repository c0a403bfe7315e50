//! Fuzzer prototype definition: kind, identity, categories, payloads.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Shared ceiling for per-record quantities: prototype name length,
/// declared payload count, and category count.
pub const MAX_RECORD_ITEMS: usize = 127;

/// The allow-listed fuzzer kinds, each with a single-character tag used in
/// the catalog file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Each payload is sent as-is in place of the fuzzed token.
    Replacive,
    /// Payloads form an alphabet expanded to every ordered combination.
    Recursive,
    /// Payloads are combined across positions as a cross product.
    CrossProduct,
    /// Plain repeat-send stress fuzzer with empty payloads.
    Zero,
}

impl Kind {
    /// Decode a kind from its file-format tag character.
    pub fn from_tag(tag: char) -> Option<Kind> {
        match tag {
            'P' => Some(Kind::Replacive),
            'R' => Some(Kind::Recursive),
            'X' => Some(Kind::CrossProduct),
            'Z' => Some(Kind::Zero),
            _ => None,
        }
    }

    /// The single-character tag used in the catalog file format.
    pub fn tag(&self) -> char {
        match self {
            Kind::Replacive => 'P',
            Kind::Recursive => 'R',
            Kind::CrossProduct => 'X',
            Kind::Zero => 'Z',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Replacive => "Replacive",
            Kind::Recursive => "Recursive",
            Kind::CrossProduct => "Cross Product",
            Kind::Zero => "Zero",
        };
        write!(f, "{name}")
    }
}

/// One fuzzer definition: a named, categorized, ordered list of payload
/// fragments.
///
/// Prototypes are built by the catalog loader (or injected as synthetic
/// zero fuzzers) and are immutable once the owning [`Catalog`] has been
/// constructed.
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prototype {
    kind: Kind,
    id: String,
    name: String,
    categories: IndexSet<String>,
    payloads: Vec<String>,
}

impl Prototype {
    pub(crate) fn new(kind: Kind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: name.into(),
            categories: IndexSet::new(),
            payloads: Vec::new(),
        }
    }

    pub(crate) fn add_category(&mut self, category: impl Into<String>) {
        self.categories.insert(category.into());
    }

    pub(crate) fn add_payload(&mut self, payload: impl Into<String>) {
        self.payloads.push(payload.into());
    }

    /// The fuzzer kind of this prototype.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Short stable identifier, unique across the catalog.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable label; not required to be unique.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category tags in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Whether this prototype is tagged with the given category.
    pub fn is_member_of(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Payload fragments in declaration order. Duplicates and empty
    /// strings are allowed.
    pub fn payloads(&self) -> &[String] {
        &self.payloads
    }

    /// Number of payload fragments.
    pub fn payload_count(&self) -> usize {
        self.payloads.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_round_trip() {
        for kind in [Kind::Replacive, Kind::Recursive, Kind::CrossProduct, Kind::Zero] {
            assert_eq!(Kind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_kind_rejects_unknown_tags() {
        assert_eq!(Kind::from_tag('Q'), None);
        assert_eq!(Kind::from_tag('p'), None);
        assert_eq!(Kind::from_tag(':'), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::CrossProduct.to_string(), "Cross Product");
        assert_eq!(Kind::Replacive.to_string(), "Replacive");
    }

    #[test]
    fn test_prototype_preserves_payload_order_and_duplicates() {
        let mut proto = Prototype::new(Kind::Replacive, "001-TST-ABC", "Test");
        proto.add_payload("GET");
        proto.add_payload("PUT");
        proto.add_payload("GET");
        proto.add_payload("");
        assert_eq!(proto.payloads(), ["GET", "PUT", "GET", ""]);
        assert_eq!(proto.payload_count(), 4);
    }

    #[test]
    fn test_prototype_categories_deduplicate() {
        let mut proto = Prototype::new(Kind::Recursive, "002-TST-DEF", "Test");
        proto.add_category("Exploits");
        proto.add_category("SQL Injection");
        proto.add_category("Exploits");
        let cats: Vec<&str> = proto.categories().collect();
        assert_eq!(cats, ["Exploits", "SQL Injection"]);
        assert!(proto.is_member_of("SQL Injection"));
        assert!(!proto.is_member_of("sql injection"));
    }
}

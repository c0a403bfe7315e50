//! Mangle: deterministic fuzz payload generation from declarative catalogs.
//!
//! Mangle loads a flat-text catalog of fuzzer prototypes, each an ordered
//! list of payload fragments, and expands any prototype into every ordered
//! combination of its fragments up to a requested length. Expansion is a
//! lazy fixed-radix odometer, so sequences are deterministic and
//! restartable, and a big-integer variant covers combination spaces past
//! the 64-bit counter.
//!
//! # Design
//!
//! - **Resilient loading**: malformed catalog records are skipped one at a
//!   time and reported, never aborting the whole load
//! - **Deterministic output**: two fuzzers over the same prototype and
//!   length always produce the identical sequence
//! - **No hidden state**: the catalog is an explicit value owned by the
//!   caller, read-only after construction
//!
//! # Example
//!
//! ```
//! use mangle::Catalog;
//!
//! let (catalog, report) = Catalog::load();
//! assert!(report.is_ok());
//!
//! let fuzzer = catalog.create_fuzzer("031-HEX-LOW", 2).unwrap();
//! assert_eq!(fuzzer.total(), 256);
//! for payload in fuzzer {
//!     // hand each payload to the transport
//!     let _ = payload;
//! }
//! ```

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod fuzzer;
pub mod load;

mod scan;

pub use alphabet::{Alphabet, Alphabets};
pub use catalog::{Catalog, Kind, Prototype};
pub use error::{MangleError, Result};
pub use fuzzer::{BigIntFuzzer, Fuzzer};
pub use load::{LoadReport, LoadStatus, SkipReason};

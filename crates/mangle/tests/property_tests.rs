//! Property-based tests for the catalog loader and the fuzzers.
//!
//! These tests use proptest to generate random inputs and verify that
//! the loader and the combination iterators maintain their invariants
//! under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: the loader never crashes on any resource contents
//! 2. **Determinism**: the same prototype and length always produce the
//!    same payload sequence
//! 3. **Parity**: the native and big-integer fuzzers agree wherever both
//!    are constructible
//! 4. **Completeness**: a fuzzer produces exactly `S^L` payloads with no
//!    repeated index tuple
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p mangle --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p mangle --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use mangle::{Catalog, LoadStatus};

// =============================================================================
// Test Strategies
// =============================================================================

/// Arbitrary bytes, including control characters and invalid UTF-8.
fn raw_resource() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..2_000)
}

/// Text that looks like catalog records, valid or slightly off.
fn record_like_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plausible record with a well-shaped id
        "[PRXZ]:[0-9]{3}-[A-Z]{3}-[A-Z0-9]{3}:[ -~]{1,30}:[0-9]{1,3}\n>[ -~]{0,40}\n>>\n([ -~]{0,60}\n){0,10}",
        // Random colon-delimited noise
        "[ -~]{0,20}(:[ -~]{0,20}){0,6}\n",
        // Comments and blank lines
        "#[ -~]{0,60}\n\n",
    ]
}

/// Small payload alphabets for the fuzzer properties.
fn payload_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,6}", 1..6)
}

/// Build a one-record catalog holding exactly the given payloads.
fn catalog_for(payloads: &[String]) -> Catalog {
    let mut text = format!("R:001-GEN-TST:Generated:{}\n>Generated\n>>\n", payloads.len());
    for p in payloads {
        text.push_str(p);
        text.push('\n');
    }
    let (catalog, report) = Catalog::load_from_str(&text);
    assert_eq!(report.status, LoadStatus::Ok);
    catalog
}

// =============================================================================
// Loader Properties
// =============================================================================

mod loader_tests {
    use super::*;

    proptest! {
        /// The loader never panics, whatever the resource holds.
        #[test]
        fn never_panics_on_raw_bytes(input in raw_resource()) {
            let text = String::from_utf8_lossy(&input).into_owned();
            let _ = Catalog::load_from_str(&text);
        }

        /// The loader never panics on record-like text.
        #[test]
        fn never_panics_on_record_like_text(input in record_like_text()) {
            let _ = Catalog::load_from_str(&input);
        }

        /// Loading is deterministic: the same resource always yields the
        /// same ids and the same report.
        #[test]
        fn loading_is_deterministic(input in record_like_text()) {
            let (first, report1) = Catalog::load_from_str(&input);
            let (second, report2) = Catalog::load_from_str(&input);

            prop_assert_eq!(first.ids(), second.ids());
            prop_assert_eq!(report1.status, report2.status);
            prop_assert_eq!(report1.records_loaded, report2.records_loaded);
        }

        /// The synthetic zero fuzzers survive any resource contents.
        #[test]
        fn zero_fuzzers_always_present(input in record_like_text()) {
            let (catalog, _) = Catalog::load_from_str(&input);
            prop_assert!(catalog.len() >= 5);
            prop_assert!(catalog.contains_prototype("999-ZER-ONE"));
            prop_assert!(catalog.contains_prototype("999-ZER-10K"));
        }
    }
}

// =============================================================================
// Fuzzer Properties
// =============================================================================

mod fuzzer_tests {
    use super::*;

    proptest! {
        /// Two freshly constructed fuzzers produce identical sequences.
        #[test]
        fn sequences_are_restartable(payloads in payload_set(), length in 1usize..4) {
            let catalog = catalog_for(&payloads);
            let first: Vec<String> =
                catalog.create_fuzzer("001-GEN-TST", length).unwrap().collect();
            let second: Vec<String> =
                catalog.create_fuzzer("001-GEN-TST", length).unwrap().collect();
            prop_assert_eq!(first, second);
        }

        /// The sequence has exactly S^L elements.
        #[test]
        fn sequence_is_complete(payloads in payload_set(), length in 1usize..4) {
            let catalog = catalog_for(&payloads);
            let fuzzer = catalog.create_fuzzer("001-GEN-TST", length).unwrap();
            let total = fuzzer.total();
            prop_assert_eq!(fuzzer.count() as u64, total);
            prop_assert_eq!(total, (payloads.len() as u64).pow(length as u32));
        }

        /// No index tuple repeats: with distinct payloads every produced
        /// string is unique.
        #[test]
        fn no_duplicate_index_tuples(size in 1usize..6, length in 1usize..4) {
            // Fixed-width distinct fragments make the index tuple readable
            // from the output.
            let payloads: Vec<String> = (0..size).map(|i| format!("<{i}>")).collect();
            let catalog = catalog_for(&payloads);

            let outputs: Vec<String> =
                catalog.create_fuzzer("001-GEN-TST", length).unwrap().collect();
            let distinct: HashSet<&String> = outputs.iter().collect();
            prop_assert_eq!(distinct.len(), outputs.len());
        }

        /// The native and big-integer variants agree output-for-output.
        #[test]
        fn variants_agree(payloads in payload_set(), length in 1usize..4) {
            let catalog = catalog_for(&payloads);
            let native: Vec<String> =
                catalog.create_fuzzer("001-GEN-TST", length).unwrap().collect();
            let big: Vec<String> =
                catalog.create_bigint_fuzzer("001-GEN-TST", length).unwrap().collect();
            prop_assert_eq!(native, big);
        }
    }
}
